//! The resolvers: every rule of the game, as pure state transitions.
//!
//! Each public function takes `&GameState` plus the acting player's inputs
//! and returns a new `GameState`. Accepted actions carry a fresh version
//! id; rejected actions return a snapshot identical to the input (same
//! id), which is the engine's only failure signal.
//!
//! ## Resolvers
//!
//! - [`setup::new_game`]: deal hands, pick a legal opening discard
//! - [`turn`]: directional turn advancement
//! - [`validate`]: is a proposed play legal right now?
//! - [`effects`]: skip / reverse / penalty accumulation
//! - [`play::play_card_from_hand`]: the main play action
//! - [`draw::draw_card`]: drawing with the configurable cap
//! - [`pot::accept_punishment`]: settling an accumulated penalty pot
//! - [`uno::claim_uno`]: the last-card declaration race

pub mod draw;
pub mod effects;
pub mod play;
pub mod pot;
pub mod setup;
pub mod turn;
pub mod uno;
pub mod validate;

pub use draw::draw_card;
pub use play::play_card_from_hand;
pub use pot::accept_punishment;
pub use setup::new_game;
pub use turn::{advance, next_player_index};
pub use uno::claim_uno;
pub use validate::{can_stack_pot, is_valid_play};
