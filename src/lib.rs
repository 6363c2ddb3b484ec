//! # uno-engine
//!
//! Pure rules engine for a peer-to-peer UNO-style shedding card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation is a function from
//!    `(&GameState, inputs)` to a new `GameState`. Rejected actions return
//!    the input state unchanged (same version id) - there are no action
//!    errors, only ignored actions.
//!
//! 2. **Persistent Snapshots**: `im` data structures make each snapshot an
//!    independent value with cheap cloning. Prior states stay valid
//!    forever, which is what the optimistic sync layer relies on.
//!
//! 3. **Deterministic Randomness**: Shuffling takes an explicit seedable
//!    `GameRng`; the same seed always produces the same game.
//!
//! 4. **Optimistic Versioning**: Every accepted transition stamps a fresh
//!    opaque `VersionId`. A host applies remote proposals only when they
//!    were computed against its current version (see [`sync`]).
//!
//! ## Modules
//!
//! - `core`: RNG, version stamping, configuration, game state
//! - `cards`: Card values and the deck factory
//! - `rules`: The resolvers - setup, turn order, validation, effects,
//!   drawing, penalty pots, last-card claims
//! - `sync`: Wire payloads and the stale-update rejection rule

pub mod cards;
pub mod core;
pub mod rules;
pub mod sync;

// Re-export commonly used types
pub use crate::cards::{Card, CardColor, Color, Face};
pub use crate::core::{ConfigError, Direction, GameConfig, GameRng, GameState, Player, VersionId};
pub use crate::rules::{
    accept_punishment, advance, can_stack_pot, claim_uno, draw_card, is_valid_play, new_game,
    next_player_index, play_card_from_hand,
};
pub use crate::sync::{apply_update, Message};
