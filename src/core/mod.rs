//! Core engine types: RNG, version stamping, configuration, game state.

pub mod config;
pub mod rng;
pub mod state;
pub mod version;

pub use config::{ConfigError, GameConfig};
pub use rng::GameRng;
pub use state::{Direction, GameState, Player};
pub use version::VersionId;
