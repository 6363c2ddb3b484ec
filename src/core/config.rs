//! Per-game ruleset configuration.
//!
//! A `GameConfig` is fixed when a game is created and travels embedded in
//! every snapshot, so remote participants validate plays against the same
//! rules as the host.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::deck::CARDS_PER_DECK;

/// Immutable per-game ruleset.
///
/// The `player_names` order fixes seating and therefore turn order.
///
/// ## Example
///
/// ```
/// use uno_engine::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_player_names(["alice", "bob"])
///     .with_max_draws(0) // unlimited draws
///     .with_jump_in(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of 108-card sets shuffled into the shoe.
    pub num_decks: u32,

    /// Cards dealt to each player at setup.
    pub starting_hand_size: usize,

    /// Seating order; names must be unique within a game.
    pub player_names: Vec<String>,

    /// Draws a player may take per turn before a forced pass. 0 = unlimited.
    pub max_draws: u32,

    /// Whether +2 and +4 penalties may be stacked on each other.
    pub plus_twos_stack_with_fours: bool,

    /// Whether accepting a pot containing a +2 also skips the victim's turn.
    pub plus_two_skip: bool,

    /// Whether accepting a pot containing a +4 also skips the victim's turn.
    pub plus_four_skip: bool,

    /// Cards drawn for a missed or contested last-card declaration.
    pub uno_penalty: usize,

    /// Whether exact-match out-of-turn plays are allowed.
    pub jump_in: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_decks: 1,
            starting_hand_size: 7,
            player_names: Vec::new(),
            max_draws: 1,
            plus_twos_stack_with_fours: true,
            plus_two_skip: false,
            plus_four_skip: true,
            uno_penalty: 5,
            jump_in: false,
        }
    }
}

impl GameConfig {
    /// Set the deck count.
    #[must_use]
    pub fn with_num_decks(mut self, decks: u32) -> Self {
        self.num_decks = decks;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the seating order.
    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-turn draw cap (0 = unlimited).
    #[must_use]
    pub fn with_max_draws(mut self, max_draws: u32) -> Self {
        self.max_draws = max_draws;
        self
    }

    /// Allow or forbid stacking +2s and +4s on each other.
    #[must_use]
    pub fn with_plus_twos_stack_with_fours(mut self, enabled: bool) -> Self {
        self.plus_twos_stack_with_fours = enabled;
        self
    }

    /// Skip the victim's turn after an accepted +2 pot.
    #[must_use]
    pub fn with_plus_two_skip(mut self, enabled: bool) -> Self {
        self.plus_two_skip = enabled;
        self
    }

    /// Skip the victim's turn after an accepted +4 pot.
    #[must_use]
    pub fn with_plus_four_skip(mut self, enabled: bool) -> Self {
        self.plus_four_skip = enabled;
        self
    }

    /// Set the last-card declaration penalty.
    #[must_use]
    pub fn with_uno_penalty(mut self, penalty: usize) -> Self {
        self.uno_penalty = penalty;
        self
    }

    /// Allow or forbid jump-in plays.
    #[must_use]
    pub fn with_jump_in(mut self, enabled: bool) -> Self {
        self.jump_in = enabled;
        self
    }

    /// Number of players in this configuration.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Total cards in the shoe.
    #[must_use]
    pub fn shoe_size(&self) -> usize {
        self.num_decks as usize * CARDS_PER_DECK
    }

    /// Check that this configuration describes a dealable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_names.len() < 2 {
            return Err(ConfigError::NotEnoughPlayers {
                found: self.player_names.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for name in &self.player_names {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }

        // One extra card is needed for the opening discard.
        let required = self.player_names.len() * self.starting_hand_size + 1;
        if required > self.shoe_size() {
            return Err(ConfigError::ShoeTooSmall {
                required,
                available: self.shoe_size(),
            });
        }

        Ok(())
    }
}

/// Configuration problems surfaced at game creation.
///
/// These are the one class of failures the engine reports as errors:
/// setting up a game is not a game action, so the silent-rejection posture
/// does not apply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A game needs at least two seats.
    #[error("need at least 2 players, found {found}")]
    NotEnoughPlayers { found: usize },

    /// Player names identify seats and must be unique.
    #[error("duplicate player name: {0}")]
    DuplicateName(String),

    /// Dealing would need more cards than the shoe holds.
    #[error("shoe too small: dealing needs {required} cards, shoe holds {available}")]
    ShoeTooSmall { required: usize, available: usize },

    /// Every undealt card is wild, so no legal opening discard exists.
    #[error("no non-wild card available for the opening discard")]
    NoOpeningCard,
}
