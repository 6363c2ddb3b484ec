//! Game state snapshots.
//!
//! A `GameState` is the full shared snapshot exchanged between host and
//! participants. Collections use `im::Vector` so cloning a snapshot is
//! cheap and earlier snapshots remain valid, independent values - the
//! optimistic sync layer holds several generations at once.
//!
//! Resolvers never mutate a caller-visible state: they clone, edit the
//! clone, stamp a fresh version id and return it. A rejected action skips
//! the stamp and hands back an identical snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::version::VersionId;
use crate::cards::Card;

/// Direction of turn order around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Step applied to a player index per offset unit.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A seated player.
///
/// Hand order carries no rules meaning but is preserved for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game.
    pub name: String,

    /// Cards in hand.
    pub cards: Vector<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vector::new(),
        }
    }
}

/// The full game snapshot.
///
/// Membership and seating are fixed for the game's lifetime; everything
/// else changes through the resolvers in [`crate::rules`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Opaque version token, regenerated on every accepted transition.
    pub id: VersionId,

    /// Draw pile; head = next card drawn.
    pub deck: Vector<Card>,

    /// Discard pile; head = active top card.
    pub discard: Vector<Card>,

    /// Seated players, in turn order.
    pub players: Vector<Player>,

    /// Index of the player whose turn it is.
    pub current_player: usize,

    /// Direction of play.
    pub direction: Direction,

    /// Draws taken by the current player this turn.
    pub current_draws: u32,

    /// Pending penalty values while a +2/+4 chain is stacking, e.g. `[2, 4]`.
    pub current_pot: SmallVec<[u8; 4]>,

    /// Winner, once a hand reaches zero cards. Terminal: no further action
    /// is accepted afterwards.
    pub winner: Option<usize>,

    /// Player who just played down to exactly one card and has not yet
    /// declared or been caught.
    pub unclaimed_uno: Option<usize>,

    /// The ruleset this game was created with.
    pub config: GameConfig,
}

impl GameState {
    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The active discard card.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.discard.front()
    }

    /// Sum of the pending penalty pot.
    #[must_use]
    pub fn pot_total(&self) -> usize {
        self.current_pot.iter().map(|&v| v as usize).sum()
    }

    /// Total cards across deck, discard and hands. Constant for the life
    /// of a game: `108 x num_decks`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard.len()
            + self.players.iter().map(|p| p.cards.len()).sum::<usize>()
    }

    /// Stamp a fresh version id. Every accepted transition ends here.
    pub fn stamp(&mut self) {
        self.id = self.id.next();
    }

    /// Drop the last-card flag if the flagged player no longer holds
    /// exactly one card (they played out, or drew back up).
    pub(crate) fn clear_stale_uno(&mut self) {
        if let Some(flagged) = self.unclaimed_uno {
            let still_at_one = self
                .players
                .get(flagged)
                .map(|p| p.cards.len() == 1)
                .unwrap_or(false);
            if !still_at_one {
                self.unclaimed_uno = None;
            }
        }
    }
}
