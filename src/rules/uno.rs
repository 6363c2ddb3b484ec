//! Last-card claim resolver: the "uno" declaration race.
//!
//! A player who plays down to exactly one card is flagged and must declare
//! before anyone else catches them. There is no clock in the engine -
//! urgency is a presentation concern, and first-claim-wins falls out of
//! the host applying actions in arrival order.

use tracing::debug;

use crate::core::GameState;

/// Resolve a claim against the pending last-card flag.
///
/// The flagged player claiming for themselves declares successfully and
/// clears the flag with no penalty. Anyone else claiming first is a
/// successful contest: the flagged player draws `uno_penalty` cards (or
/// as many as the deck holds) and the flag clears.
///
/// Rejected when no flag is pending or the game already has a winner.
#[must_use]
pub fn claim_uno(game: &GameState, claiming_player_index: usize) -> GameState {
    if game.winner.is_some() {
        debug!(claiming_player_index, "claim rejected: game already won");
        return game.clone();
    }

    let Some(flagged) = game.unclaimed_uno else {
        debug!(claiming_player_index, "claim rejected: no pending declaration");
        return game.clone();
    };

    if claiming_player_index >= game.player_count() {
        debug!(claiming_player_index, "claim rejected: no such player");
        return game.clone();
    }

    let mut next = game.clone();
    if claiming_player_index != flagged {
        debug!(claiming_player_index, flagged, "declaration contested");
        for _ in 0..next.config.uno_penalty {
            match next.deck.pop_front() {
                Some(card) => next.players[flagged].cards.push_back(card),
                None => break,
            }
        }
    }

    next.unclaimed_uno = None;
    next.stamp();
    next
}
