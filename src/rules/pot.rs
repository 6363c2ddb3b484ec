//! Pot resolver: settling an accumulated penalty pot.

use tracing::debug;

use crate::core::GameState;
use crate::rules::turn::advance;

/// Accept the pending penalty pot instead of stacking onto it.
///
/// The current player draws the pot's total (or as many cards as the deck
/// holds) and the pot clears. When the matching skip flag is set
/// (`plus_four_skip` with a 4 in the pot, `plus_two_skip` with a 2), the
/// victim's turn is also skipped; otherwise they keep the turn and play on.
///
/// Rejected unless the player is current, the pot is non-empty and the
/// game has no winner.
#[must_use]
pub fn accept_punishment(game: &GameState, player_index: usize) -> GameState {
    if game.winner.is_some() {
        debug!(player_index, "pot rejected: game already won");
        return game.clone();
    }

    if player_index != game.current_player {
        debug!(player_index, current = game.current_player, "pot rejected: not their turn");
        return game.clone();
    }

    if game.current_pot.is_empty() {
        debug!(player_index, "pot rejected: nothing to accept");
        return game.clone();
    }

    let mut next = game.clone();
    for _ in 0..next.pot_total() {
        match next.deck.pop_front() {
            Some(card) => next.players[player_index].cards.push_back(card),
            None => break,
        }
    }

    let skip = (next.config.plus_four_skip && next.current_pot.contains(&4))
        || (next.config.plus_two_skip && next.current_pot.contains(&2));
    next.current_pot.clear();

    if skip {
        advance(&mut next, 1);
    }

    next.clear_stale_uno();
    next.stamp();
    next
}
