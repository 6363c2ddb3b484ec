//! Draw resolver: drawing from the deck, with the configurable cap.

use tracing::debug;

use crate::core::GameState;
use crate::rules::turn::advance;
use crate::rules::validate::is_valid_play;

/// Draw one card from the deck into `player_index`'s hand.
///
/// Rejected unless the player is current and the game has no winner.
/// Drawing from an empty deck is rejected too - there is no
/// reshuffle-from-discard recovery path.
///
/// With `max_draws >= 1`, reaching the cap while still holding no playable
/// card (checked against the pre-draw top card and pot) forces the turn to
/// pass. With `max_draws == 0` the player may draw indefinitely.
#[must_use]
pub fn draw_card(game: &GameState, player_index: usize) -> GameState {
    if game.winner.is_some() {
        debug!(player_index, "draw rejected: game already won");
        return game.clone();
    }

    if player_index != game.current_player {
        debug!(player_index, current = game.current_player, "draw rejected: not their turn");
        return game.clone();
    }

    let mut next = game.clone();
    let Some(card) = next.deck.pop_front() else {
        debug!(player_index, "draw rejected: deck is empty");
        return game.clone();
    };

    next.players[player_index].cards.push_back(card);
    next.current_draws += 1;
    next.clear_stale_uno();

    let cap = game.config.max_draws;
    if cap >= 1 && next.current_draws >= cap {
        if let Some(top) = game.top_card() {
            let has_playable = next.players[player_index]
                .cards
                .iter()
                .any(|c| is_valid_play(game, top, c, player_index));
            if !has_playable {
                advance(&mut next, 1);
            }
        }
    }

    next.stamp();
    next
}
