//! The play action: validate, move the card, resolve its effect.

use tracing::debug;

use crate::cards::Color;
use crate::core::GameState;
use crate::rules::effects::resolve_effect;
use crate::rules::validate::is_valid_play;

/// Play `card_index` from `player_index`'s hand.
///
/// `wild_color` is the color a wild card is played as; when omitted the
/// wild plays as green. The assigned color is attached by substituting a
/// new card value - the hand's card is never mutated.
///
/// Rejected (input returned unchanged, same version id) when the game is
/// over, the indices are out of range, or the play is illegal for this
/// player right now. A legal out-of-turn jump-in first takes the turn,
/// then resolves like any other play.
#[must_use]
pub fn play_card_from_hand(
    game: &GameState,
    player_index: usize,
    card_index: usize,
    wild_color: Option<Color>,
) -> GameState {
    if game.winner.is_some() {
        debug!(player_index, "play rejected: game already won");
        return game.clone();
    }

    let Some(card) = game
        .players
        .get(player_index)
        .and_then(|p| p.cards.get(card_index))
        .copied()
    else {
        debug!(player_index, card_index, "play rejected: no such card");
        return game.clone();
    };

    let Some(top) = game.top_card().copied() else {
        debug!("play rejected: empty discard pile");
        return game.clone();
    };

    if !is_valid_play(game, &top, &card, player_index) {
        debug!(player_index, card = %card, top = %top, "play rejected: not a legal play");
        return game.clone();
    }

    let mut next = game.clone();

    // A jump-in takes the turn before the effect resolves.
    if player_index != next.current_player {
        next.current_player = player_index;
        next.current_draws = 0;
    }

    let played = if card.is_wild() {
        card.with_assigned_color(wild_color.unwrap_or(Color::Green))
    } else {
        card
    };

    next.players[player_index].cards.remove(card_index);
    next.discard.push_front(played);

    match next.players[player_index].cards.len() {
        0 => next.winner = Some(player_index),
        // Playing down to one card opens the declaration race, overriding
        // any prior unresolved flag.
        1 => next.unclaimed_uno = Some(player_index),
        _ => {}
    }
    next.clear_stale_uno();

    resolve_effect(&mut next, &played);
    next.stamp();
    next
}
