//! Effect resolver: the state delta produced by a played card.
//!
//! Runs against the post-play snapshot, after the card has moved from the
//! hand to the discard pile. Every face also decides how far the turn
//! advances from the player who just played.

use crate::cards::{Card, Face};
use crate::core::GameState;
use crate::rules::turn::advance;

/// Apply the played card's special behavior and advance the turn.
///
/// - Numerals and change-color: normal single advance.
/// - Skip: advance two seats.
/// - Reverse: flip direction, then advance; with exactly two players this
///   advances two seats, which is a skip. Intentional rule behavior.
/// - +2 / +4: append the penalty to the pot and advance one seat - the
///   victim must now stack or accept.
pub fn resolve_effect(state: &mut GameState, played: &Card) {
    match played.face {
        Face::Skip => advance(state, 2),
        Face::Reverse => {
            state.direction = state.direction.flipped();
            let offset = if state.player_count() == 2 { 2 } else { 1 };
            advance(state, offset);
        }
        Face::DrawTwo => {
            state.current_pot.push(2);
            advance(state, 1);
        }
        Face::DrawFour => {
            state.current_pot.push(4);
            advance(state, 1);
        }
        Face::Number(_) | Face::ChangeColor => advance(state, 1),
    }
}
