//! Play validator: is a proposed card play legal right now?
//!
//! Two regimes, keyed on the pot:
//!
//! - Pot empty: the played card must share the top card's face or
//!   effective color (assigned color for a played wild), or itself be wild.
//! - Pot stacking: only a compatible penalty card keeps the chain alive;
//!   anything else forces the victim through
//!   [`accept_punishment`](crate::rules::accept_punishment).
//!
//! The one exception to turn order is the jump-in rule: when enabled, an
//! exact (color, face) twin of the top card may be played by anyone.

use crate::cards::{Card, CardColor, Face};
use crate::core::{GameConfig, GameState};

/// Whether `played` legally stacks onto the penalty card `top`.
///
/// Same face always stacks. With `plus_twos_stack_with_fours`, a +4
/// stacks on any +2, and a +2 stacks on a +4 played as the +2's color.
#[must_use]
pub fn can_stack_pot(config: &GameConfig, top: &Card, played: &Card) -> bool {
    if top.face == played.face {
        return true;
    }

    if !config.plus_twos_stack_with_fours {
        return false;
    }

    match (top.face, played.face) {
        (Face::DrawTwo, Face::DrawFour) => true,
        (Face::DrawFour, Face::DrawTwo) => {
            // Only a +2 matching the +4's assigned color answers a +4.
            match played.color {
                CardColor::Colored(c) => top.assigned_color == Some(c),
                CardColor::Wild => false,
            }
        }
        _ => false,
    }
}

/// Whether `player_index` may play `played` onto `top` in this state.
#[must_use]
pub fn is_valid_play(state: &GameState, top: &Card, played: &Card, player_index: usize) -> bool {
    // Jump-in: an exact twin of the top card, from any seat.
    if state.config.jump_in && played.color == top.color && played.face == top.face {
        return true;
    }

    if player_index != state.current_player {
        return false;
    }

    if !state.current_pot.is_empty() {
        return can_stack_pot(&state.config, top, played);
    }

    if played.is_wild() {
        return true;
    }

    if played.face == top.face {
        return true;
    }

    match (top.effective_color(), played.color) {
        (Some(top_color), CardColor::Colored(played_color)) => top_color == played_color,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::core::GameRng;
    use crate::rules::new_game;

    fn state_with_top(top: Card) -> GameState {
        let config = GameConfig::default().with_player_names(["a", "b"]);
        let mut state = new_game(config, &mut GameRng::new(42)).unwrap();
        state.discard.push_front(top);
        state
    }

    #[test]
    fn test_color_match() {
        let top = Card::colored(Color::Red, Face::Number(3));
        let state = state_with_top(top);

        assert!(is_valid_play(&state, &top, &Card::colored(Color::Red, Face::Number(9)), 0));
        assert!(!is_valid_play(&state, &top, &Card::colored(Color::Blue, Face::Number(9)), 0));
    }

    #[test]
    fn test_face_match() {
        let top = Card::colored(Color::Red, Face::Number(3));
        let state = state_with_top(top);

        assert!(is_valid_play(&state, &top, &Card::colored(Color::Blue, Face::Number(3)), 0));
        assert!(is_valid_play(&state, &top, &Card::colored(Color::Red, Face::Skip), 0));
    }

    #[test]
    fn test_wild_always_playable_without_pot() {
        let top = Card::colored(Color::Red, Face::Number(3));
        let state = state_with_top(top);

        assert!(is_valid_play(&state, &top, &Card::wild(Face::ChangeColor), 0));
        assert!(is_valid_play(&state, &top, &Card::wild(Face::DrawFour), 0));
    }

    #[test]
    fn test_assigned_color_of_wild_top() {
        let top = Card::wild(Face::ChangeColor).with_assigned_color(Color::Yellow);
        let state = state_with_top(top);

        assert!(is_valid_play(&state, &top, &Card::colored(Color::Yellow, Face::Number(1)), 0));
        assert!(!is_valid_play(&state, &top, &Card::colored(Color::Green, Face::Number(1)), 0));
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let top = Card::colored(Color::Red, Face::Number(3));
        let state = state_with_top(top);

        // Player 1 holds a perfectly matching card but it is not their turn.
        assert!(!is_valid_play(&state, &top, &Card::colored(Color::Red, Face::Number(3)), 1));
    }

    #[test]
    fn test_jump_in_exact_match_any_seat() {
        let top = Card::colored(Color::Red, Face::Number(3));
        let mut state = state_with_top(top);
        state.config.jump_in = true;

        let twin = Card::colored(Color::Red, Face::Number(3));
        let near_miss = Card::colored(Color::Red, Face::Number(4));

        assert!(is_valid_play(&state, &top, &twin, 1));
        assert!(!is_valid_play(&state, &top, &near_miss, 1));
    }

    #[test]
    fn test_pot_blocks_non_penalty_cards() {
        let top = Card::colored(Color::Red, Face::DrawTwo);
        let mut state = state_with_top(top);
        state.current_pot.push(2);

        // A red 5 would normally match on color, but a pot is pending.
        assert!(!is_valid_play(&state, &top, &Card::colored(Color::Red, Face::Number(5)), 0));
        assert!(is_valid_play(&state, &top, &Card::colored(Color::Blue, Face::DrawTwo), 0));
    }

    #[test]
    fn test_stack_same_face() {
        let config = GameConfig::default().with_plus_twos_stack_with_fours(false);
        let two = Card::colored(Color::Red, Face::DrawTwo);
        let four = Card::wild(Face::DrawFour).with_assigned_color(Color::Blue);

        assert!(can_stack_pot(&config, &two, &Card::colored(Color::Green, Face::DrawTwo)));
        assert!(can_stack_pot(&config, &four, &Card::wild(Face::DrawFour)));
    }

    #[test]
    fn test_stack_four_on_two_needs_flag() {
        let two = Card::colored(Color::Red, Face::DrawTwo);
        let four = Card::wild(Face::DrawFour);

        let on = GameConfig::default().with_plus_twos_stack_with_fours(true);
        let off = GameConfig::default().with_plus_twos_stack_with_fours(false);

        assert!(can_stack_pot(&on, &two, &four));
        assert!(!can_stack_pot(&off, &two, &four));
    }

    #[test]
    fn test_stack_two_on_four_matches_assigned_color() {
        let config = GameConfig::default().with_plus_twos_stack_with_fours(true);
        let four = Card::wild(Face::DrawFour).with_assigned_color(Color::Blue);

        assert!(can_stack_pot(&config, &four, &Card::colored(Color::Blue, Face::DrawTwo)));
        assert!(!can_stack_pot(&config, &four, &Card::colored(Color::Red, Face::DrawTwo)));
    }

    #[test]
    fn test_non_penalty_never_stacks() {
        let config = GameConfig::default();
        let two = Card::colored(Color::Red, Face::DrawTwo);

        assert!(!can_stack_pot(&config, &two, &Card::colored(Color::Red, Face::Number(2))));
        assert!(!can_stack_pot(&config, &two, &Card::wild(Face::ChangeColor)));
    }
}
