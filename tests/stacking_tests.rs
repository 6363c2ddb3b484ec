//! Penalty pot scenarios: chains building across players and being
//! settled by the eventual victim.

use im::Vector;

use uno_engine::{
    accept_punishment, new_game, play_card_from_hand, Card, Color, Face, GameConfig, GameRng,
    GameState,
};

fn three_player_game(config: GameConfig) -> GameState {
    let mut state = new_game(config, &mut GameRng::new(42)).unwrap();
    state.discard.push_front(Card::colored(Color::Red, Face::Number(6)));
    state
}

fn hand(cards: &[Card]) -> Vector<Card> {
    cards.iter().copied().collect()
}

fn base_config() -> GameConfig {
    GameConfig::default().with_player_names(["a", "b", "c"])
}

#[test]
fn test_plus_two_starts_a_pot() {
    let mut state = three_player_game(base_config());
    state.players[0].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, None);

    assert_eq!(state.current_pot.as_slice(), &[2]);
    assert_eq!(state.current_player, 1);
}

#[test]
fn test_four_stacks_on_two_with_flag() {
    let mut state = three_player_game(base_config().with_plus_twos_stack_with_fours(true));
    state.players[0].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);
    state.players[1].cards = hand(&[
        Card::wild(Face::DrawFour),
        Card::colored(Color::Green, Face::Number(8)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, None);
    let state = play_card_from_hand(&state, 1, 0, Some(Color::Blue));

    assert_eq!(state.current_pot.as_slice(), &[2, 4]);
    assert_eq!(state.current_player, 2);
}

#[test]
fn test_four_on_two_rejected_without_flag() {
    let mut state = three_player_game(base_config().with_plus_twos_stack_with_fours(false));
    state.players[0].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);
    state.players[1].cards = hand(&[
        Card::wild(Face::DrawFour),
        Card::colored(Color::Green, Face::Number(8)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, None);
    let after = play_card_from_hand(&state, 1, 0, Some(Color::Blue));

    assert_eq!(after, state);
    assert_eq!(after.current_pot.as_slice(), &[2]);
}

#[test]
fn test_two_answers_four_only_in_assigned_color() {
    let mut state = three_player_game(base_config().with_plus_twos_stack_with_fours(true));
    state.players[0].cards = hand(&[
        Card::wild(Face::DrawFour),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);
    state.players[1].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Yellow, Face::DrawTwo),
        Card::colored(Color::Green, Face::Number(8)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, Some(Color::Yellow));
    assert_eq!(state.current_pot.as_slice(), &[4]);

    // Red +2 does not answer a +4 played as yellow.
    let rejected = play_card_from_hand(&state, 1, 0, None);
    assert_eq!(rejected, state);

    // The yellow +2 does.
    let stacked = play_card_from_hand(&state, 1, 1, None);
    assert_eq!(stacked.current_pot.as_slice(), &[4, 2]);
}

#[test]
fn test_victim_settles_the_whole_chain() {
    let mut state = three_player_game(
        base_config()
            .with_plus_two_skip(false)
            .with_plus_four_skip(false),
    );
    state.players[0].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);
    state.players[1].cards = hand(&[
        Card::colored(Color::Green, Face::DrawTwo),
        Card::colored(Color::Green, Face::Number(8)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, None);
    let state = play_card_from_hand(&state, 1, 0, None);
    assert_eq!(state.current_pot.as_slice(), &[2, 2]);
    assert_eq!(state.current_player, 2);

    let victim_hand_before = state.players[2].cards.len();
    let settled = accept_punishment(&state, 2);

    assert!(settled.current_pot.is_empty());
    assert_eq!(settled.players[2].cards.len(), victim_hand_before + 4);
    // No skip flag set: the victim keeps the turn.
    assert_eq!(settled.current_player, 2);
}

#[test]
fn test_settling_a_four_pot_skips_with_flag() {
    let mut state = three_player_game(base_config().with_plus_four_skip(true));
    state.players[0].cards = hand(&[
        Card::wild(Face::DrawFour),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, Some(Color::Green));
    assert_eq!(state.current_player, 1);

    let settled = accept_punishment(&state, 1);
    assert_eq!(settled.players[1].cards.len(), 7 + 4);
    // plus_four_skip: the victim's own turn is skipped too.
    assert_eq!(settled.current_player, 2);
}

#[test]
fn test_pot_blocks_ordinary_plays_until_settled() {
    let mut state = three_player_game(base_config());
    state.players[0].cards = hand(&[
        Card::colored(Color::Red, Face::DrawTwo),
        Card::colored(Color::Blue, Face::Number(1)),
    ]);
    state.players[1].cards = hand(&[
        // Matches on color, but the pot forbids anything except a stack.
        Card::colored(Color::Red, Face::Number(9)),
        Card::colored(Color::Green, Face::Number(8)),
    ]);

    let state = play_card_from_hand(&state, 0, 0, None);
    let rejected = play_card_from_hand(&state, 1, 0, None);

    assert_eq!(rejected, state);
}
