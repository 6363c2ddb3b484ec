//! Game initializer: shuffle, deal, pick a legal opening discard.

use im::Vector;

use crate::cards::deck::shuffled_shoe;
use crate::cards::Card;
use crate::core::{ConfigError, Direction, GameConfig, GameRng, GameState, Player, VersionId};

/// Create a fresh game from a validated configuration.
///
/// Deals `starting_hand_size` cards to each player in seating order, then
/// sets aside one card as the opening discard. A wild candidate (+4 or
/// change-color) is folded back into the deck, the deck reshuffled and a
/// new candidate drawn until a non-special face comes up.
///
/// The RNG is the caller's: the same seed reproduces the same deal.
pub fn new_game(config: GameConfig, rng: &mut GameRng) -> Result<GameState, ConfigError> {
    config.validate()?;

    let mut deck = shuffled_shoe(config.num_decks, rng);

    let mut players = Vector::new();
    for name in &config.player_names {
        let mut player = Player::new(name);
        for _ in 0..config.starting_hand_size {
            // Validation guaranteed enough cards for every hand.
            if let Some(card) = deck.pop_front() {
                player.cards.push_back(card);
            }
        }
        players.push_back(player);
    }

    let opening = draw_opening_card(&mut deck, rng)?;

    Ok(GameState {
        id: VersionId::seed_from(rng),
        deck,
        discard: Vector::unit(opening),
        players,
        current_player: 0,
        direction: Direction::Forward,
        current_draws: 0,
        current_pot: Default::default(),
        winner: None,
        unclaimed_uno: None,
        config,
    })
}

/// Draw the opening discard, rejecting wild candidates.
fn draw_opening_card(deck: &mut Vector<Card>, rng: &mut GameRng) -> Result<Card, ConfigError> {
    loop {
        if deck.iter().all(Card::is_wild) {
            // Every undealt card is wild; reshuffling cannot help.
            return Err(ConfigError::NoOpeningCard);
        }

        let Some(candidate) = deck.pop_front() else {
            return Err(ConfigError::NoOpeningCard);
        };

        if !candidate.is_wild() {
            return Ok(candidate);
        }

        deck.push_back(candidate);
        let mut cards: Vec<Card> = deck.iter().copied().collect();
        rng.shuffle(&mut cards);
        *deck = cards.into_iter().collect();
    }
}
