//! Deck factory.
//!
//! One set holds 108 cards: per color, one 0, two each of 1-9, +2, reverse
//! and skip; plus four +4 and four change-color wilds. A shoe concatenates
//! `num_decks` sets and is shuffled uniformly with the injected RNG.

use im::Vector;

use super::card::{Card, Color, Face};
use crate::core::rng::GameRng;

/// Cards in a single set.
pub const CARDS_PER_DECK: usize = 108;

const ACTION_FACES: [Face; 3] = [Face::DrawTwo, Face::Reverse, Face::Skip];
const WILD_FACES: [Face; 2] = [Face::DrawFour, Face::ChangeColor];
const WILD_COPIES: usize = 4;

/// Build one unshuffled 108-card set.
#[must_use]
pub fn single_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK);

    for color in Color::ALL {
        cards.push(Card::colored(color, Face::Number(0)));
        for n in 1..=9 {
            cards.push(Card::colored(color, Face::Number(n)));
            cards.push(Card::colored(color, Face::Number(n)));
        }
        for face in ACTION_FACES {
            cards.push(Card::colored(color, face));
            cards.push(Card::colored(color, face));
        }
    }

    for face in WILD_FACES {
        for _ in 0..WILD_COPIES {
            cards.push(Card::wild(face));
        }
    }

    cards
}

/// Build a shuffled shoe of `num_decks` sets.
///
/// The head of the returned vector is the next card drawn.
#[must_use]
pub fn shuffled_shoe(num_decks: u32, rng: &mut GameRng) -> Vector<Card> {
    let mut cards = Vec::with_capacity(num_decks as usize * CARDS_PER_DECK);
    for _ in 0..num_decks {
        cards.extend(single_deck());
    }
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}
