//! Card values and the deck factory.
//!
//! ## Key Types
//!
//! - `Color`: The four chromatic colors
//! - `CardColor`: A card's printed color, or wild
//! - `Face`: Numerals and action faces
//! - `Card`: A value-equal card; wilds carry an assigned color once played
//!
//! Cards have no identity: two red 7s are interchangeable, and conservation
//! is counted, not tracked per card.

pub mod card;
pub mod deck;

pub use card::{Card, CardColor, Color, Face};
