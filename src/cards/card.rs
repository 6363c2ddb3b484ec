//! Card values.
//!
//! A card is a plain value: `(color, face, assigned_color)`. Wild cards are
//! printed with `CardColor::Wild` and gain an `assigned_color` exactly once,
//! at the moment they are played. Assignment constructs a new card value
//! via [`Card::with_assigned_color`] - the card in the player's hand is
//! never mutated, so older snapshots keep seeing the unassigned value.

use serde::{Deserialize, Serialize};

/// One of the four chromatic colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Color {
    /// All four colors, in deck-building order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
        };
        write!(f, "{}", name)
    }
}

/// A card's printed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// A chromatic card.
    Colored(Color),
    /// A wild card; plays as its assigned color.
    Wild,
}

impl From<Color> for CardColor {
    fn from(color: Color) -> Self {
        CardColor::Colored(color)
    }
}

/// A card face.
///
/// `Number`, `DrawTwo`, `Reverse` and `Skip` appear on chromatic cards;
/// `DrawFour` and `ChangeColor` only on wilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Numeral 0-9.
    Number(u8),
    /// "+2": appends 2 to the penalty pot.
    DrawTwo,
    /// Flips the direction of play.
    Reverse,
    /// Skips the next player.
    Skip,
    /// "+4": wild, appends 4 to the penalty pot.
    DrawFour,
    /// Wild, changes the active color and nothing else.
    ChangeColor,
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Face::Number(n) => write!(f, "{}", n),
            Face::DrawTwo => write!(f, "+2"),
            Face::Reverse => write!(f, "reverse"),
            Face::Skip => write!(f, "skip"),
            Face::DrawFour => write!(f, "+4"),
            Face::ChangeColor => write!(f, "change color"),
        }
    }
}

/// A card value. Equality is (color, face, assigned_color).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Printed color.
    pub color: CardColor,

    /// Printed face.
    pub face: Face,

    /// Color a wild card was played as. `None` until played, and always
    /// `None` for chromatic cards.
    pub assigned_color: Option<Color>,
}

impl Card {
    /// Create a chromatic card.
    #[must_use]
    pub const fn colored(color: Color, face: Face) -> Self {
        Self {
            color: CardColor::Colored(color),
            face,
            assigned_color: None,
        }
    }

    /// Create an unplayed wild card.
    #[must_use]
    pub const fn wild(face: Face) -> Self {
        Self {
            color: CardColor::Wild,
            face,
            assigned_color: None,
        }
    }

    /// Whether this card is wild.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.color == CardColor::Wild
    }

    /// Penalty this card adds to the pot when played, if any.
    #[must_use]
    pub fn penalty(&self) -> Option<u8> {
        match self.face {
            Face::DrawTwo => Some(2),
            Face::DrawFour => Some(4),
            _ => None,
        }
    }

    /// The color this card plays as: the printed color, or the assigned
    /// color for a played wild. `None` for a wild that has not been played.
    #[must_use]
    pub fn effective_color(&self) -> Option<Color> {
        match self.color {
            CardColor::Colored(c) => Some(c),
            CardColor::Wild => self.assigned_color,
        }
    }

    /// A copy of this card played as `color`.
    ///
    /// This is how wilds pick up their color: the original value is left
    /// untouched and a new one is substituted into the discard pile.
    #[must_use]
    pub fn with_assigned_color(self, color: Color) -> Self {
        Self {
            assigned_color: Some(color),
            ..self
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.color, self.assigned_color) {
            (CardColor::Colored(c), _) => write!(f, "{} {}", c, self.face),
            (CardColor::Wild, Some(c)) => write!(f, "wild {} (as {})", self.face, c),
            (CardColor::Wild, None) => write!(f, "wild {}", self.face),
        }
    }
}
