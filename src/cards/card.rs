//! A single card: one value for each of the four attributes.

use serde::{Deserialize, Serialize};

use super::attributes::{Amount, Attribute, Color, Fill, Shape, VALUES_PER_ATTRIBUTE};

/// Number of distinct cards (3^4).
pub const DECK_SIZE: usize = 81;

/// One Set card.
///
/// Cards are plain values: two cards with the same attributes are the same
/// card, and each combination appears exactly once in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub amount: Amount,
    pub fill: Fill,
    pub color: Color,
}

impl Card {
    #[must_use]
    pub const fn new(shape: Shape, amount: Amount, fill: Fill, color: Color) -> Self {
        Self {
            shape,
            amount,
            fill,
            color,
        }
    }

    /// Dense index in `0..DECK_SIZE`.
    ///
    /// Shape is the most significant digit and color the least, so sorting by
    /// index matches the canonical deck order.
    #[must_use]
    pub fn index(&self) -> usize {
        let base = VALUES_PER_ATTRIBUTE;
        ((self.shape.index() * base + self.amount.index()) * base + self.fill.index()) * base
            + self.color.index()
    }

    /// Inverse of [`Card::index`]. Returns `None` past the last card.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= DECK_SIZE {
            return None;
        }
        let base = VALUES_PER_ATTRIBUTE;
        Some(Self {
            shape: Shape::from_index(index / (base * base * base)),
            amount: Amount::from_index(index / (base * base)),
            fill: Fill::from_index(index / base),
            color: Color::from_index(index),
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plural = if self.amount == Amount::One { "" } else { "s" };
        write!(
            f,
            "{} {} {} {}{}",
            self.amount, self.fill, self.color, self.shape, plural
        )
    }
}
