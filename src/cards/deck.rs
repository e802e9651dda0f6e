//! Deck generation and the draw pile.

use serde::{Deserialize, Serialize};

use super::attributes::{Amount, Attribute, Color, Fill, Shape};
use super::card::{Card, DECK_SIZE};
use crate::core::GameRng;

/// Every card exactly once, in canonical order (shape, amount, fill, color).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for shape in Shape::ALL {
        for amount in Amount::ALL {
            for fill in Fill::ALL {
                for color in Color::ALL {
                    cards.push(Card::new(shape, amount, fill, color));
                }
            }
        }
    }
    cards
}

/// Ordered draw pile. The top of the deck is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = full_deck();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A deck drawing in the reverse order of `cards` (last element first).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Peek at the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
