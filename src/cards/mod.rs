//! Card model: attributes, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Shape`, `Amount`, `Fill`, `Color`: the four three-valued attributes
//! - `Card`: one value of each attribute
//! - `Deck`: the shuffled draw pile
//!
//! `full_deck()` produces all 81 combinations exactly once.

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Amount, Attribute, Color, Fill, Shape, VALUES_PER_ATTRIBUTE};
pub use card::{Card, DECK_SIZE};
pub use deck::{full_deck, Deck};
