//! # rust-set
//!
//! A minimal digital clone of the card game Set.
//!
//! An 81-card deck (3 shapes × 3 amounts × 3 fills × 3 colors) is shuffled and
//! 12 cards are dealt face up. The player picks three; if every attribute is
//! either all the same or all different across them, the three leave the
//! table and it is refilled.
//!
//! ## Modules
//!
//! - `core`: seeded RNG, configuration, errors
//! - `cards`: attributes, cards, deck generation
//! - `rules`: set validity, third-card completion, set search
//! - `game`: deck / table / selection bookkeeping and action dispatch
//! - `layout`: card placement and mouse hit testing
//! - `draw`: card faces tessellated into colored triangles
//! - `platform`: winit window + wgpu renderer (feature `window`)

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod layout;
pub mod draw;
#[cfg(feature = "window")]
pub mod platform;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng};

pub use crate::cards::{full_deck, Amount, Attribute, Card, Color, Deck, Fill, Shape, DECK_SIZE};

pub use crate::rules::{check, find_sets, first_set, is_set, third_card, AttributeVerdict, SetCheck};

pub use crate::game::{Action, ChooseOutcome, Game, GameStats, Outcome};

pub use crate::layout::{Layout, Rect};

pub use crate::draw::{Canvas, ColorVertex};
