//! The game itself: deal, select, check, refill.
//!
//! `Game` owns the draw pile, the face-up table, and the current selection.
//! Input arrives as an `Action`; `Game::apply` returns an `Outcome`.

mod action;
mod state;

pub use action::{Action, ChooseOutcome, Outcome};
pub use state::{Game, GameStats, SELECTION_SIZE};
