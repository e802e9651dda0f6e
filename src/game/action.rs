//! Player actions and their outcomes.
//!
//! The event loop translates raw input into an [`Action`] and hands it to
//! [`Game::apply`](super::Game::apply); the returned [`Outcome`] says what
//! changed so the caller can decide whether to redraw or log.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Something the player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pick the table card at this position.
    Choose(usize),
    /// Deal the extra cards on top of the base table size.
    DealExtra,
    /// Drop the current selection.
    ClearSelection,
    /// Write every table card to the log.
    LogTable,
    /// Look for a set on the table.
    Hint,
}

/// Result of choosing a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Card added to the selection; `selected` cards are now chosen.
    Selected { card: Card, selected: usize },
    /// The card was already chosen. Nothing changed.
    AlreadyChosen(Card),
    /// Third card completed a set. The cards left the table.
    Set([Card; 3]),
    /// Third card did not complete a set. `failing` names the mixed attributes.
    Miss {
        cards: [Card; 3],
        failing: SmallVec<[&'static str; 4]>,
    },
}

/// Result of applying an [`Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Chose(ChooseOutcome),
    /// Number of cards moved from the deck to the table.
    Dealt(usize),
    Cleared,
    TableLogged,
    /// Table positions of a set, if one exists.
    Hint(Option<[usize; 3]>),
}

impl Outcome {
    /// Whether the table or selection changed.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        match self {
            Outcome::Chose(ChooseOutcome::AlreadyChosen(_)) => false,
            Outcome::Chose(_) | Outcome::Cleared => true,
            Outcome::Dealt(n) => *n > 0,
            Outcome::TableLogged | Outcome::Hint(_) => false,
        }
    }
}
