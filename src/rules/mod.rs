//! Set rules.
//!
//! - `is_set` / `check`: validate a selected triple
//! - `third_card`: the card completing a pair
//! - `find_sets` / `first_set`: search a table for sets

pub mod set_check;

pub use set_check::{
    check, find_sets, first_set, is_set, third_card, AttributeVerdict, SetCheck,
};
