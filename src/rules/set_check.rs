//! Set validity and set search.
//!
//! Three cards form a set when, for each of the four attributes, the three
//! values are either all the same or all different. Equivalently: for any two
//! cards there is exactly one third card that completes a set, which makes
//! searching a table a pairwise lookup instead of a scan over all triples.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Attribute, Card};

/// How one attribute behaves across three cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeVerdict {
    /// All three share the value.
    AllSame,
    /// All three values differ.
    AllDifferent,
    /// Two match and one differs. This breaks the set.
    Mixed,
}

impl AttributeVerdict {
    fn of<A: Attribute>(a: A, b: A, c: A) -> Self {
        if a == b && b == c {
            AttributeVerdict::AllSame
        } else if a != b && b != c && a != c {
            AttributeVerdict::AllDifferent
        } else {
            AttributeVerdict::Mixed
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self != AttributeVerdict::Mixed
    }
}

/// Per-attribute verdicts for three cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetCheck {
    pub shape: AttributeVerdict,
    pub amount: AttributeVerdict,
    pub fill: AttributeVerdict,
    pub color: AttributeVerdict,
}

impl SetCheck {
    /// True when no attribute is mixed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.verdicts().iter().all(|(_, v)| v.is_valid())
    }

    /// Attribute names paired with their verdicts, in shape/amount/fill/color order.
    #[must_use]
    pub fn verdicts(&self) -> [(&'static str, AttributeVerdict); 4] {
        [
            (crate::cards::Shape::NAME, self.shape),
            (crate::cards::Amount::NAME, self.amount),
            (crate::cards::Fill::NAME, self.fill),
            (crate::cards::Color::NAME, self.color),
        ]
    }

    /// Names of the attributes that break the set.
    #[must_use]
    pub fn failing(&self) -> SmallVec<[&'static str; 4]> {
        self.verdicts()
            .iter()
            .filter(|(_, v)| !v.is_valid())
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Check three cards attribute by attribute.
#[must_use]
pub fn check(a: &Card, b: &Card, c: &Card) -> SetCheck {
    SetCheck {
        shape: AttributeVerdict::of(a.shape, b.shape, c.shape),
        amount: AttributeVerdict::of(a.amount, b.amount, c.amount),
        fill: AttributeVerdict::of(a.fill, b.fill, c.fill),
        color: AttributeVerdict::of(a.color, b.color, c.color),
    }
}

/// Whether three cards form a set.
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    check(a, b, c).is_set()
}

/// The unique card completing a set with `a` and `b`.
///
/// If `a == b` the result is that same card.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> Card {
    Card {
        shape: a.shape.complete(b.shape),
        amount: a.amount.complete(b.amount),
        fill: a.fill.complete(b.fill),
        color: a.color.complete(b.color),
    }
}

/// All sets among `cards`, as ascending index triples.
///
/// Each set is reported once. Results are ordered by their first, then
/// second index.
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<[usize; 3]> {
    let positions: FxHashMap<Card, usize> =
        cards.iter().enumerate().map(|(i, card)| (*card, i)).collect();

    let mut sets = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i] == cards[j] {
                continue;
            }
            let wanted = third_card(&cards[i], &cards[j]);
            if let Some(&k) = positions.get(&wanted) {
                if k > j {
                    sets.push([i, j, k]);
                }
            }
        }
    }
    sets
}

/// The first set among `cards`, if any.
#[must_use]
pub fn first_set(cards: &[Card]) -> Option<[usize; 3]> {
    find_sets(cards).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Amount, Color, Fill, Shape};

    fn card(shape: Shape, amount: Amount, fill: Fill, color: Color) -> Card {
        Card::new(shape, amount, fill, color)
    }

    #[test]
    fn test_all_different_is_set() {
        let a = card(Shape::Square, Amount::One, Fill::Outline, Color::Red);
        let b = card(Shape::Circle, Amount::Two, Fill::Half, Color::Green);
        let c = card(Shape::Diamond, Amount::Three, Fill::Solid, Color::Blue);
        assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn test_mixed_same_and_different_is_set() {
        let a = card(Shape::Square, Amount::One, Fill::Solid, Color::Red);
        let b = card(Shape::Square, Amount::Two, Fill::Solid, Color::Green);
        let c = card(Shape::Square, Amount::Three, Fill::Solid, Color::Blue);

        let result = check(&a, &b, &c);
        assert!(result.is_set());
        assert_eq!(result.shape, AttributeVerdict::AllSame);
        assert_eq!(result.amount, AttributeVerdict::AllDifferent);
        assert!(result.failing().is_empty());
    }

    #[test]
    fn test_two_and_one_breaks_set() {
        let a = card(Shape::Square, Amount::One, Fill::Solid, Color::Red);
        let b = card(Shape::Square, Amount::Two, Fill::Solid, Color::Red);
        let c = card(Shape::Circle, Amount::Three, Fill::Solid, Color::Green);

        let result = check(&a, &b, &c);
        assert!(!result.is_set());
        assert_eq!(result.shape, AttributeVerdict::Mixed);
        assert_eq!(result.color, AttributeVerdict::Mixed);
        assert_eq!(result.failing().as_slice(), &["shape", "color"]);
    }

    #[test]
    fn test_third_card_completes() {
        let a = card(Shape::Square, Amount::One, Fill::Half, Color::Red);
        let b = card(Shape::Circle, Amount::One, Fill::Solid, Color::Red);
        let c = third_card(&a, &b);

        assert_eq!(c, card(Shape::Diamond, Amount::One, Fill::Outline, Color::Red));
        assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn test_every_pair_has_one_completion_in_deck() {
        let deck = full_deck();
        let a = deck[5];
        for b in deck.iter().filter(|b| **b != a) {
            let completions = deck
                .iter()
                .filter(|c| **c != a && **c != *b && is_set(&a, b, c))
                .count();
            assert_eq!(completions, 1);
        }
    }

    #[test]
    fn test_full_deck_set_count() {
        // 81 * 80 ordered pairs, each set reached from 6 of them.
        assert_eq!(find_sets(&full_deck()).len(), 1080);
    }

    #[test]
    fn test_find_sets_indices() {
        let cards = vec![
            card(Shape::Square, Amount::One, Fill::Outline, Color::Red),
            card(Shape::Square, Amount::One, Fill::Outline, Color::Green),
            card(Shape::Circle, Amount::Two, Fill::Half, Color::Green),
            card(Shape::Square, Amount::One, Fill::Outline, Color::Blue),
        ];

        assert_eq!(find_sets(&cards), vec![[0, 1, 3]]);
        assert_eq!(first_set(&cards), Some([0, 1, 3]));
    }

    #[test]
    fn test_find_sets_none() {
        let cards = vec![
            card(Shape::Square, Amount::One, Fill::Outline, Color::Red),
            card(Shape::Square, Amount::One, Fill::Outline, Color::Green),
            card(Shape::Circle, Amount::Two, Fill::Half, Color::Green),
        ];
        assert!(find_sets(&cards).is_empty());
        assert_eq!(first_set(&[]), None);
    }
}
