//! Game state: draw pile, table, and the current selection.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Action, ChooseOutcome, Outcome};
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameError, GameRng};
use crate::rules;

/// Cards needed to check for a set.
pub const SELECTION_SIZE: usize = 3;

/// Running tally for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub sets_found: u32,
    pub misses: u32,
}

/// One game of Set.
///
/// Every card lives in exactly one of `deck` or `table`. `chosen` holds up to
/// two table cards between calls; picking a third triggers the check and
/// always clears the selection.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    seed: Option<u64>,
    deck: Deck,
    table: Vec<Card>,
    chosen: SmallVec<[Card; SELECTION_SIZE]>,
    stats: GameStats,
}

impl Game {
    /// Shuffle a full deck and deal the table.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        let deck = Deck::shuffled(&mut rng);
        info!("new game, seed {seed}");

        let mut game = Self::with_deck(config, deck)?;
        game.seed = Some(seed);
        Ok(game)
    }

    /// Deal the table from a prepared deck.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        let mut game = Self {
            config,
            seed: None,
            deck,
            table: Vec::new(),
            chosen: SmallVec::new(),
            stats: GameStats::default(),
        };
        game.fill(0);
        Ok(game)
    }

    /// Seed of the shuffle, when the deck was shuffled by [`Game::new`].
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn table(&self) -> &[Card] {
        &self.table
    }

    #[must_use]
    pub fn chosen(&self) -> &[Card] {
        &self.chosen
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Whether the table card at `index` is part of the selection.
    #[must_use]
    pub fn is_chosen(&self, index: usize) -> bool {
        self.table
            .get(index)
            .is_some_and(|card| self.chosen.contains(card))
    }

    /// Deal until the table holds `table_size + extra` cards or the deck runs out.
    ///
    /// Returns the number of cards dealt.
    pub fn fill(&mut self, extra: usize) -> usize {
        let target = self.config.table_size + extra;
        let mut dealt = 0;
        while self.table.len() < target {
            let Some(card) = self.deck.draw() else {
                debug!("deck exhausted with {} cards on the table", self.table.len());
                break;
            };
            self.table.push(card);
            dealt += 1;
        }
        dealt
    }

    /// Deal the configured extra cards.
    pub fn deal_extra(&mut self) -> usize {
        let dealt = self.fill(self.config.extra_cards);
        info!("dealt {dealt} extra cards, {} on the table", self.table.len());
        if self.is_stuck() {
            info!(
                "table is full at {} cards with no set; {} cards stay in the deck",
                self.table.len(),
                self.deck.len()
            );
        }
        dealt
    }

    /// Drop the current selection.
    pub fn clear_selection(&mut self) {
        debug!("selection cleared ({} cards)", self.chosen.len());
        self.chosen.clear();
    }

    /// Pick the table card at `index`.
    ///
    /// Picking the third card checks the selection. A set leaves the table;
    /// either way the selection is cleared and the table refilled.
    pub fn choose(&mut self, index: usize) -> Result<ChooseOutcome, GameError> {
        let card = *self.table.get(index).ok_or(GameError::NoSuchCard {
            index,
            table_len: self.table.len(),
        })?;

        if self.chosen.contains(&card) {
            debug!("{card} already chosen");
            return Ok(ChooseOutcome::AlreadyChosen(card));
        }

        self.chosen.push(card);
        debug!("chose {card} at {index} ({}/{SELECTION_SIZE})", self.chosen.len());

        if self.chosen.len() < SELECTION_SIZE {
            return Ok(ChooseOutcome::Selected {
                card,
                selected: self.chosen.len(),
            });
        }

        let outcome = self.check_selection();
        self.chosen.clear();
        self.fill(0);

        if self.is_over() {
            info!(
                "game over: {} sets found, {} misses",
                self.stats.sets_found, self.stats.misses
            );
        }
        Ok(outcome)
    }

    fn check_selection(&mut self) -> ChooseOutcome {
        let cards = [self.chosen[0], self.chosen[1], self.chosen[2]];
        let result = rules::check(&cards[0], &cards[1], &cards[2]);
        for (name, verdict) in result.verdicts() {
            debug!("{name}: {verdict:?}");
        }

        if result.is_set() {
            self.table.retain(|card| !cards.contains(card));
            self.stats.sets_found += 1;
            info!("set: {}, {}, {}", cards[0], cards[1], cards[2]);
            ChooseOutcome::Set(cards)
        } else {
            self.stats.misses += 1;
            let failing = result.failing();
            info!("not a set, mixed {}", failing.join(", "));
            ChooseOutcome::Miss { cards, failing }
        }
    }

    /// All sets on the table, as table positions.
    #[must_use]
    pub fn sets_on_table(&self) -> Vec<[usize; 3]> {
        rules::find_sets(&self.table)
    }

    /// Positions of one set on the table.
    #[must_use]
    pub fn hint(&self) -> Option<[usize; 3]> {
        rules::first_set(&self.table)
    }

    /// No cards left to deal and no set on the table.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() && self.hint().is_none()
    }

    /// The table is at its extra-card limit with no set while the deck still
    /// holds cards. Nothing the player does can change the table.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        !self.deck.is_empty()
            && self.table.len() >= self.config.table_size + self.config.extra_cards
            && self.hint().is_none()
    }

    /// Apply a player action.
    pub fn apply(&mut self, action: Action) -> Result<Outcome, GameError> {
        let outcome = match action {
            Action::Choose(index) => Outcome::Chose(self.choose(index)?),
            Action::DealExtra => Outcome::Dealt(self.deal_extra()),
            Action::ClearSelection => {
                self.clear_selection();
                Outcome::Cleared
            }
            Action::LogTable => {
                for (i, card) in self.table.iter().enumerate() {
                    info!("table[{i:>2}] {card}");
                }
                info!("{} cards left in the deck", self.deck.len());
                Outcome::TableLogged
            }
            Action::Hint => {
                let hint = self.hint();
                match hint {
                    Some([a, b, c]) => info!("hint: positions {a}, {b}, {c}"),
                    None => info!("hint: no set on the table"),
                }
                Outcome::Hint(hint)
            }
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Attribute, DECK_SIZE};

    fn seeded(seed: u64) -> Game {
        Game::new(GameConfig::default().with_seed(seed)).unwrap()
    }

    /// Deals in canonical deck order: positions 0, 1, 2 form a set
    /// (one outlined square in each color) and 0, 1, 3 do not.
    fn canonical() -> Game {
        let mut cards = full_deck();
        cards.reverse();
        Game::with_deck(GameConfig::default(), Deck::from_cards(cards)).unwrap()
    }

    const SET: [usize; 3] = [0, 1, 2];
    const MISS: [usize; 3] = [0, 1, 3];

    #[test]
    fn test_new_game_deals_table() {
        let game = seeded(42);
        assert_eq!(game.table().len(), 12);
        assert_eq!(game.deck().len(), DECK_SIZE - 12);
        assert!(game.chosen().is_empty());
        assert_eq!(game.seed(), Some(42));
    }

    #[test]
    fn test_same_seed_same_table() {
        assert_eq!(seeded(7).table(), seeded(7).table());
        assert_ne!(seeded(7).table(), seeded(8).table());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_table_size(10);
        assert!(matches!(Game::new(config), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_choose_out_of_range() {
        let mut game = seeded(1);
        let err = game.choose(12).unwrap_err();
        assert_eq!(err, GameError::NoSuchCard { index: 12, table_len: 12 });
        assert!(game.chosen().is_empty());
    }

    #[test]
    fn test_choose_same_card_twice() {
        let mut game = seeded(1);
        let card = game.table()[4];

        assert_eq!(
            game.choose(4).unwrap(),
            ChooseOutcome::Selected { card, selected: 1 }
        );
        assert_eq!(game.choose(4).unwrap(), ChooseOutcome::AlreadyChosen(card));
        assert_eq!(game.chosen(), &[card]);
        assert!(game.is_chosen(4));
        assert!(!game.is_chosen(5));
    }

    #[test]
    fn test_set_leaves_table_and_refills() {
        let mut game = canonical();
        let cards: Vec<Card> = SET.iter().map(|&i| game.table()[i]).collect();

        game.choose(SET[0]).unwrap();
        game.choose(SET[1]).unwrap();
        let outcome = game.choose(SET[2]).unwrap();

        assert_eq!(outcome, ChooseOutcome::Set([cards[0], cards[1], cards[2]]));
        assert_eq!(game.table().len(), 12);
        assert_eq!(game.deck().len(), DECK_SIZE - 15);
        assert!(game.chosen().is_empty());
        for card in &cards {
            assert!(!game.table().contains(card));
        }
        assert_eq!(game.stats().sets_found, 1);
    }

    #[test]
    fn test_set_keeps_remaining_order() {
        let mut game = canonical();
        let survivors: Vec<Card> = game
            .table()
            .iter()
            .enumerate()
            .filter(|(i, _)| !SET.contains(i))
            .map(|(_, c)| *c)
            .collect();

        for i in SET {
            game.choose(i).unwrap();
        }

        assert_eq!(&game.table()[..9], survivors.as_slice());
        // Refill comes from the top of the deck, appended at the end.
        assert_eq!(game.table()[9], full_deck()[12]);
    }

    #[test]
    fn test_miss_keeps_table() {
        let mut game = canonical();
        let before = game.table().to_vec();

        game.choose(MISS[0]).unwrap();
        game.choose(MISS[1]).unwrap();
        let outcome = game.choose(MISS[2]).unwrap();

        match outcome {
            ChooseOutcome::Miss { failing, .. } => {
                assert_eq!(failing.as_slice(), &["fill", "color"]);
            }
            other => panic!("expected a miss, got {other:?}"),
        }
        assert_eq!(game.table(), before.as_slice());
        assert!(game.chosen().is_empty());
        assert_eq!(game.stats().misses, 1);
    }

    #[test]
    fn test_deal_extra_is_capped() {
        let mut game = seeded(5);
        assert_eq!(game.deal_extra(), 3);
        assert_eq!(game.table().len(), 15);
        assert_eq!(game.deal_extra(), 0);
        assert_eq!(game.table().len(), 15);
    }

    #[test]
    fn test_set_from_extra_cards_shrinks_table() {
        let mut game = canonical();
        assert_eq!(game.deal_extra(), 3);
        assert_eq!(game.table().len(), 15);
        let deck_len = game.deck().len();

        for i in SET {
            game.choose(i).unwrap();
        }

        assert_eq!(game.stats().sets_found, 1);
        assert_eq!(game.table().len(), 12);
        assert_eq!(game.deck().len(), deck_len);
    }

    #[test]
    fn test_capped_table_without_set_is_stuck() {
        // Every attribute index in {0, 1}: no attribute can be all different,
        // so no three of these form a set.
        let cap: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| {
                [c.shape.index(), c.amount.index(), c.fill.index(), c.color.index()]
                    .iter()
                    .all(|&i| i < 2)
            })
            .take(15)
            .collect();
        assert_eq!(cap.len(), 15);

        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| !cap.contains(c))
            .collect();
        cards.extend(cap.iter().rev());
        let mut game = Game::with_deck(GameConfig::default(), Deck::from_cards(cards)).unwrap();
        assert!(!game.is_stuck());

        assert_eq!(game.deal_extra(), 3);
        assert!(game.hint().is_none());
        assert!(game.is_stuck());
        assert!(!game.is_over());
        assert_eq!(game.deal_extra(), 0);
        assert_eq!(game.deck().len(), DECK_SIZE - 15);

        assert!(!canonical().is_stuck());
    }

    #[test]
    fn test_fill_stops_when_deck_empty() {
        let cards = full_deck();
        let deck = Deck::from_cards(cards[..5].to_vec());
        let mut game = Game::with_deck(GameConfig::default(), deck).unwrap();

        assert_eq!(game.table().len(), 5);
        assert!(game.deck().is_empty());
        assert_eq!(game.fill(3), 0);
    }

    #[test]
    fn test_clear_selection() {
        let mut game = seeded(9);
        game.apply(Action::Choose(0)).unwrap();
        game.apply(Action::Choose(1)).unwrap();
        assert_eq!(game.chosen().len(), 2);

        let outcome = game.apply(Action::ClearSelection).unwrap();
        assert_eq!(outcome, Outcome::Cleared);
        assert!(game.chosen().is_empty());
    }

    #[test]
    fn test_apply_hint_and_log() {
        let mut game = seeded(11);
        let expected = game.hint();
        assert_eq!(game.apply(Action::Hint).unwrap(), Outcome::Hint(expected));
        assert_eq!(game.apply(Action::LogTable).unwrap(), Outcome::TableLogged);
        assert!(!Outcome::TableLogged.changed_state());
    }

    #[test]
    fn test_game_over_detection() {
        // Square/One/Outline in red and green plus a circle: no set, no deck.
        let cards = full_deck();
        let deck = Deck::from_cards(vec![cards[0], cards[1], cards[27]]);
        let game = Game::with_deck(GameConfig::default(), deck).unwrap();

        assert!(game.is_over());
        assert!(!seeded(1).is_over());
    }
}
