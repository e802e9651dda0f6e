//! Game configuration.
//!
//! `GameConfig` collects the table rules and the window geometry. It is plain
//! serde data so the binary can load it from a JSON file and override single
//! fields from the command line.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Table rules and window geometry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deck shuffle. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Cards kept face up on the table after every refill.
    /// Must be a positive multiple of 3 (the table is laid out in columns of 3).
    pub table_size: usize,

    /// Cards added on top of `table_size` when the player asks for more.
    /// Must be a multiple of 3.
    pub extra_cards: usize,

    /// Logical window width in pixels.
    pub window_width: u32,

    /// Logical window height in pixels.
    pub window_height: u32,

    /// Width of the table area. Everything right of it is the chosen column.
    pub table_width: u32,

    /// Target frames per second.
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            table_size: 12,
            extra_cards: 3,
            window_width: 1280,
            window_height: 720,
            table_width: 960,
            fps: 60,
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the base table size.
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    /// Set the number of extra cards dealt on request.
    pub fn with_extra_cards(mut self, extra: usize) -> Self {
        self.extra_cards = extra;
        self
    }

    /// Set the target frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GameError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            GameError::InvalidConfig(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.table_size == 0 || self.table_size % 3 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "table_size must be a positive multiple of 3, got {}",
                self.table_size
            )));
        }
        if self.extra_cards % 3 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "extra_cards must be a multiple of 3, got {}",
                self.extra_cards
            )));
        }
        if self.table_size + self.extra_cards > crate::cards::DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "table_size + extra_cards exceeds the {} card deck",
                crate::cards::DECK_SIZE
            )));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(GameError::InvalidConfig("window size must be non-zero".into()));
        }
        if self.table_width == 0 || self.table_width >= self.window_width {
            return Err(GameError::InvalidConfig(format!(
                "table_width must be in 1..{}, got {}",
                self.window_width, self.table_width
            )));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidConfig("fps must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.table_size, 12);
        assert_eq!(config.extra_cards, 3);
        assert_eq!((config.window_width, config.window_height), (1280, 720));
        assert_eq!(config.table_width, 960);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_table_size(9)
            .with_extra_cards(6)
            .with_fps(30);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.table_size, 9);
        assert_eq!(config.extra_cards, 6);
        assert_eq!(config.fps, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ragged_table() {
        let config = GameConfig::default().with_table_size(10);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::default().with_extra_cards(2);
        assert!(config.validate().is_err());

        let config = GameConfig::default().with_table_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_table_wider_than_window() {
        let config = GameConfig {
            table_width: 1280,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 5, "fps": 30 }"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.fps, 30);
        assert_eq!(config.table_size, 12);
    }
}
