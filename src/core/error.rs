//! Error type for game operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no card at table position {index} (table holds {table_len})")]
    NoSuchCard { index: usize, table_len: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
