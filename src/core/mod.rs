//! Core types shared by every other module: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::GameError;
pub use rng::GameRng;
