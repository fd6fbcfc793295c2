//! Core types: configuration, errors, players, RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{check_step_bounds, GameConfig};
pub use error::{ConfigError, GameError, Result, UnknownPlayerType};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, RandomSource};
