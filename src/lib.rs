//! # number-game
//!
//! Two players take turns adding an amount in `min_step..=max_step` to a
//! shared counter that starts at zero. The player whose move brings the
//! counter to the goal (or past it) wins the round.
//!
//! ## Design Principles
//!
//! 1. **Strategies are pluggable**: every player is a name plus a
//!    `MoveStrategy`. Random, interactive and greedy strategies are built in.
//!
//! 2. **No hidden I/O**: randomness comes through `RandomSource` and human
//!    input through `MoveInput`, both injected at construction.
//!
//! 3. **Rounds are cheap**: a `GameSession` borrows its players, so the same
//!    pair plays any number of rounds.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, players, RNG
//! - `strategy`: Move strategies and input providers
//! - `session`: Round driver and turn reports

pub mod core;
pub mod session;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Player, PlayerId, RandomSource, Result,
    UnknownPlayerType,
};

pub use crate::session::{GameSession, TurnReport};

pub use crate::strategy::{
    GreedyStrategy, InteractiveStrategy, MoveContext, MoveInput, MoveStrategy, RandomStrategy,
    ScriptedInput, StdioInput, Strategy, StrategyKind,
};
