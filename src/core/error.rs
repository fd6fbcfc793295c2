//! Error types.
//!
//! - `ConfigError`: a game configuration that breaks `0 < min_step <= max_step <= goal`
//! - `GameError`: everything that can stop a round (bad config, bad input, I/O)
//! - `UnknownPlayerType`: a player type name that matches no built-in strategy
//!
//! An out-of-range interactive move is not an error: the interactive strategy
//! reports it to its input provider and asks again.

use derive_more::{Display, Error};

/// Invalid goal or step bounds.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Goal must be strictly positive.
    #[display("goal must be positive, got {goal}")]
    NonPositiveGoal { goal: i64 },

    /// Minimum step must be strictly positive.
    #[display("minimum step must be positive, got {min_step}")]
    NonPositiveMinStep { min_step: i64 },

    /// Maximum step is smaller than the minimum step.
    #[display("maximum step {max_step} is smaller than minimum step {min_step}")]
    StepRangeInverted { min_step: i64, max_step: i64 },

    /// Maximum step is larger than the goal.
    #[display("maximum step {max_step} exceeds goal {goal}")]
    MaxStepExceedsGoal { max_step: i64, goal: i64 },
}

/// Any failure while setting up or playing a round.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Configuration was rejected.
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),

    /// Input that does not parse as an integer.
    #[display("expected an integer, got {raw:?}")]
    InputFormat { raw: String },

    /// The input source has no more replies.
    #[display("input closed before a move was entered")]
    InputClosed,

    /// A move would push the counter past the `i64` range.
    #[display("counter overflow: {current} + {amount}")]
    CounterOverflow { current: i64, amount: i64 },

    /// Reading or writing the console failed.
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
}

/// Player type name that matches no built-in strategy.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("unknown player type {name:?}")]
pub struct UnknownPlayerType {
    pub name: String,
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MaxStepExceedsGoal { max_step: 12, goal: 10 };
        assert_eq!(err.to_string(), "maximum step 12 exceeds goal 10");

        let err = ConfigError::StepRangeInverted { min_step: 4, max_step: 2 };
        assert_eq!(err.to_string(), "maximum step 2 is smaller than minimum step 4");
    }

    #[test]
    fn test_game_error_wraps_config_error() {
        let err: GameError = ConfigError::NonPositiveMinStep { min_step: 0 }.into();

        assert!(matches!(err, GameError::Config(ConfigError::NonPositiveMinStep { min_step: 0 })));
        assert_eq!(
            err.to_string(),
            "invalid configuration: minimum step must be positive, got 0"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_counter_overflow_display() {
        let err = GameError::CounterOverflow { current: i64::MAX, amount: 1 };
        assert_eq!(err.to_string(), format!("counter overflow: {} + 1", i64::MAX));
    }

    #[test]
    fn test_unknown_player_type_display() {
        let err = UnknownPlayerType { name: "minimax".to_string() };
        assert_eq!(err.to_string(), "unknown player type \"minimax\"");
    }

    #[test]
    fn test_input_format_display() {
        let err = GameError::InputFormat { raw: "five".to_string() };
        assert_eq!(err.to_string(), "expected an integer, got \"five\"");
        assert!(err.source().is_none());
    }
}
