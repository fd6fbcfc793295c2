//! Game configuration.
//!
//! A `GameConfig` holds the goal and the legal step range. It can only be
//! built through validation, so every live config satisfies
//! `0 < min_step <= max_step <= goal`. The same check runs when a config is
//! deserialized.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Goal and step bounds for a round. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    goal: i64,
    min_step: i64,
    max_step: i64,
}

/// Unvalidated wire form of `GameConfig`.
#[derive(Deserialize)]
struct RawGameConfig {
    goal: i64,
    min_step: i64,
    max_step: i64,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        GameConfig::new(raw.goal, raw.min_step, raw.max_step)
    }
}

impl GameConfig {
    /// Create a validated configuration.
    ///
    /// ```
    /// use number_game::core::{ConfigError, GameConfig};
    ///
    /// let config = GameConfig::new(21, 1, 3).unwrap();
    /// assert_eq!(config.goal(), 21);
    ///
    /// assert_eq!(
    ///     GameConfig::new(10, 4, 2),
    ///     Err(ConfigError::StepRangeInverted { min_step: 4, max_step: 2 })
    /// );
    /// ```
    pub fn new(goal: i64, min_step: i64, max_step: i64) -> Result<Self, ConfigError> {
        if goal <= 0 {
            return Err(ConfigError::NonPositiveGoal { goal });
        }
        check_step_bounds(min_step, max_step)?;
        if max_step > goal {
            return Err(ConfigError::MaxStepExceedsGoal { max_step, goal });
        }

        Ok(Self {
            goal,
            min_step,
            max_step,
        })
    }

    /// Value the counter must reach.
    #[must_use]
    pub const fn goal(&self) -> i64 {
        self.goal
    }

    /// Smallest legal move.
    #[must_use]
    pub const fn min_step(&self) -> i64 {
        self.min_step
    }

    /// Largest legal move.
    #[must_use]
    pub const fn max_step(&self) -> i64 {
        self.max_step
    }

    /// Check whether `amount` is a legal move.
    #[must_use]
    pub const fn is_legal_move(&self, amount: i64) -> bool {
        self.min_step <= amount && amount <= self.max_step
    }

    /// Upper bound on turns when every move is at least `min_step`.
    ///
    /// Equals `ceil(goal / min_step)`.
    #[must_use]
    pub const fn max_turns(&self) -> u64 {
        let whole = self.goal / self.min_step;
        let partial = (self.goal % self.min_step != 0) as i64;
        (whole + partial) as u64
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "goal {} with moves of {}..={}",
            self.goal, self.min_step, self.max_step
        )
    }
}

/// Check the step range on its own: `0 < min_step <= max_step`.
///
/// Strategies call this on the bounds they are handed, since they have no
/// fallback for a broken range.
pub fn check_step_bounds(min_step: i64, max_step: i64) -> Result<(), ConfigError> {
    if min_step <= 0 {
        return Err(ConfigError::NonPositiveMinStep { min_step });
    }
    if max_step < min_step {
        return Err(ConfigError::StepRangeInverted { min_step, max_step });
    }
    Ok(())
}
