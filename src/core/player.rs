//! Player seats and players.
//!
//! ## PlayerId
//!
//! Seat index in a two-player game. Seat 0 moves on even turns, seat 1 on odd turns.
//!
//! ## Player
//!
//! A display name bound to a move strategy. Players carry no round state, so
//! the same pair can be reused for any number of rounds.

use serde::{Deserialize, Serialize};

use super::error::Result;
use crate::strategy::{MoveContext, MoveStrategy};

/// Seat of a player: `PlayerId(0)` or `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// First seat. Moves on even turns.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Second seat. Moves on odd turns.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat that moves on the given turn number.
    ///
    /// ```
    /// use number_game::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0), PlayerId::FIRST);
    /// assert_eq!(PlayerId::for_turn(7), PlayerId::SECOND);
    /// ```
    #[must_use]
    pub const fn for_turn(turn: u64) -> Self {
        if turn % 2 == 0 {
            Self::FIRST
        } else {
            Self::SECOND
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A named player with a fixed move strategy.
#[derive(Debug)]
pub struct Player<S> {
    name: String,
    strategy: S,
}

impl<S: MoveStrategy> Player<S> {
    /// Create a player. The strategy is fixed for the player's lifetime.
    pub fn new(name: impl Into<String>, strategy: S) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }

    /// Display name. Not required to be unique.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ask the strategy for a move. The result is passed through unchanged.
    pub fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        self.strategy.choose_move(ctx)
    }
}
