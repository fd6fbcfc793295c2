//! Per-turn progress events.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn index the move was made on (0-based).
    pub turn: u64,
    /// Seat of the mover.
    pub player: PlayerId,
    /// Display name of the mover.
    pub name: String,
    /// Amount added to the counter.
    pub amount: i64,
    /// Counter value after the move.
    pub total: i64,
}

impl std::fmt::Display for TurnReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} moves {}. Total is now {}.", self.name, self.amount, self.total)
    }
}
