//! Round driver.
//!
//! `GameSession` owns the counter and the turn index for one round and asks
//! the borrowed players for moves in turn. Each move produces a `TurnReport`.

pub mod game;
pub mod report;

pub use game::GameSession;
pub use report::TurnReport;
