//! One round of the counting game.

use tracing::{info, instrument, warn};

use super::report::TurnReport;
use crate::core::{GameConfig, GameError, Player, PlayerId, Result};
use crate::strategy::{MoveContext, MoveStrategy};

/// A single round: counter and turn index start at zero, players alternate
/// until the counter reaches or passes the goal.
///
/// The session borrows its players, so a fresh session can be built for each
/// round over the same pair.
///
/// ```
/// use number_game::core::{GameConfig, Player};
/// use number_game::session::GameSession;
/// use number_game::strategy::GreedyStrategy;
///
/// let config = GameConfig::new(10, 2, 5).unwrap();
/// let mut players = [
///     Player::new("Ada", GreedyStrategy),
///     Player::new("Bo", GreedyStrategy),
/// ];
///
/// let winner = GameSession::new(config, &mut players).play_round().unwrap();
/// assert_eq!(winner, "Bo");
/// ```
pub struct GameSession<'p, S> {
    config: GameConfig,
    players: &'p mut [Player<S>; 2],
    current: i64,
    turn: u64,
    history: Vec<TurnReport>,
}

impl<'p, S: MoveStrategy> GameSession<'p, S> {
    /// Start a round at counter 0, turn 0.
    pub fn new(config: GameConfig, players: &'p mut [Player<S>; 2]) -> Self {
        Self {
            config,
            players,
            current: 0,
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Configuration of this round.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Counter value.
    #[must_use]
    pub fn current(&self) -> i64 {
        self.current
    }

    /// Number of completed moves.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Moves played so far, in order.
    #[must_use]
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// True once the counter has reached or passed the goal.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.current >= self.config.goal()
    }

    /// Seat that moves on the given turn.
    #[must_use]
    pub fn seat_for_turn(&self, turn: u64) -> PlayerId {
        PlayerId::for_turn(turn)
    }

    /// Player that moves on the given turn: seat 0 on even turns, seat 1 on odd.
    #[must_use]
    pub fn whose_turn(&self, turn: u64) -> &Player<S> {
        &self.players[self.seat_for_turn(turn).index()]
    }

    /// The player who made the last move, once the round is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player<S>> {
        if self.is_over() && self.turn > 0 {
            Some(self.whose_turn(self.turn - 1))
        } else {
            None
        }
    }

    /// Play one move.
    ///
    /// The mover's amount is added to the counter as returned, without
    /// clamping to the step range or the goal. A move that would leave the
    /// `i64` range fails with `GameError::CounterOverflow` and leaves the
    /// session unchanged.
    pub fn play_one_turn(&mut self) -> Result<TurnReport> {
        let seat = self.seat_for_turn(self.turn);
        let ctx = MoveContext::for_config(&self.config, self.current);

        let player = &mut self.players[seat.index()];
        let amount = player.choose_move(&ctx)?;

        self.current = self
            .current
            .checked_add(amount)
            .ok_or(GameError::CounterOverflow {
                current: self.current,
                amount,
            })?;
        let report = TurnReport {
            turn: self.turn,
            player: seat,
            name: player.name().to_string(),
            amount,
            total: self.current,
        };
        self.turn += 1;

        info!(
            turn = report.turn,
            player = %report.name,
            amount,
            total = report.total,
            "turn played"
        );
        if self.current > self.config.goal() {
            warn!(total = self.current, goal = self.config.goal(), "goal overshot");
        }

        self.history.push(report.clone());
        Ok(report)
    }

    /// Play until the round is over and return the winner's name.
    pub fn play_round(&mut self) -> Result<String> {
        self.play_round_with(|_| {})
    }

    /// Play until the round is over, handing each turn's report to `observer`.
    ///
    /// Returns the name of the player whose move reached or passed the goal.
    #[instrument(skip_all, fields(goal = self.config.goal()))]
    pub fn play_round_with(&mut self, mut observer: impl FnMut(&TurnReport)) -> Result<String> {
        while !self.is_over() {
            let report = self.play_one_turn()?;
            observer(&report);
        }

        // goal > 0 and the counter starts at 0, so at least one move was made.
        let winner = self.whose_turn(self.turn - 1).name().to_string();
        info!(winner = %winner, turns = self.turn, total = self.current, "round over");
        Ok(winner)
    }
}
