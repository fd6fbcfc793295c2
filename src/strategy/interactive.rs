//! Strategy driven by an external actor.

use tracing::warn;

use super::input::MoveInput;
use super::{MoveContext, MoveStrategy};
use crate::core::{GameError, Result};

/// Asks its input provider for a move until one lands in `min_step..=max_step`.
///
/// Out-of-range values are reported back to the provider and asked for again,
/// with no retry limit. Text that is not an integer ends the request with
/// `GameError::InputFormat`.
#[derive(Debug)]
pub struct InteractiveStrategy<I> {
    input: I,
}

impl<I: MoveInput> InteractiveStrategy<I> {
    /// Create an interactive strategy reading from `input`.
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// The input provider.
    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Give back the input provider.
    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: MoveInput> MoveStrategy for InteractiveStrategy<I> {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        loop {
            let raw = self.input.request_move(ctx.min_step, ctx.max_step)?;
            let amount: i64 = raw.trim().parse().map_err(|_| GameError::InputFormat {
                raw: raw.trim_end().to_string(),
            })?;

            if ctx.min_step <= amount && amount <= ctx.max_step {
                return Ok(amount);
            }

            warn!(amount, min_step = ctx.min_step, max_step = ctx.max_step, "move out of range");
            self.input.report_invalid(amount, ctx.min_step, ctx.max_step)?;
        }
    }
}
