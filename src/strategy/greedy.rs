//! Deterministic goal-seeking strategy.

use tracing::debug;

use super::{MoveContext, MoveStrategy};
use crate::core::{check_step_bounds, Result};

/// Takes the largest step while a full step still fits, otherwise a
/// remainder-based step.
///
/// With `remaining = goal - current`:
/// - `remaining >= max_step`: `max_step`
/// - `remaining < min_step`: `min_step` (the smallest possible overshoot)
/// - otherwise: `remaining mod (max_step + 1)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    /// Pure move computation. Bounds are not checked here.
    ///
    /// The modulus is taken in `i128`, so `max_step == i64::MAX` is fine.
    #[must_use]
    pub fn compute(ctx: &MoveContext) -> i64 {
        let remaining = ctx.remaining();
        if remaining >= ctx.max_step {
            ctx.max_step
        } else if remaining < ctx.min_step {
            ctx.min_step
        } else {
            // Result is at most max_step, so it fits back into i64.
            i128::from(remaining).rem_euclid(i128::from(ctx.max_step) + 1) as i64
        }
    }
}

impl MoveStrategy for GreedyStrategy {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        check_step_bounds(ctx.min_step, ctx.max_step)?;

        let amount = Self::compute(ctx);
        debug!(remaining = ctx.remaining(), amount, "greedy move");
        Ok(amount)
    }
}
