//! Uniform random strategy.

use tracing::debug;

use super::{MoveContext, MoveStrategy};
use crate::core::{check_step_bounds, GameRng, RandomSource, Result};

/// Draws each move uniformly from `min_step..=max_step`.
#[derive(Clone, Debug)]
pub struct RandomStrategy<R = GameRng> {
    rng: R,
}

impl<R: RandomSource> RandomStrategy<R> {
    /// Create a random strategy drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<GameRng> {
    /// Random strategy with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RandomSource> MoveStrategy for RandomStrategy<R> {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        check_step_bounds(ctx.min_step, ctx.max_step)?;

        let amount = self.rng.uniform_inclusive(ctx.min_step, ctx.max_step);
        debug!(amount, "random move");
        Ok(amount)
    }
}
