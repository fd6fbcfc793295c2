//! Move strategies.
//!
//! Strategies are trait-based so players can be given any policy:
//! - `RandomStrategy`: uniform draw from the legal range
//! - `InteractiveStrategy`: asks a `MoveInput` provider until it gets a legal move
//! - `GreedyStrategy`: deterministic goal-seeking move
//!
//! `Strategy` closes over the three built-in variants with `match` dispatch,
//! which is what front-ends use when the kind is chosen at runtime.

pub mod greedy;
pub mod input;
pub mod interactive;
pub mod random;

pub use greedy::GreedyStrategy;
pub use input::{MoveInput, ScriptedInput, StdioInput};
pub use interactive::InteractiveStrategy;
pub use random::RandomStrategy;

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, Result, UnknownPlayerType};

/// Public game state at the moment a move is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveContext {
    /// Counter value before the move.
    pub current: i64,
    /// Smallest legal move.
    pub min_step: i64,
    /// Largest legal move.
    pub max_step: i64,
    /// Value the counter must reach.
    pub goal: i64,
}

impl MoveContext {
    /// Create a context from raw values.
    #[must_use]
    pub const fn new(current: i64, min_step: i64, max_step: i64, goal: i64) -> Self {
        Self {
            current,
            min_step,
            max_step,
            goal,
        }
    }

    /// Create a context for a configured game at the given counter value.
    #[must_use]
    pub const fn for_config(config: &GameConfig, current: i64) -> Self {
        Self::new(current, config.min_step(), config.max_step(), config.goal())
    }

    /// Distance left to the goal. Negative once the goal has been passed.
    ///
    /// Saturates at the `i64` limits.
    #[must_use]
    pub const fn remaining(&self) -> i64 {
        self.goal.saturating_sub(self.current)
    }
}

/// Policy that picks a move amount.
///
/// Called once per turn. The returned amount is applied as-is; the session
/// does not clamp it.
pub trait MoveStrategy {
    /// Choose the amount to add to the counter.
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64>;
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        (**self).choose_move(ctx)
    }
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for &mut S {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        (**self).choose_move(ctx)
    }
}

/// Kind of built-in strategy, as named by front-ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    Interactive,
    Greedy,
}

impl std::str::FromStr for StrategyKind {
    type Err = UnknownPlayerType;

    /// Parse `random`, `user`/`interactive` or `strategic`/`greedy`, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "user" | "interactive" => Ok(StrategyKind::Interactive),
            "strategic" | "greedy" => Ok(StrategyKind::Greedy),
            other => Err(UnknownPlayerType {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Random => "random",
            StrategyKind::Interactive => "user",
            StrategyKind::Greedy => "strategic",
        };
        f.write_str(name)
    }
}

/// One of the built-in strategies.
pub enum Strategy {
    Random(RandomStrategy<GameRng>),
    Interactive(InteractiveStrategy<Box<dyn MoveInput>>),
    Greedy(GreedyStrategy),
}

impl Strategy {
    /// Random strategy over the given RNG.
    #[must_use]
    pub fn random(rng: GameRng) -> Self {
        Strategy::Random(RandomStrategy::new(rng))
    }

    /// Interactive strategy reading from the given provider.
    pub fn interactive(input: impl MoveInput + 'static) -> Self {
        let input: Box<dyn MoveInput> = Box::new(input);
        Strategy::Interactive(InteractiveStrategy::new(input))
    }

    /// Greedy goal-seeking strategy.
    #[must_use]
    pub fn greedy() -> Self {
        Strategy::Greedy(GreedyStrategy)
    }

    /// Which built-in this is.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Random(_) => StrategyKind::Random,
            Strategy::Interactive(_) => StrategyKind::Interactive,
            Strategy::Greedy(_) => StrategyKind::Greedy,
        }
    }
}

impl MoveStrategy for Strategy {
    fn choose_move(&mut self, ctx: &MoveContext) -> Result<i64> {
        match self {
            Strategy::Random(s) => s.choose_move(ctx),
            Strategy::Interactive(s) => s.choose_move(ctx),
            Strategy::Greedy(s) => s.choose_move(ctx),
        }
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Strategy").field(&self.kind()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_remaining() {
        let ctx = MoveContext::new(4, 1, 3, 10);
        assert_eq!(ctx.remaining(), 6);

        let past = MoveContext::new(12, 1, 3, 10);
        assert_eq!(past.remaining(), -2);

        let extreme = MoveContext::new(i64::MIN, 1, 3, i64::MAX);
        assert_eq!(extreme.remaining(), i64::MAX);
    }

    #[test]
    fn test_context_for_config() {
        let config = GameConfig::new(10, 2, 5).unwrap();
        assert_eq!(MoveContext::for_config(&config, 3), MoveContext::new(3, 2, 5, 10));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("random".parse::<StrategyKind>(), Ok(StrategyKind::Random));
        assert_eq!("USER".parse::<StrategyKind>(), Ok(StrategyKind::Interactive));
        assert_eq!("interactive".parse::<StrategyKind>(), Ok(StrategyKind::Interactive));
        assert_eq!(" Strategic ".parse::<StrategyKind>(), Ok(StrategyKind::Greedy));
        assert_eq!("greedy".parse::<StrategyKind>(), Ok(StrategyKind::Greedy));
        assert_eq!(
            "Minimax".parse::<StrategyKind>(),
            Err(UnknownPlayerType { name: "minimax".to_string() })
        );
    }

    #[test]
    fn test_kind_display_parses_back() {
        for kind in [StrategyKind::Random, StrategyKind::Interactive, StrategyKind::Greedy] {
            assert_eq!(kind.to_string().parse::<StrategyKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_enum_dispatch() {
        let ctx = MoveContext::new(0, 2, 5, 10);

        let mut greedy = Strategy::greedy();
        assert_eq!(greedy.kind(), StrategyKind::Greedy);
        assert_eq!(greedy.choose_move(&ctx).unwrap(), 5);

        let mut random = Strategy::random(GameRng::new(1));
        assert_eq!(random.kind(), StrategyKind::Random);
        let amount = random.choose_move(&ctx).unwrap();
        assert!((2..=5).contains(&amount));

        let mut interactive = Strategy::interactive(ScriptedInput::new(["3"]));
        assert_eq!(interactive.kind(), StrategyKind::Interactive);
        assert_eq!(interactive.choose_move(&ctx).unwrap(), 3);
    }

    #[test]
    fn test_boxed_custom_strategy() {
        struct AlwaysOne;

        impl MoveStrategy for AlwaysOne {
            fn choose_move(&mut self, _ctx: &MoveContext) -> Result<i64> {
                Ok(1)
            }
        }

        let mut boxed: Box<dyn MoveStrategy> = Box::new(AlwaysOne);
        assert_eq!(boxed.choose_move(&MoveContext::new(0, 1, 3, 10)).unwrap(), 1);
    }
}
