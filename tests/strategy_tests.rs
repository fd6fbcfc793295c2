//! Strategy behaviour tests.

use number_game::core::{GameConfig, GameError, GameRng, Player, RandomSource};
use number_game::session::GameSession;
use number_game::strategy::{
    GreedyStrategy, InteractiveStrategy, MoveContext, MoveStrategy, RandomStrategy, ScriptedInput,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// =============================================================================
// Greedy
// =============================================================================

#[test]
fn test_greedy_remainder_branch_matches_remaining() {
    // Inside min_step <= remaining < max_step the remainder is the remaining
    // distance itself, so the move always lands on the goal.
    let ctx = MoveContext::new(17, 3, 8, 22);
    let amount = GreedyStrategy.choose_move(&ctx).unwrap();

    assert_eq!(amount, 5 % 9);
    assert_eq!(ctx.current + amount, ctx.goal);
}

#[test]
fn test_greedy_never_leaves_step_range_from_below_goal() {
    let config = GameConfig::new(50, 4, 9).unwrap();
    for current in 0..50 {
        let ctx = MoveContext::for_config(&config, current);
        let amount = GreedyStrategy.choose_move(&ctx).unwrap();
        assert!(config.is_legal_move(amount), "current={} amount={}", current, amount);
    }
}

proptest! {
    #[test]
    fn prop_greedy_formula(
        min_step in 1i64..50,
        span in 0i64..50,
        goal_extra in 0i64..200,
        current_frac in 0.0f64..1.5,
    ) {
        let max_step = min_step + span;
        let goal = max_step + goal_extra;
        let current = (goal as f64 * current_frac) as i64;
        let ctx = MoveContext::new(current, min_step, max_step, goal);

        let amount = GreedyStrategy.choose_move(&ctx).unwrap();
        let remaining = goal - current;

        if remaining >= max_step {
            prop_assert_eq!(amount, max_step);
        } else if remaining < min_step {
            prop_assert_eq!(amount, min_step);
        } else {
            prop_assert_eq!(amount, remaining.rem_euclid(max_step + 1));
        }
    }

    #[test]
    fn prop_greedy_formula_full_range(
        (min_step, max_step, goal, current) in (1i64..=i64::MAX)
            .prop_flat_map(|max_step| (1..=max_step, Just(max_step), max_step..=i64::MAX))
            .prop_flat_map(|(min_step, max_step, goal)| {
                (Just(min_step), Just(max_step), Just(goal), 0..=goal)
            }),
    ) {
        let ctx = MoveContext::new(current, min_step, max_step, goal);

        let amount = GreedyStrategy.choose_move(&ctx).unwrap();
        let remaining = goal - current;

        if remaining >= max_step {
            prop_assert_eq!(amount, max_step);
        } else if remaining < min_step {
            prop_assert_eq!(amount, min_step);
        } else {
            let expected = i128::from(remaining).rem_euclid(i128::from(max_step) + 1);
            prop_assert_eq!(i128::from(amount), expected);
        }
    }
}

// =============================================================================
// Random
// =============================================================================

#[test]
fn test_random_samples_stay_in_range_and_vary() {
    let ctx = MoveContext::new(0, 3, 8, 100);
    let mut strategy = RandomStrategy::seeded(2024);

    let samples: Vec<_> = (0..2000).map(|_| strategy.choose_move(&ctx).unwrap()).collect();
    let distinct: BTreeSet<_> = samples.iter().copied().collect();

    assert!(samples.iter().all(|v| (3..=8).contains(v)));
    assert!(distinct.len() > 1);
    assert_eq!(distinct, (3..=8).collect());
}

#[test]
fn test_random_with_entropy_stays_in_range() {
    let ctx = MoveContext::new(0, 1, 2, 10);
    let mut strategy = RandomStrategy::new(GameRng::from_entropy());

    for _ in 0..200 {
        let amount = strategy.choose_move(&ctx).unwrap();
        assert!(amount == 1 || amount == 2);
    }
}

#[test]
fn test_random_with_counting_source() {
    /// Cycles through the range in order.
    struct Cycle {
        next: i64,
    }

    impl RandomSource for Cycle {
        fn uniform_inclusive(&mut self, low: i64, high: i64) -> i64 {
            let value = low + self.next % (high - low + 1);
            self.next += 1;
            value
        }
    }

    let ctx = MoveContext::new(0, 2, 4, 10);
    let mut strategy = RandomStrategy::new(Cycle { next: 0 });
    let moves: Vec<_> = (0..4).map(|_| strategy.choose_move(&ctx).unwrap()).collect();

    assert_eq!(moves, vec![2, 3, 4, 2]);
}

// =============================================================================
// Interactive
// =============================================================================

#[test]
fn test_interactive_round_against_greedy() {
    let config = GameConfig::new(10, 2, 5).unwrap();
    let mut players = [
        Player::new("human", number_game::Strategy::interactive(ScriptedInput::new(["7", "3", "2"]))),
        Player::new("bot", number_game::Strategy::greedy()),
    ];

    let mut session = GameSession::new(config, &mut players);
    let winner = session.play_round().unwrap();

    // human 3 (after rejecting 7), bot 5, human 2 -> 10
    let moves: Vec<_> = session.history().iter().map(|r| r.amount).collect();
    assert_eq!(moves, vec![3, 5, 2]);
    assert_eq!(winner, "human");
}

#[test]
fn test_interactive_malformed_input_aborts_round() {
    let config = GameConfig::new(10, 2, 5).unwrap();
    let mut players = [
        Player::new("human", number_game::Strategy::interactive(ScriptedInput::new(["4", "abc"]))),
        Player::new("bot", number_game::Strategy::greedy()),
    ];

    let mut session = GameSession::new(config, &mut players);
    let err = session.play_round().unwrap_err();

    assert!(matches!(err, GameError::InputFormat { ref raw } if raw == "abc"));
    assert_eq!(session.turn(), 2);
    assert_eq!(session.current(), 9);
}

#[test]
fn test_interactive_retries_until_legal() {
    let replies = ["0", "-3", "6", "100", "4"];
    let mut strategy = InteractiveStrategy::new(ScriptedInput::new(replies));

    let amount = strategy.choose_move(&MoveContext::new(0, 1, 5, 10)).unwrap();

    assert_eq!(amount, 4);
    assert_eq!(strategy.input().rejected(), &[0, -3, 6, 100]);
    assert_eq!(strategy.input().prompts(), 5);
}
