//! Property tests over arbitrary operation sequences on a session.

use proptest::prelude::*;

use crate::domain::session::{GameSession, Phase};

#[derive(Debug, Clone, Copy)]
enum Op {
    Correct,
    Incorrect,
    Restart,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Correct),
        Just(Op::Incorrect),
        Just(Op::Restart),
    ]
}

proptest! {
    /// High score and best streak never decrease, no matter what happens.
    #[test]
    fn records_are_monotone(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut session = GameSession::new();
        let mut prev_high = 0u32;
        let mut prev_best = 0u32;

        for op in ops {
            match op {
                Op::Correct => {
                    session.phase = Phase::Active;
                    session.resolve_guess(true);
                }
                Op::Incorrect => {
                    session.phase = Phase::Active;
                    session.resolve_guess(false);
                }
                Op::Restart => session.reset_for_restart(),
            }

            prop_assert!(session.high_score >= prev_high);
            prop_assert!(session.best_streak >= prev_best);
            prev_high = session.high_score;
            prev_best = session.best_streak;

            // Counters can never outrun their records.
            prop_assert!(session.score <= session.high_score);
            prop_assert!(session.streak <= session.best_streak);
        }
    }

    /// Streak counts consecutive correct guesses since the last miss.
    #[test]
    fn streak_tracks_tail_of_correct_guesses(ops in proptest::collection::vec(any::<bool>(), 0..100)) {
        let mut session = GameSession::new();
        let mut expected_streak = 0u32;

        for correct in ops {
            session.phase = Phase::Active;
            session.resolve_guess(correct);
            expected_streak = if correct { expected_streak + 1 } else { 0 };
            prop_assert_eq!(session.streak, expected_streak);
        }
    }
}
