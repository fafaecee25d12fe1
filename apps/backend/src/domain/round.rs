//! A single left/right comparison round.

use crate::domain::guess::{guess_is_correct, Guess};
use crate::domain::pokemon::Pokemon;
use crate::domain::stats::Stat;

/// One comparison: two distinct Pokémon and the active stat.
///
/// Rounds are values with a one-shot lifecycle: built by the selector with
/// `resolved = false`, resolved exactly once, then replaced by the next round
/// (the right-hand Pokémon is promoted to the left on a correct guess).
#[derive(Debug, Clone)]
pub struct Round {
    pub left: Pokemon,
    pub right: Pokemon,
    pub stat: Stat,
    pub resolved: bool,
    pub correct: Option<bool>,
}

impl Round {
    pub fn new(left: Pokemon, right: Pokemon, stat: Stat) -> Self {
        Self {
            left,
            right,
            stat,
            resolved: false,
            correct: None,
        }
    }

    pub fn left_value(&self) -> i64 {
        self.left.stat(self.stat)
    }

    pub fn right_value(&self) -> i64 {
        self.right.stat(self.stat)
    }

    /// True when both sides carry the same value for the active stat.
    /// Only reachable through the selector's degraded accept-the-tie path.
    pub fn is_tie(&self) -> bool {
        self.left_value() == self.right_value()
    }

    /// Resolve the round against a guess, returning whether it was correct.
    ///
    /// Resolving an already-resolved round returns the recorded outcome
    /// unchanged; callers rely on this for duplicate-input idempotence.
    pub fn resolve(&mut self, guess: Guess) -> bool {
        if self.resolved {
            return self.correct.unwrap_or(false);
        }
        let correct = guess_is_correct(guess, self.left_value(), self.right_value());
        self.resolved = true;
        self.correct = Some(correct);
        correct
    }
}
