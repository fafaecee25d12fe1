//! Session state: score, streak, phase and milestone bookkeeping.

use serde::{Deserialize, Serialize};

/// Streak values that are positive multiples of this trigger a milestone.
pub const MILESTONE_INTERVAL: u32 = 5;

/// Lifecycle phase of a session.
///
/// `Loading → Active → Resolved → (Active | GameOver)`; `GameOver → Active`
/// only via an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Active,
    Resolved,
    GameOver,
}

/// Persisted progress snapshot, written whenever score/streak or the
/// monotone counters change. Last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub score: u32,
    pub streak: u32,
    pub high_score: u32,
    pub best_streak: u32,
    pub saved_at_unix: i64,
}

/// Mutable per-session counters, owned by the game flow and passed around
/// explicitly. All transitions happen through the methods below.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub score: u32,
    pub streak: u32,
    /// Monotone across restarts; persisted.
    pub high_score: u32,
    /// Monotone across restarts; persisted.
    pub best_streak: u32,
    pub phase: Phase,
    /// Transient milestone marker; self-clears after a fixed duration.
    pub milestone: Option<u32>,
}

/// Result of resolving a guess against the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { milestone: Option<u32> },
    Incorrect,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            score: 0,
            streak: 0,
            high_score: 0,
            best_streak: 0,
            phase: Phase::Loading,
            milestone: None,
        }
    }

    /// Resume from persisted progress. Score and streak carry over; the
    /// monotone counters are always restored.
    pub fn resume(progress: &SavedProgress) -> Self {
        Self {
            score: progress.score,
            streak: progress.streak,
            high_score: progress.high_score.max(progress.score),
            best_streak: progress.best_streak.max(progress.streak),
            phase: Phase::Loading,
            milestone: None,
        }
    }

    /// Apply a resolved guess to the counters and move to `Resolved`.
    ///
    /// Correct: score and streak advance, the monotone counters are raised
    /// when exceeded, and crossing a multiple of [`MILESTONE_INTERVAL`] sets
    /// the milestone marker (once per crossing, since streak only changes
    /// here). Incorrect: streak resets, score is retained.
    pub fn resolve_guess(&mut self, correct: bool) -> GuessOutcome {
        self.phase = Phase::Resolved;
        if correct {
            self.score += 1;
            self.streak += 1;
            self.high_score = self.high_score.max(self.score);
            self.best_streak = self.best_streak.max(self.streak);

            let milestone = (self.streak % MILESTONE_INTERVAL == 0).then_some(self.streak);
            if milestone.is_some() {
                self.milestone = milestone;
            }
            GuessOutcome::Correct { milestone }
        } else {
            self.streak = 0;
            GuessOutcome::Incorrect
        }
    }

    /// Reset for a fresh game. Never lowers `high_score`/`best_streak`.
    pub fn reset_for_restart(&mut self) {
        self.score = 0;
        self.streak = 0;
        self.milestone = None;
        self.phase = Phase::Loading;
    }

    /// Clear the milestone marker, but only if it still holds `value`.
    /// A newer milestone set after this one was scheduled must survive.
    pub fn clear_milestone(&mut self, value: u32) {
        if self.milestone == Some(value) {
            self.milestone = None;
        }
    }

    /// Current counters as a persistable snapshot.
    pub fn progress(&self, saved_at_unix: i64) -> SavedProgress {
        SavedProgress {
            score: self.score,
            streak: self.streak,
            high_score: self.high_score,
            best_streak: self.best_streak,
            saved_at_unix,
        }
    }
}
