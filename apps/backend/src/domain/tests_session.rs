use crate::domain::session::{GameSession, GuessOutcome, Phase, SavedProgress};

#[test]
fn correct_guess_advances_score_and_streak() {
    let mut session = GameSession::new();
    session.phase = Phase::Active;

    let outcome = session.resolve_guess(true);
    assert_eq!(outcome, GuessOutcome::Correct { milestone: None });
    assert_eq!(session.score, 1);
    assert_eq!(session.streak, 1);
    assert_eq!(session.high_score, 1);
    assert_eq!(session.best_streak, 1);
    assert_eq!(session.phase, Phase::Resolved);
}

#[test]
fn incorrect_guess_resets_streak_but_keeps_score() {
    let mut session = GameSession::new();
    session.phase = Phase::Active;
    session.resolve_guess(true);
    session.phase = Phase::Active;
    session.resolve_guess(true);

    session.phase = Phase::Active;
    let outcome = session.resolve_guess(false);
    assert_eq!(outcome, GuessOutcome::Incorrect);
    assert_eq!(session.streak, 0);
    assert_eq!(session.score, 2, "score is never rolled back");
    assert_eq!(session.best_streak, 2);
    assert_eq!(session.phase, Phase::Resolved);
}

#[test]
fn milestone_fires_on_each_multiple_of_five() {
    let mut session = GameSession::new();
    let mut milestones = Vec::new();
    for _ in 0..12 {
        session.phase = Phase::Active;
        if let GuessOutcome::Correct { milestone: Some(m) } = session.resolve_guess(true) {
            milestones.push(m);
        }
    }
    assert_eq!(milestones, vec![5, 10]);
    assert_eq!(session.milestone, Some(10));
}

#[test]
fn milestone_clear_is_value_checked() {
    let mut session = GameSession::new();
    session.milestone = Some(10);

    // A stale clear for an earlier milestone must not wipe the newer one.
    session.clear_milestone(5);
    assert_eq!(session.milestone, Some(10));

    session.clear_milestone(10);
    assert_eq!(session.milestone, None);
}

#[test]
fn restart_resets_counters_but_not_records() {
    let mut session = GameSession::new();
    for _ in 0..7 {
        session.phase = Phase::Active;
        session.resolve_guess(true);
    }
    assert_eq!(session.high_score, 7);

    session.reset_for_restart();
    assert_eq!(session.score, 0);
    assert_eq!(session.streak, 0);
    assert_eq!(session.milestone, None);
    assert_eq!(session.phase, Phase::Loading);
    assert_eq!(session.high_score, 7);
    assert_eq!(session.best_streak, 7);
}

#[test]
fn resume_restores_counters_and_repairs_records() {
    // Records never trail the resumed score/streak, even if the stored
    // snapshot is internally inconsistent.
    let progress = SavedProgress {
        score: 9,
        streak: 4,
        high_score: 6,
        best_streak: 2,
        saved_at_unix: 0,
    };
    let session = GameSession::resume(&progress);
    assert_eq!(session.score, 9);
    assert_eq!(session.streak, 4);
    assert_eq!(session.high_score, 9);
    assert_eq!(session.best_streak, 4);
    assert_eq!(session.phase, Phase::Loading);
}

#[test]
fn progress_snapshot_mirrors_counters() {
    let mut session = GameSession::new();
    session.phase = Phase::Active;
    session.resolve_guess(true);

    let progress = session.progress(1_700_000_000);
    assert_eq!(progress.score, 1);
    assert_eq!(progress.streak, 1);
    assert_eq!(progress.high_score, 1);
    assert_eq!(progress.best_streak, 1);
    assert_eq!(progress.saved_at_unix, 1_700_000_000);
}
