use crate::domain::guess::Guess;
use crate::domain::round::Round;
use crate::domain::session::GameSession;
use crate::domain::snapshot::{round_view, snapshot};
use crate::domain::stats::Stat;
use crate::test_support::fixtures::pokemon;

#[test]
fn right_value_is_hidden_until_resolved() {
    let mut round = Round::new(pokemon(1, 50), pokemon(2, 80), Stat::Attack);

    let view = round_view(&round);
    assert_eq!(view.left.stat_value, Some(50));
    assert_eq!(view.right.stat_value, None, "must not leak the answer");
    assert!(!view.resolved);
    assert_eq!(view.correct, None);

    round.resolve(Guess::Higher);
    let view = round_view(&round);
    assert_eq!(view.right.stat_value, Some(80));
    assert!(view.resolved);
    assert_eq!(view.correct, Some(true));
}

#[test]
fn stat_view_carries_key_and_label() {
    let round = Round::new(pokemon(1, 10), pokemon(2, 20), Stat::Total);
    let view = round_view(&round);
    assert_eq!(view.stat.key, "total");
    assert_eq!(view.stat.label, "Base Stat Total");
}

#[test]
fn session_snapshot_surfaces_load_error() {
    let session = GameSession::new();
    let snap = snapshot("abc", &session, None, Some("upstream unavailable"));
    assert_eq!(snap.session_id, "abc");
    assert!(snap.round.is_none());
    assert_eq!(snap.load_error.as_deref(), Some("upstream unavailable"));
}

#[test]
fn session_snapshot_serializes_phase_snake_case() {
    let session = GameSession::new();
    let snap = snapshot("abc", &session, None, None);
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["phase"], "loading");
    assert!(json.get("round").is_none());
    assert!(json.get("load_error").is_none());
}
