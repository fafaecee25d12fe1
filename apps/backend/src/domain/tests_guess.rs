use crate::domain::guess::{guess_is_correct, Guess};
use crate::domain::round::Round;
use crate::domain::stats::Stat;
use crate::test_support::fixtures::pokemon;

#[test]
fn higher_correct_when_right_is_greater() {
    assert!(guess_is_correct(Guess::Higher, 50, 80));
    assert!(!guess_is_correct(Guess::Higher, 90, 60));
}

#[test]
fn lower_correct_when_right_is_smaller() {
    assert!(guess_is_correct(Guess::Lower, 90, 60));
    assert!(!guess_is_correct(Guess::Lower, 50, 80));
}

#[test]
fn equality_is_correct_for_both_directions() {
    // Tie-favors-player rule: this is deliberate, not an oversight.
    assert!(guess_is_correct(Guess::Higher, 80, 80));
    assert!(guess_is_correct(Guess::Lower, 80, 80));
}

#[test]
fn parse_accepts_both_directions_case_insensitively() {
    assert_eq!(Guess::parse("higher"), Some(Guess::Higher));
    assert_eq!(Guess::parse("Lower"), Some(Guess::Lower));
    assert_eq!(Guess::parse("HIGHER"), Some(Guess::Higher));
    assert_eq!(Guess::parse("sideways"), None);
    assert_eq!(Guess::parse(""), None);
}

#[test]
fn round_resolve_records_outcome_once() {
    let mut round = Round::new(pokemon(1, 50), pokemon(2, 80), Stat::Attack);
    assert!(!round.resolved);

    let correct = round.resolve(Guess::Higher);
    assert!(correct);
    assert!(round.resolved);
    assert_eq!(round.correct, Some(true));

    // A second resolve must not flip the recorded outcome.
    let again = round.resolve(Guess::Lower);
    assert!(again);
    assert_eq!(round.correct, Some(true));
}

#[test]
fn round_tie_detection() {
    let tied = Round::new(pokemon(1, 80), pokemon(2, 80), Stat::Speed);
    assert!(tied.is_tie());

    let distinct = Round::new(pokemon(1, 80), pokemon(2, 81), Stat::Speed);
    assert!(!distinct.is_tie());
}
