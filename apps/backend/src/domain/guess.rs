//! Guess directions and the correctness rule.

use serde::{Deserialize, Serialize};

/// Player's guess about the right-hand value relative to the left-hand one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Guess {
    Higher,
    Lower,
}

impl Guess {
    /// Parse the wire form ("higher" / "lower"). Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "higher" => Some(Guess::Higher),
            "lower" => Some(Guess::Lower),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Guess::Higher => "higher",
            Guess::Lower => "lower",
        }
    }
}

/// Whether a guess is correct for the given pair of values.
///
/// Equality counts as correct for both directions. Ties favor the player by
/// rule, which is also what makes the selector's degraded accept-the-tie path
/// harmless.
pub fn guess_is_correct(guess: Guess, left_value: i64, right_value: i64) -> bool {
    match guess {
        Guess::Higher => right_value >= left_value,
        Guess::Lower => right_value <= left_value,
    }
}
