//! Domain layer: pure game logic, no I/O and no clocks.

pub mod guess;
pub mod pokemon;
pub mod rng;
pub mod round;
pub mod session;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod tests_guess;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_session;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use guess::{guess_is_correct, Guess};
pub use pokemon::{Pokemon, PokemonId, StatBlock};
pub use rng::{GameRng, SeededRng};
pub use round::Round;
pub use session::{GameSession, GuessOutcome, Phase, SavedProgress, MILESTONE_INTERVAL};
pub use stats::{Stat, ALL_STATS};
