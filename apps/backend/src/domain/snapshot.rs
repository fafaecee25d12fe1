//! Read-only view state handed to the presentation layer.
//!
//! The snapshot is the whole contract with the client: it hides the
//! right-hand stat value until the round is resolved so correctness can
//! never be derived client-side ahead of the guess.

use serde::Serialize;

use crate::domain::pokemon::{Pokemon, PokemonId};
use crate::domain::round::Round;
use crate::domain::session::{GameSession, Phase};
use crate::domain::stats::Stat;

#[derive(Debug, Clone, Serialize)]
pub struct StatView {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonView {
    pub id: PokemonId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
    pub types: Vec<String>,
    /// `None` for the right-hand side of an unresolved round.
    pub stat_value: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub left: PokemonView,
    pub right: PokemonView,
    pub stat: StatView,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub phase: Phase,
    pub score: u32,
    pub streak: u32,
    pub high_score: u32,
    pub best_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundView>,
    /// Set while the session is stuck in `Loading` after a failed round load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

fn pokemon_view(pokemon: &Pokemon, stat: Stat, reveal: bool) -> PokemonView {
    PokemonView {
        id: pokemon.id,
        name: pokemon.name.clone(),
        sprite: pokemon.sprite.clone(),
        types: pokemon.types.clone(),
        stat_value: reveal.then(|| pokemon.stat(stat)),
    }
}

pub fn round_view(round: &Round) -> RoundView {
    RoundView {
        left: pokemon_view(&round.left, round.stat, true),
        right: pokemon_view(&round.right, round.stat, round.resolved),
        stat: StatView {
            key: round.stat.key(),
            label: round.stat.label(),
        },
        resolved: round.resolved,
        correct: round.correct,
    }
}

/// Produce the full read-only snapshot for one session.
pub fn snapshot(
    session_id: &str,
    session: &GameSession,
    round: Option<&Round>,
    load_error: Option<&str>,
) -> SessionSnapshot {
    SessionSnapshot {
        session_id: session_id.to_string(),
        phase: session.phase,
        score: session.score,
        streak: session.streak,
        high_score: session.high_score,
        best_streak: session.best_streak,
        milestone: session.milestone,
        round: round.map(round_view),
        load_error: load_error.map(str::to_string),
    }
}
