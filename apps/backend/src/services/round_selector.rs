//! Round selection: draw a valid pair and a discriminating stat.
//!
//! The retry rules mirror the reference game exactly: the distinct-id draw
//! loops with a hard cap, and the tie-break loop shares one attempt counter
//! across stat redraws, replacing the right-hand Pokémon entirely on every
//! 7th attempt. After 20 attempts a tie is accepted; the guess rule scores
//! ties as correct for either direction, so the degraded round still plays
//! fairly.

use tracing::debug;

use crate::domain::{GameRng, Pokemon, PokemonId, Round};
use crate::errors::DomainError;
use crate::services::source::PokemonSource;

/// Cap on redraws while hunting a distinct right-hand id.
pub const MAX_ID_REDRAWS: u32 = 50;
/// Cap on the shared tie-break attempt counter.
pub const MAX_TIE_ATTEMPTS: u32 = 20;
/// Every Nth tie-break attempt replaces the right-hand Pokémon.
pub const ENTITY_REDRAW_INTERVAL: u32 = 7;

/// Draw a Pokémon whose id differs from `exclude`, redrawing on collision.
///
/// Fetch failures propagate untouched. Exceeding [`MAX_ID_REDRAWS`] yields
/// `SelectionExhausted`, which only happens in pathologically small id
/// spaces.
pub async fn draw_distinct(
    source: &dyn PokemonSource,
    rng: &mut dyn GameRng,
    max_id: u32,
    exclude: Option<PokemonId>,
) -> Result<Pokemon, DomainError> {
    for _ in 0..MAX_ID_REDRAWS {
        let id = rng.pokemon_id(max_id);
        if Some(id) == exclude {
            continue;
        }
        return source.fetch(id).await;
    }
    Err(DomainError::selection_exhausted(format!(
        "no id distinct from {exclude:?} within {MAX_ID_REDRAWS} draws (space 1..={max_id})"
    )))
}

/// Build the next round for a given left-hand Pokémon.
///
/// A preloaded candidate is used only if it is still distinct from the new
/// left-hand Pokémon; otherwise it is discarded and a fresh draw is made.
pub async fn select_round(
    source: &dyn PokemonSource,
    rng: &mut dyn GameRng,
    max_id: u32,
    left: Pokemon,
    preloaded: Option<Pokemon>,
) -> Result<Round, DomainError> {
    let mut right = match preloaded {
        Some(candidate) if candidate.id != left.id => candidate,
        _ => draw_distinct(source, rng, max_id, Some(left.id)).await?,
    };

    let mut stat = rng.stat();
    let mut attempts = 0u32;
    while left.stat(stat) == right.stat(stat) && attempts < MAX_TIE_ATTEMPTS {
        stat = rng.stat();
        attempts += 1;

        // The stat set may simply not discriminate this pair; periodically
        // swap the right-hand Pokémon instead of spinning on stats.
        if attempts % ENTITY_REDRAW_INTERVAL == 0 {
            right = draw_distinct(source, rng, max_id, Some(left.id)).await?;
            stat = rng.stat();
        }
    }

    if left.stat(stat) == right.stat(stat) {
        debug!(
            left_id = left.id,
            right_id = right.id,
            stat = stat.key(),
            "accepting tied round after exhausting tie-break attempts"
        );
    }

    Ok(Round::new(left, right, stat))
}

/// Build a fresh round from scratch (both sides drawn).
pub async fn new_pair(
    source: &dyn PokemonSource,
    rng: &mut dyn GameRng,
    max_id: u32,
) -> Result<Round, DomainError> {
    let left = draw_distinct(source, rng, max_id, None).await?;
    select_round(source, rng, max_id, left, None).await
}
