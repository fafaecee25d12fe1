//! Seam to the external entity data source.

use async_trait::async_trait;

use crate::domain::{Pokemon, PokemonId};
use crate::errors::DomainError;

/// Anything that can produce a Pokémon by id.
///
/// The engine only requires this one operation; retry/backoff policy and
/// response-shape mapping belong to the implementations. The selector never
/// retries a failed fetch itself.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch(&self, id: PokemonId) -> Result<Pokemon, DomainError>;
}
