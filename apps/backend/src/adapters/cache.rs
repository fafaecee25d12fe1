//! TTL cache decorator over a Pokémon source.
//!
//! The cache is a transparent accelerator: misses always fall through to the
//! inner source, failures are never cached, and correctness does not depend
//! on a hit.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::domain::{Pokemon, PokemonId};
use crate::errors::DomainError;
use crate::services::source::PokemonSource;

pub struct CachedSource {
    inner: Arc<dyn PokemonSource>,
    cache: Cache<PokemonId, Pokemon>,
}

impl CachedSource {
    pub fn new(inner: Arc<dyn PokemonSource>, ttl: Duration, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(capacity)
                .build(),
        }
    }
}

#[async_trait]
impl PokemonSource for CachedSource {
    async fn fetch(&self, id: PokemonId) -> Result<Pokemon, DomainError> {
        if let Some(hit) = self.cache.get(&id).await {
            debug!(id, "pokemon cache hit");
            return Ok(hit);
        }
        let pokemon = self.inner.fetch(id).await?;
        self.cache.insert(id, pokemon.clone()).await;
        Ok(pokemon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::pokemon;
    use crate::test_support::StubSource;

    #[tokio::test]
    async fn second_fetch_is_served_from_cache() {
        let stub = Arc::new(StubSource::with_catalog(vec![pokemon(1, 50)]));
        let cached = CachedSource::new(stub.clone(), Duration::from_secs(60), 16);

        let first = cached.fetch(1).await.unwrap();
        let second = cached.fetch(1).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(stub.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let stub = Arc::new(StubSource::with_catalog(vec![pokemon(1, 50)]));
        let cached = CachedSource::new(stub.clone(), Duration::from_secs(60), 16);

        assert!(cached.fetch(9).await.is_err());
        assert!(cached.fetch(9).await.is_err());
        // Both misses reached the source.
        assert_eq!(stub.fetch_count(), 2);
    }
}
