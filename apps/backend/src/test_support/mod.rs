//! Shared helpers for unit and integration tests: stub collaborators,
//! scripted randomness and fixture builders.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::GameConfig;
use crate::domain::{GameRng, Pokemon, PokemonId, SavedProgress, Stat};
use crate::errors::{DomainError, NotFoundKind, UpstreamErrorKind};
use crate::services::progress::ProgressStore;
use crate::services::source::PokemonSource;
use crate::services::GameFlow;

pub mod fixtures {
    use crate::domain::{Pokemon, PokemonId, StatBlock};

    /// A Pokémon whose stats all carry the same `value`, so comparisons
    /// behave identically regardless of which stat gets drawn.
    pub fn pokemon(id: PokemonId, value: i64) -> Pokemon {
        pokemon_with(
            id,
            StatBlock {
                total: value,
                height: value,
                weight: value,
                hp: value,
                attack: value,
                defense: value,
                speed: value,
            },
        )
    }

    pub fn pokemon_with(id: PokemonId, stats: StatBlock) -> Pokemon {
        Pokemon {
            id,
            name: format!("poke-{id}"),
            sprite: None,
            types: vec!["normal".to_string()],
            stats,
        }
    }
}

/// In-memory Pokémon source backed by a fixed catalog.
pub struct StubSource {
    catalog: HashMap<PokemonId, Pokemon>,
    failing: HashSet<PokemonId>,
    fetches: AtomicU32,
}

impl StubSource {
    pub fn with_catalog(catalog: Vec<Pokemon>) -> Self {
        Self {
            catalog: catalog.into_iter().map(|p| (p.id, p)).collect(),
            failing: HashSet::new(),
            fetches: AtomicU32::new(0),
        }
    }

    /// Make fetches for the given ids fail with a network error.
    pub fn failing_ids(mut self, ids: impl IntoIterator<Item = PokemonId>) -> Self {
        self.failing = ids.into_iter().collect();
        self
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonSource for StubSource {
    async fn fetch(&self, id: PokemonId) -> Result<Pokemon, DomainError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&id) {
            return Err(DomainError::upstream(
                UpstreamErrorKind::Network,
                format!("stubbed network failure for {id}"),
            ));
        }
        self.catalog.get(&id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Pokemon, format!("no stub pokemon {id}"))
        })
    }
}

/// RNG that replays scripted draw sequences, cycling when exhausted.
pub struct ScriptedRng {
    ids: Vec<PokemonId>,
    stats: Vec<Stat>,
    id_pos: usize,
    stat_pos: usize,
}

impl ScriptedRng {
    pub fn new(ids: Vec<PokemonId>, stats: Vec<Stat>) -> Self {
        assert!(!ids.is_empty(), "ScriptedRng needs at least one id");
        assert!(!stats.is_empty(), "ScriptedRng needs at least one stat");
        Self {
            ids,
            stats,
            id_pos: 0,
            stat_pos: 0,
        }
    }
}

impl GameRng for ScriptedRng {
    fn pokemon_id(&mut self, _max_id: u32) -> PokemonId {
        let id = self.ids[self.id_pos % self.ids.len()];
        self.id_pos += 1;
        id
    }

    fn stat(&mut self) -> Stat {
        let stat = self.stats[self.stat_pos % self.stats.len()];
        self.stat_pos += 1;
        stat
    }
}

/// Progress store backed by a mutex-guarded cell.
#[derive(Default)]
pub struct MemoryProgressStore {
    inner: Mutex<Option<SavedProgress>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: SavedProgress) -> Self {
        Self {
            inner: Mutex::new(Some(progress)),
        }
    }

    pub fn saved(&self) -> Option<SavedProgress> {
        *self.inner.lock()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn load(&self) -> Result<Option<SavedProgress>, DomainError> {
        Ok(*self.inner.lock())
    }

    async fn save(&self, progress: &SavedProgress) -> Result<(), DomainError> {
        *self.inner.lock() = Some(*progress);
        Ok(())
    }
}

/// Game config with fast timers for tests.
pub fn fast_config(max_pokemon_id: u32) -> GameConfig {
    GameConfig {
        max_pokemon_id,
        settle_delay: Duration::from_millis(20),
        milestone_clear: Duration::from_millis(50),
    }
}

pub fn test_flow(
    source: Arc<dyn PokemonSource>,
    store: Arc<dyn ProgressStore>,
    config: GameConfig,
) -> GameFlow {
    GameFlow::new(source, store, config)
}
