//! Immutable Pokémon records as the game sees them.

use serde::{Deserialize, Serialize};

use crate::domain::stats::Stat;

/// Identifier within the addressable entity space (1..=max configured id).
pub type PokemonId = u32;

/// Numeric stat values for one Pokémon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub total: i64,
    pub height: i64,
    pub weight: i64,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}

impl StatBlock {
    pub fn value(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Total => self.total,
            Stat::Height => self.height,
            Stat::Weight => self.weight,
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::Speed => self.speed,
        }
    }
}

/// A single comparable Pokémon. Never mutated after fetch; rounds hold clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    /// Artwork URL, already sanitized to upstream-owned hosts.
    pub sprite: Option<String>,
    pub types: Vec<String>,
    pub stats: StatBlock,
}

impl Pokemon {
    pub fn stat(&self, stat: Stat) -> i64 {
        self.stats.value(stat)
    }
}
