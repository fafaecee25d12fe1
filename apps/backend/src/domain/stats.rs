//! The closed set of comparable stats.
//!
//! Every round compares the two Pokémon on exactly one of these. The set is a
//! static enumeration known ahead of time, never derived from upstream data.

use serde::{Deserialize, Serialize};

/// A named numeric stat used for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Sum of all base stats.
    Total,
    Height,
    Weight,
    Hp,
    Attack,
    Defense,
    Speed,
}

/// All comparable stats, in display order. Attribute draws index into this.
pub const ALL_STATS: [Stat; 7] = [
    Stat::Total,
    Stat::Height,
    Stat::Weight,
    Stat::Hp,
    Stat::Attack,
    Stat::Defense,
    Stat::Speed,
];

impl Stat {
    /// Stable key used in snapshots and for indexing into a stat block.
    pub fn key(self) -> &'static str {
        match self {
            Stat::Total => "total",
            Stat::Height => "height",
            Stat::Weight => "weight",
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::Speed => "speed",
        }
    }

    /// Human-readable label for the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            Stat::Total => "Base Stat Total",
            Stat::Height => "Height",
            Stat::Weight => "Weight",
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::Speed => "Speed",
        }
    }
}
