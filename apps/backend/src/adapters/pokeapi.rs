//! PokeAPI adapter: fetch and map upstream Pokémon records.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::domain::{Pokemon, PokemonId, StatBlock};
use crate::error::AppError;
use crate::errors::{DomainError, NotFoundKind, UpstreamErrorKind};
use crate::services::source::PokemonSource;

/// Hosts sprite URLs are allowed to point at. Anything else is dropped
/// rather than forwarded to the client.
const SPRITE_HOST_ALLOWLIST_EXACT: &str = "raw.githubusercontent.com";
const SPRITE_HOST_ALLOWLIST_SUFFIX: &str = ".pokeapi.co";

pub struct PokeApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl PokemonSource for PokeApiSource {
    async fn fetch(&self, id: PokemonId) -> Result<Pokemon, DomainError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        debug!(id, "fetching pokemon");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let kind = if e.is_timeout() {
                UpstreamErrorKind::Timeout
            } else {
                UpstreamErrorKind::Network
            };
            DomainError::upstream(kind, format!("GET {url}: {e}"))
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(
                NotFoundKind::Pokemon,
                format!("pokemon {id} not found upstream"),
            ));
        }
        if !status.is_success() {
            return Err(DomainError::upstream(
                UpstreamErrorKind::Status(status.as_u16()),
                format!("GET {url} returned {status}"),
            ));
        }

        let api: ApiPokemon = response.json().await.map_err(|e| {
            DomainError::upstream(UpstreamErrorKind::Decode, format!("GET {url}: {e}"))
        })?;

        map_pokemon(api)
    }
}

#[derive(Debug, Deserialize)]
struct ApiPokemon {
    id: PokemonId,
    name: String,
    height: i64,
    weight: i64,
    sprites: ApiSprites,
    types: Vec<ApiTypeSlot>,
    stats: Vec<ApiStatSlot>,
}

#[derive(Debug, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
    other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Deserialize)]
struct ApiArtwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    type_: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiStatSlot {
    base_stat: i64,
    stat: ApiNamed,
}

#[derive(Debug, Deserialize)]
struct ApiNamed {
    name: String,
}

fn map_pokemon(api: ApiPokemon) -> Result<Pokemon, DomainError> {
    let total: i64 = api.stats.iter().map(|s| s.base_stat).sum();
    let named = |name: &str| -> Result<i64, DomainError> {
        api.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
            .ok_or_else(|| {
                DomainError::upstream(
                    UpstreamErrorKind::Decode,
                    format!("pokemon {} is missing stat {name}", api.id),
                )
            })
    };

    let stats = StatBlock {
        total,
        height: api.height,
        weight: api.weight,
        hp: named("hp")?,
        attack: named("attack")?,
        defense: named("defense")?,
        speed: named("speed")?,
    };

    // Prefer the official artwork, fall back to the default sprite.
    let sprite = api
        .sprites
        .other
        .and_then(|o| o.official_artwork)
        .and_then(|a| a.front_default)
        .or(api.sprites.front_default)
        .and_then(|url| sanitize_sprite_url(&url));

    Ok(Pokemon {
        id: api.id,
        name: api.name,
        sprite,
        types: api.types.into_iter().map(|t| t.type_.name).collect(),
        stats,
    })
}

/// Accept only https URLs on hosts PokeAPI actually serves sprites from.
fn sanitize_sprite_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://")?;
    let host = rest.split(['/', '?', '#']).next()?;
    if host == SPRITE_HOST_ALLOWLIST_EXACT || host.ends_with(SPRITE_HOST_ALLOWLIST_SUFFIX) {
        Some(url.to_string())
    } else {
        None
    }
}
