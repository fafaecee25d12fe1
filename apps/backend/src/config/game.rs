//! Gameplay configuration: pacing, id space, milestone timing.

use std::time::Duration;

use crate::error::AppError;

/// Default addressable id space (Gen 1-9).
const DEFAULT_MAX_POKEMON_ID: u32 = 1025;
/// Default pause between guess resolution and the next transition.
const DEFAULT_SETTLE_DELAY_MS: u64 = 1500;
/// Default lifetime of a milestone marker.
const DEFAULT_MILESTONE_CLEAR_MS: u64 = 3000;

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Size of the addressable entity space; draws are uniform over 1..=N.
    pub max_pokemon_id: u32,
    /// Settle delay: lets presentation show feedback before the next round
    /// or the game-over screen.
    pub settle_delay: Duration,
    /// How long a streak milestone stays visible before self-clearing.
    pub milestone_clear: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_pokemon_id: DEFAULT_MAX_POKEMON_ID,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            milestone_clear: Duration::from_millis(DEFAULT_MILESTONE_CLEAR_MS),
        }
    }
}

impl GameConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// - `GAME_MAX_POKEMON_ID`
    /// - `GAME_SETTLE_DELAY_MS`
    /// - `GAME_MILESTONE_CLEAR_MS`
    pub fn from_env() -> Result<Self, AppError> {
        let max_pokemon_id = env_parse("GAME_MAX_POKEMON_ID", DEFAULT_MAX_POKEMON_ID)?;
        if max_pokemon_id < 2 {
            return Err(AppError::config(
                "GAME_MAX_POKEMON_ID must be at least 2 to allow distinct pairs",
            ));
        }
        Ok(Self {
            max_pokemon_id,
            settle_delay: Duration::from_millis(env_parse(
                "GAME_SETTLE_DELAY_MS",
                DEFAULT_SETTLE_DELAY_MS,
            )?),
            milestone_clear: Duration::from_millis(env_parse(
                "GAME_MILESTONE_CLEAR_MS",
                DEFAULT_MILESTONE_CLEAR_MS,
            )?),
        })
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::config(format!("{name} is not a valid value: {raw}"))),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::config(format!("{name}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = GameConfig::default();
        assert_eq!(config.max_pokemon_id, 1025);
        assert_eq!(config.settle_delay, Duration::from_millis(1500));
        assert_eq!(config.milestone_clear, Duration::from_millis(3000));
    }
}
