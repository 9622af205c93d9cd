//! Server configuration loaded from `config/steel_config.json5`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("Failed to access config file: {0}")]
    Io(#[from] io::Error),
    /// The file is not valid JSON5 for [`SteelConfig`].
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The default configuration could not be serialized.
    #[error("Failed to serialize default config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top level server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SteelConfig {
    /// World seed. Empty means random; non-numeric strings are hashed.
    pub seed: String,
    /// Ticks per second of the server loop.
    pub tick_rate: f32,
    /// How many ticks the sandbox arena runs before shutting down. 0 runs forever.
    pub sandbox_ticks: u64,
    /// Damage and death tuning.
    pub combat: CombatConfig,
}

impl Default for SteelConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            tick_rate: 20.0,
            sandbox_ticks: 600,
            combat: CombatConfig::default(),
        }
    }
}

/// Damage and death tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// No-damage window armed by every damage request, in ticks.
    pub invulnerability_ticks: i32,
    /// How recently a player must have hurt a mob for it to drop experience.
    pub player_damage_window: i32,
    /// Volume of hurt and death sounds.
    pub sound_volume: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            invulnerability_ticks: 20,
            player_damage_window: 100,
            sound_volume: 1.0,
        }
    }
}

impl SteelConfig {
    /// Loads the config at `path`, writing the defaults there first if the
    /// file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(&config)?)?;
            log::info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses a JSON5 document. Missing fields take their defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(content)?)
    }

    /// Derives the numeric world seed from [`SteelConfig::seed`]. Text seeds
    /// use Java's `String.hashCode`, like vanilla.
    #[must_use]
    pub fn numeric_seed(&self) -> i64 {
        if self.seed.is_empty() {
            return rand::random();
        }
        self.seed
            .parse()
            .unwrap_or_else(|_| i64::from(java_string_hash(&self.seed)))
    }
}

/// `String.hashCode`: UTF-16 code units folded into an `i32`.
fn java_string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = SteelConfig::parse(
            r"{
                // only override what matters
                seed: '42',
                combat: { player_damage_window: 40 },
            }",
        )
        .expect("valid json5");

        assert_eq!(config.numeric_seed(), 42);
        assert_eq!(config.combat.player_damage_window, 40);
        assert_eq!(config.combat.invulnerability_ticks, 20);
        assert!((config.tick_rate - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_seed_is_hashed() {
        let config = SteelConfig {
            seed: "steel".to_string(),
            ..SteelConfig::default()
        };
        assert_eq!(config.numeric_seed(), 109_760_971);
        assert_eq!(java_string_hash("Glowstone"), -1_284_959_528);
        assert_eq!(java_string_hash("héllo"), 103_094_734);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(matches!(
            SteelConfig::parse("{ tick_rate: 'fast' }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
