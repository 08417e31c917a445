//! Configuration
//!
//! Engine tuning loaded from a TOML file. Every section has defaults so
//! a partial file - or no file at all - works.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Run boundaries and seeding
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Per-year event counts and pacing
    #[serde(default)]
    pub events: EventSettings,
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Run boundaries and seeding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Age at which the run starts
    pub start_age: u32,
    /// Age at which the run stops
    pub end_age: u32,
    /// Fixed RNG seed for reproducible runs; omit for OS entropy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            start_age: 0,
            end_age: 80,
            seed: None,
        }
    }
}

/// Per-year event counts and presentation pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Generic events selected per year
    pub generic_per_year: usize,
    /// Personal events selected per year
    pub personal_per_year: usize,
    /// Delay between displayed events in milliseconds. Presentation
    /// only: the engine itself never sleeps.
    pub event_pacing_ms: u64,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            generic_per_year: 1,
            personal_per_year: 1,
            event_pacing_ms: 0,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML config")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize TOML config")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_yields_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.simulation.start_age, 0);
        assert_eq!(config.simulation.end_age, 80);
        assert_eq!(config.events.generic_per_year, 1);
        assert!(config.simulation.seed.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let toml = r#"
            [simulation]
            seed = 42
            end_age = 65

            [events]
            generic_per_year = 3
        "#;
        let config = EngineConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.end_age, 65);
        assert_eq!(config.simulation.start_age, 0);
        assert_eq!(config.events.generic_per_year, 3);
        assert_eq!(config.events.personal_per_year, 1);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(EngineConfig::from_toml_str("simulation = 3").is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");

        let mut config = EngineConfig::default();
        config.simulation.seed = Some(7);
        config.events.event_pacing_ms = 250;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = EngineConfig::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.seed, Some(7));
        assert_eq!(loaded.events.event_pacing_ms, 250);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = EngineConfig::from_file(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
