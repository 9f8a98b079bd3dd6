//! TOML defaults for the phala command line.
//!
//! ```toml
//! [ephemeris]
//! ayanamsa = "lahiri"
//!
//! [timeline]
//! duration_minutes = 240
//! resolution_minutes = 10
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use phala_chart::{DEFAULT_DURATION_MINUTES, DEFAULT_RESOLUTION_MINUTES};
use phala_ephemeris::Ayanamsa;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown ayanamsa: {0}")]
    UnknownAyanamsa(String),
    #[error("invalid timeline setting: {0}")]
    InvalidTimeline(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// Sidereal system name, matched loosely ("Lahiri", "KP", ...).
    pub ayanamsa: String,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            ayanamsa: Ayanamsa::default().name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub duration_minutes: i64,
    pub resolution_minutes: i64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            duration_minutes: DEFAULT_DURATION_MINUTES,
            resolution_minutes: DEFAULT_RESOLUTION_MINUTES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhalaConfig {
    pub ephemeris: EphemerisSettings,
    pub timeline: TimelineSettings,
}

impl PhalaConfig {
    /// Load and validate a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_str(&content)
    }

    /// Parse and validate TOML text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ayanamsa()?;
        if self.timeline.duration_minutes <= 0 {
            return Err(ConfigError::InvalidTimeline(format!(
                "duration_minutes {} must be positive",
                self.timeline.duration_minutes
            )));
        }
        if self.timeline.resolution_minutes <= 0 {
            return Err(ConfigError::InvalidTimeline(format!(
                "resolution_minutes {} must be positive",
                self.timeline.resolution_minutes
            )));
        }
        Ok(())
    }

    /// Configured sidereal system.
    pub fn ayanamsa(&self) -> Result<Ayanamsa, ConfigError> {
        Ayanamsa::from_name(&self.ephemeris.ayanamsa)
            .ok_or_else(|| ConfigError::UnknownAyanamsa(self.ephemeris.ayanamsa.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        let config = PhalaConfig::from_str("").unwrap();
        assert_eq!(config, PhalaConfig::default());
        assert_eq!(config.ayanamsa().unwrap(), Ayanamsa::Lahiri);
        assert_eq!(config.timeline.duration_minutes, 240);
        assert_eq!(config.timeline.resolution_minutes, 10);
    }

    #[test]
    fn partial_sections() {
        let config = PhalaConfig::from_str(
            r#"
[ephemeris]
ayanamsa = "Raman"

[timeline]
resolution_minutes = 5
"#,
        )
        .unwrap();
        assert_eq!(config.ayanamsa().unwrap(), Ayanamsa::Raman);
        assert_eq!(config.timeline.duration_minutes, 240);
        assert_eq!(config.timeline.resolution_minutes, 5);
    }

    #[test]
    fn rejects_unknown_ayanamsa() {
        let err = PhalaConfig::from_str("[ephemeris]\nayanamsa = \"tropical\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAyanamsa(_)));
    }

    #[test]
    fn rejects_non_positive_window() {
        let err = PhalaConfig::from_str("[timeline]\nduration_minutes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeline(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = PhalaConfig::from_str("[timeline\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = PhalaConfig::from_file("/nonexistent/phala.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
