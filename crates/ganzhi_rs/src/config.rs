//! Engine configuration.

use std::path::Path;

use ganzhi_base::{CalendarConfig, DEFAULT_MAX_AGE, LuckConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of memoized charts.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options shared by every computation of one [`Engine`](crate::Engine).
///
/// Missing JSON fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub calendar: CalendarConfig,
    /// Luck windows are generated at least to this age.
    pub max_age: u32,
    /// Memo cache size; 0 disables caching. Once full, new charts are
    /// computed but not stored.
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig::default(),
            max_age: DEFAULT_MAX_AGE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn luck(&self) -> LuckConfig {
        LuckConfig {
            calendar: self.calendar,
            max_age: self.max_age,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
