//! Runtime configuration
//!
//! Read from an optional TOML file. Every field has a default so an
//! empty or partial file is valid.
//!
//! ```toml
//! undo_window_ms = 5000
//! rollover_interval_secs = 20
//! log_filter = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitConfig {
    /// How long a deleted habit stays restorable, in milliseconds
    pub undo_window_ms: u64,
    /// How often the current calendar day is re-checked, in seconds
    pub rollover_interval_secs: u64,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for HabitConfig {
    fn default() -> Self {
        Self {
            undo_window_ms: 5_000,
            rollover_interval_secs: 20,
            log_filter: "info".to_string(),
        }
    }
}

impl HabitConfig {
    /// Load from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                Self::from_toml(&content)
                    .with_context(|| format!("invalid config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Undo window as signed milliseconds for timestamp arithmetic
    pub fn undo_window_millis(&self) -> i64 {
        i64::try_from(self.undo_window_ms).unwrap_or(i64::MAX)
    }

    /// Interval between rollover checks, at least one second
    pub fn rollover_interval(&self) -> Duration {
        Duration::from_secs(self.rollover_interval_secs.max(1))
    }
}
