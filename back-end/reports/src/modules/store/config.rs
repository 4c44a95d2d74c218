//! Configuration for the data source used by asynchronous queries.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::env::{env_bool, env_path_opt, env_u64};

/// Default simulated fetch latency in milliseconds.
fn default_latency_ms() -> u64 {
    25
}

/// Configuration for the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Delay before a deferred fetch resolves, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Make the deferred source fail every fetch.
    #[serde(default)]
    pub unreachable: bool,

    /// Load the snapshot from this JSON file instead of the built-in data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            unreachable: false,
            snapshot_path: None,
        }
    }
}

impl SourceConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated latency in milliseconds.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Set the simulated latency as Duration.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = latency.as_millis() as u64;
        self
    }

    /// Mark the source as unreachable.
    pub fn with_unreachable(mut self, unreachable: bool) -> Self {
        self.unreachable = unreachable;
        self
    }

    /// Read the snapshot from a JSON file.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Get the simulated latency as a Duration.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REPORTS_SOURCE_LATENCY_MS`: Simulated fetch latency in ms
    /// - `REPORTS_SOURCE_UNREACHABLE`: Fail every fetch (true/false)
    /// - `REPORTS_SNAPSHOT_PATH`: JSON snapshot file to load
    pub fn from_env() -> Self {
        Self {
            latency_ms: env_u64("REPORTS_SOURCE_LATENCY_MS", default_latency_ms()),
            unreachable: env_bool("REPORTS_SOURCE_UNREACHABLE", false),
            snapshot_path: env_path_opt("REPORTS_SNAPSHOT_PATH"),
        }
    }
}
