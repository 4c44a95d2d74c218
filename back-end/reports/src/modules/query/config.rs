//! Configuration for asynchronous queries.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::env::{env_string_opt, env_u64_opt};

/// Where a failed fetch is turned into the reported search failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Convert the fetch error at the fetch call itself.
    CallSite,
    /// Run fetch and search in one scope and convert whatever escapes it.
    #[default]
    Enclosing,
}

impl FailureStrategy {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CallSite => "call_site",
            Self::Enclosing => "enclosing",
        }
    }
}

impl fmt::Display for FailureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "call_site" | "callsite" => Ok(Self::CallSite),
            "enclosing" => Ok(Self::Enclosing),
            other => Err(format!("unknown failure strategy: {other}")),
        }
    }
}

/// Configuration for asynchronous queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// How fetch failures are caught.
    #[serde(default)]
    pub failure_strategy: FailureStrategy,

    /// Upper bound on a single fetch in milliseconds. Unset means wait
    /// for the source however long it takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,
}

impl QueryConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the failure strategy.
    pub fn with_failure_strategy(mut self, strategy: FailureStrategy) -> Self {
        self.failure_strategy = strategy;
        self
    }

    /// Set fetch timeout in milliseconds.
    pub fn with_fetch_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.fetch_timeout_ms = Some(timeout_ms);
        self
    }

    /// Set fetch timeout as Duration.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Get the fetch timeout as a Duration, if one is set.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REPORTS_FAILURE_STRATEGY`: `call_site` or `enclosing`
    /// - `REPORTS_FETCH_TIMEOUT_MS`: Fetch timeout in ms
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(val) = env_string_opt("REPORTS_FAILURE_STRATEGY") {
            if let Ok(strategy) = val.parse() {
                config.failure_strategy = strategy;
            }
        }

        config.fetch_timeout_ms = env_u64_opt("REPORTS_FETCH_TIMEOUT_MS");

        config
    }
}
