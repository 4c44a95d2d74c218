//! Environment variable parsing utilities.
//!
//! Each helper follows the pattern: try env var → parse → fallback to default.
//!
//! # Example
//!
//! ```rust
//! use reports::utils::env::{env_bool, env_u64};
//!
//! let latency = env_u64("REPORTS_SOURCE_LATENCY_MS", 25);
//! let unreachable = env_bool("REPORTS_SOURCE_UNREACHABLE", false);
//! ```

use std::path::PathBuf;

/// Get a u64 from environment, with default fallback.
///
/// Returns `default` if:
/// - Environment variable is not set
/// - Value cannot be parsed as u64
#[inline]
pub fn env_u64(key: &str, default: u64) -> u64 {
    env_u64_opt(key).unwrap_or(default)
}

/// Get an optional u64 from environment.
///
/// Returns `None` if the variable is unset or not a valid u64.
#[inline]
pub fn env_u64_opt(key: &str) -> Option<u64> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Get a bool from environment, with default fallback.
///
/// Recognizes: "true", "1", "yes", "on" (case-insensitive) as true.
/// Any other set value is false; unset returns the default.
#[inline]
pub fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(default)
}

/// Get an optional String from environment.
#[inline]
pub fn env_string_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an optional PathBuf from environment.
#[inline]
pub fn env_path_opt(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().map(PathBuf::from)
}
