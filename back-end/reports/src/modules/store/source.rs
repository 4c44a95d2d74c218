//! Data sources that supply [`Store`] snapshots.
//!
//! Sources implement [`DataSource`] so that query code can stay agnostic of
//! whether the snapshot is already resident, arrives after a simulated
//! remote load, or is read from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::config::SourceConfig;
use super::error::{StoreError, StoreResult};
use super::snapshot::Store;

/// Trait for snapshot providers.
///
/// A fetch either yields the whole snapshot or fails; there are no partial
/// snapshots.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the current snapshot.
    async fn fetch(&self) -> StoreResult<Arc<Store>>;

    /// Get the source name for logging.
    fn name(&self) -> &'static str;
}

/// Source for a snapshot that is already in memory.
pub struct InMemorySource {
    store: Arc<Store>,
}

impl InMemorySource {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_arc(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Borrow the snapshot without going through `fetch`.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn fetch(&self) -> StoreResult<Arc<Store>> {
        Ok(self.store.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Source standing in for a remote call.
///
/// Every fetch waits for the configured latency, then either hands out the
/// snapshot or fails with [`StoreError::Unavailable`].
pub struct DeferredSource {
    store: Arc<Store>,
    latency: Duration,
    failure: Option<String>,
}

impl DeferredSource {
    /// Create a reachable source that resolves after `latency`.
    pub fn new(store: Store, latency: Duration) -> Self {
        Self {
            store: Arc::new(store),
            latency,
            failure: None,
        }
    }

    /// Create a source whose every fetch fails with `reason`.
    pub fn unreachable(latency: Duration, reason: impl Into<String>) -> Self {
        Self {
            store: Arc::new(Store::new()),
            latency,
            failure: Some(reason.into()),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_reachable(&self) -> bool {
        self.failure.is_none()
    }
}

#[async_trait]
impl DataSource for DeferredSource {
    #[instrument(skip(self), fields(latency_ms = self.latency.as_millis() as u64))]
    async fn fetch(&self) -> StoreResult<Arc<Store>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.failure {
            Some(reason) => {
                warn!(reason = %reason, "Deferred fetch failed");
                Err(StoreError::unavailable(reason.clone()))
            }
            None => {
                debug!("Deferred fetch resolved");
                Ok(self.store.clone())
            }
        }
    }

    fn name(&self) -> &'static str {
        "deferred"
    }
}

/// Source that reads a JSON snapshot from disk on every fetch.
///
/// The file is validated before it is handed out, so a snapshot with
/// dangling references surfaces as a fetch failure.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch(&self) -> StoreResult<Arc<Store>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            warn!(error = %e, "Failed to read snapshot file");
            StoreError::io(format!("{}: {}", self.path.display(), e))
        })?;

        let store: Store = serde_json::from_slice(&bytes).map_err(|e| {
            warn!(error = %e, "Failed to decode snapshot file");
            StoreError::deserialization(e.to_string())
        })?;

        store.validate()?;

        info!(
            reports = store.report_count(),
            documents = store.document_count(),
            pages = store.page_count(),
            "Snapshot loaded from file"
        );

        Ok(Arc::new(store))
    }

    fn name(&self) -> &'static str {
        "json-file"
    }
}

/// Pick a data source for `config`.
///
/// A snapshot path wins over everything else; otherwise `fallback` is served
/// through a [`DeferredSource`] honoring the configured latency and
/// reachability.
pub fn build_source(config: &SourceConfig, fallback: Store) -> Arc<dyn DataSource> {
    if let Some(path) = &config.snapshot_path {
        info!(path = %path.display(), "Using JSON snapshot source");
        return Arc::new(JsonFileSource::new(path.clone()));
    }

    if config.unreachable {
        info!("Using unreachable deferred source");
        return Arc::new(DeferredSource::unreachable(
            config.latency(),
            "remote store is unreachable",
        ));
    }

    info!(latency_ms = config.latency_ms, "Using deferred source");
    Arc::new(DeferredSource::new(fallback, config.latency()))
}
