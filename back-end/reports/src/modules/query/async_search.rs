//! Queries against a snapshot that has to be fetched first.
//!
//! [`AsyncSearcher`] awaits its [`DataSource`], then hands the snapshot to the
//! synchronous query functions. A failed fetch becomes exactly one
//! [`QueryError::SearchFailed`]; nothing is retried and no partial result is
//! returned.

use std::fmt;
use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use super::config::{FailureStrategy, QueryConfig};
use super::error::{QueryError, QueryResult, SEARCH_FAILURE_MESSAGE};
use super::page_map::{PageMap, page_map};
use super::search::search_store;
use crate::modules::store::{DataSource, ReportId, Store, StoreError, StoreResult};

/// Result of [`AsyncSearcher::search_with_fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Matching report ids in discovery order.
    Matches(Vec<ReportId>),
    /// The search could not run. Carries the human-readable reason.
    Failed(String),
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Matching ids, or `None` for a failed search.
    pub fn matches(&self) -> Option<&[ReportId]> {
        match self {
            Self::Matches(ids) => Some(ids.as_slice()),
            Self::Failed(_) => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matches(ids) => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "{}", ids.join(","))
            }
            Self::Failed(_) => f.write_str(SEARCH_FAILURE_MESSAGE),
        }
    }
}

/// Runs report queries over a fetched snapshot.
///
/// # Example
///
/// ```ignore
/// let source = Arc::new(DeferredSource::new(sample_store(), Duration::from_millis(25)));
/// let searcher = AsyncSearcher::new(source, QueryConfig::default());
///
/// let ids = searcher.search("erat").await?;
/// ```
pub struct AsyncSearcher {
    source: Arc<dyn DataSource>,
    config: QueryConfig,
}

impl AsyncSearcher {
    /// Create a searcher over `source`.
    pub fn new(source: Arc<dyn DataSource>, config: QueryConfig) -> Self {
        Self { source, config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Name of the underlying data source.
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch the snapshot, bounded by the configured timeout if any.
    async fn fetch(&self) -> StoreResult<Arc<Store>> {
        match self.config.fetch_timeout() {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch())
                .await
                .map_err(|_| StoreError::Timeout(limit))?,
            None => self.source.fetch().await,
        }
    }

    /// Search the fetched snapshot for `query`.
    ///
    /// Matching semantics are those of [`search_store`].
    ///
    /// # Errors
    ///
    /// - [`QueryError::SearchFailed`] if the snapshot could not be fetched.
    /// - Under [`FailureStrategy::CallSite`], integrity violations found
    ///   while searching surface as [`QueryError::Integrity`]; under
    ///   [`FailureStrategy::Enclosing`] they are reported as
    ///   [`QueryError::SearchFailed`] too.
    #[instrument(skip(self), fields(source = self.source.name(), strategy = %self.config.failure_strategy))]
    pub async fn search(&self, query: &str) -> QueryResult<Vec<ReportId>> {
        let result = match self.config.failure_strategy {
            FailureStrategy::CallSite => self.search_catching_fetch(query).await,
            FailureStrategy::Enclosing => self.search_catching_all(query).await,
        };

        if let Ok(ids) = &result {
            info!(query = %query, matches = ids.len(), "Async search complete");
        }

        result
    }

    async fn search_catching_fetch(&self, query: &str) -> QueryResult<Vec<ReportId>> {
        let store = self.fetch().await.map_err(|e| {
            warn!(error = %e, "Fetch failed, search aborted");
            QueryError::search_failed(e.to_string())
        })?;

        Ok(search_store(&store, query)?)
    }

    async fn search_catching_all(&self, query: &str) -> QueryResult<Vec<ReportId>> {
        let attempt: StoreResult<Vec<ReportId>> = async {
            let store = self.fetch().await?;
            search_store(&store, query)
        }
        .await;

        attempt.map_err(|e| {
            warn!(error = %e, code = e.error_code(), "Search failed");
            QueryError::search_failed(e.to_string())
        })
    }

    /// Search without ever returning an error.
    ///
    /// Failures are logged and reported as [`SearchOutcome::Failed`].
    pub async fn search_with_fallback(&self, query: &str) -> SearchOutcome {
        match self.search(query).await {
            Ok(ids) => SearchOutcome::Matches(ids),
            Err(e) => {
                error!(query = %query, error = %e, "Search failed, reporting failure outcome");
                SearchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Count pages per report in the fetched snapshot.
    ///
    /// # Errors
    ///
    /// [`QueryError::FetchFailed`] if the snapshot could not be fetched,
    /// [`QueryError::Integrity`] if it contains dangling references.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn page_map(&self) -> QueryResult<PageMap> {
        let store = self.fetch().await.map_err(|e| {
            warn!(error = %e, "Fetch failed, page map aborted");
            QueryError::fetch_failed(e.to_string())
        })?;

        Ok(page_map(&store)?)
    }
}
