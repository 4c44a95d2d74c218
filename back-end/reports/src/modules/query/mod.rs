//! Report queries over a store snapshot.
//!
//! # Architecture
//!
//! ```text
//! DataSource (memory / deferred / json-file)
//!         ↓ fetch
//!   AsyncSearcher ──► search_store (reports → documents → pages)
//!         │
//!         └────────► page_map (pages → documents → reports, zero-filled)
//! ```
//!
//! `page_map` and `search_store` are synchronous and operate on a snapshot
//! the caller already holds; `AsyncSearcher` obtains the snapshot first.

pub mod async_search;
pub mod config;
pub mod error;
pub mod page_map;
pub mod search;

pub use async_search::{AsyncSearcher, SearchOutcome};
pub use config::{FailureStrategy, QueryConfig};
pub use error::{QueryError, QueryResult, SEARCH_FAILURE_MESSAGE};
pub use page_map::{PageMap, page_map};
pub use search::search_store;
