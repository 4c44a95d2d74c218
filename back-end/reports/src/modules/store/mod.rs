//! In-memory report store.
//!
//! Holds the three related collections (reports, documents, pages) as an
//! immutable snapshot and the data sources that hand such snapshots out.
//!
//! # Layout
//!
//! ```text
//! Report 1──* Document 1──* Page
//! ```
//!
//! Collections are keyed by id and iterate in ascending id order.

pub mod config;
pub mod error;
pub mod models;
pub mod sample;
pub mod snapshot;
pub mod source;

pub use config::SourceConfig;
pub use error::{StoreError, StoreResult};
pub use models::{Document, DocumentId, Page, PageId, Report, ReportId};
pub use sample::sample_store;
pub use snapshot::Store;
pub use source::{DataSource, DeferredSource, InMemorySource, JsonFileSource, build_source};
