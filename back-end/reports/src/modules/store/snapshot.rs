//! Immutable snapshot of the three entity collections.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::models::{Document, DocumentId, Page, PageId, Report, ReportId};

/// Reports, documents and pages keyed by id.
///
/// The serialized form uses the singular collection names of the
/// upstream data module (`report`, `document`, `page`), with ids as
/// string object keys.
///
/// Iteration is always in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "report", default)]
    reports: BTreeMap<ReportId, Report>,

    #[serde(rename = "document", default)]
    documents: BTreeMap<DocumentId, Document>,

    #[serde(rename = "page", default)]
    pages: BTreeMap<PageId, Page>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from id-keyed maps.
    ///
    /// Keys are taken as given; call [`Store::validate`] to check them
    /// against the records.
    pub fn from_maps(
        reports: BTreeMap<ReportId, Report>,
        documents: BTreeMap<DocumentId, Document>,
        pages: BTreeMap<PageId, Page>,
    ) -> Self {
        Self {
            reports,
            documents,
            pages,
        }
    }

    /// Build a store from record lists, keying each record by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two records of the same kind
    /// share an id.
    pub fn from_records(
        reports: impl IntoIterator<Item = Report>,
        documents: impl IntoIterator<Item = Document>,
        pages: impl IntoIterator<Item = Page>,
    ) -> StoreResult<Self> {
        Ok(Self {
            reports: keyed("report", reports, |r| r.id)?,
            documents: keyed("document", documents, |d| d.id)?,
            pages: keyed("page", pages, |p| p.id)?,
        })
    }

    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.reports.values()
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    pub fn report(&self, id: ReportId) -> Option<&Report> {
        self.reports.get(&id)
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id)
    }

    pub fn report_ids(&self) -> impl Iterator<Item = ReportId> + '_ {
        self.reports.keys().copied()
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Resolve the report owning `document`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DanglingReport`] if the report is missing.
    pub fn report_id_of_document(&self, document: &Document) -> StoreResult<ReportId> {
        if self.reports.contains_key(&document.report_id) {
            Ok(document.report_id)
        } else {
            Err(StoreError::DanglingReport {
                document_id: document.id,
                report_id: document.report_id,
            })
        }
    }

    /// Resolve the report owning `page` through its document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DanglingDocument`] or
    /// [`StoreError::DanglingReport`] if either hop is missing.
    pub fn report_id_of_page(&self, page: &Page) -> StoreResult<ReportId> {
        let document = self
            .documents
            .get(&page.document_id)
            .ok_or(StoreError::DanglingDocument {
                page_id: page.id,
                document_id: page.document_id,
            })?;

        self.report_id_of_document(document)
    }

    /// Check keys and foreign keys of the whole snapshot.
    ///
    /// Stops at the first violation found, scanning reports, then
    /// documents, then pages.
    pub fn validate(&self) -> StoreResult<()> {
        for (&key, report) in &self.reports {
            check_key("report", key, report.id)?;
        }

        for (&key, document) in &self.documents {
            check_key("document", key, document.id)?;
            self.report_id_of_document(document)?;
        }

        for (&key, page) in &self.pages {
            check_key("page", key, page.id)?;
            self.report_id_of_page(page)?;
        }

        debug!(
            reports = self.reports.len(),
            documents = self.documents.len(),
            pages = self.pages.len(),
            "Store snapshot validated"
        );

        Ok(())
    }
}

fn keyed<T>(
    kind: &'static str,
    records: impl IntoIterator<Item = T>,
    id_of: impl Fn(&T) -> u64,
) -> StoreResult<BTreeMap<u64, T>> {
    let mut map = BTreeMap::new();

    for record in records {
        match map.entry(id_of(&record)) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(slot) => {
                return Err(StoreError::DuplicateId {
                    kind,
                    id: *slot.key(),
                });
            }
        }
    }

    Ok(map)
}

fn check_key(kind: &'static str, key: u64, id: u64) -> StoreResult<()> {
    if key == id {
        Ok(())
    } else {
        Err(StoreError::KeyMismatch { kind, key, id })
    }
}
