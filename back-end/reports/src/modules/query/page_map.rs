//! Page counts per report.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::modules::store::{ReportId, Store, StoreResult};

/// Page count for every report in a snapshot.
///
/// Holds exactly one entry per report, including reports with no pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageMap(BTreeMap<ReportId, usize>);

impl PageMap {
    /// Page count for `report_id`, if the report exists.
    pub fn get(&self, report_id: ReportId) -> Option<usize> {
        self.0.get(&report_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReportId, usize)> + '_ {
        self.0.iter().map(|(&id, &count)| (id, count))
    }

    /// Sum of all counts.
    pub fn total_pages(&self) -> usize {
        self.0.values().sum()
    }

    pub fn as_map(&self) -> &BTreeMap<ReportId, usize> {
        &self.0
    }

    pub fn into_inner(self) -> BTreeMap<ReportId, usize> {
        self.0
    }
}

impl From<PageMap> for BTreeMap<ReportId, usize> {
    fn from(map: PageMap) -> Self {
        map.0
    }
}

/// Count pages per report.
///
/// Walks the pages once, resolving each to its report through its
/// document, then gives every report that received no page a count of 0.
///
/// # Errors
///
/// Returns the resolution error if a page or its document points at a
/// missing owner. Counts are never produced for a partially resolved
/// snapshot.
pub fn page_map(store: &Store) -> StoreResult<PageMap> {
    let mut counts: BTreeMap<ReportId, usize> = BTreeMap::new();

    for page in store.pages() {
        let report_id = store.report_id_of_page(page)?;
        *counts.entry(report_id).or_insert(0) += 1;
    }

    let with_pages = counts.len();

    for report_id in store.report_ids() {
        counts.entry(report_id).or_insert(0);
    }

    debug!(
        reports = counts.len(),
        reports_with_pages = with_pages,
        pages = store.page_count(),
        "Page map built"
    );

    Ok(PageMap(counts))
}
