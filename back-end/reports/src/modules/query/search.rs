//! Substring search across reports and everything they own.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::modules::store::{ReportId, Store, StoreResult};

/// Report ids in first-discovery order, without repeats.
#[derive(Debug, Default)]
struct DiscoveredReports {
    order: Vec<ReportId>,
    seen: HashSet<ReportId>,
}

impl DiscoveredReports {
    /// Record `id` unless it was already found. Returns true if it was new.
    fn discover(&mut self, id: ReportId) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    fn into_ids(self) -> Vec<ReportId> {
        self.order
    }
}

/// Literal, case-sensitive containment. Absent text never matches.
fn field_contains(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|text| text.contains(query))
}

/// Find every report whose title, document names, or page text contain
/// `query`.
///
/// Runs three passes in fixed order: report titles, then document names,
/// then page bodies and footnotes. Each matching report id is kept once,
/// at the position where it was first found; within a pass records are
/// visited in ascending id order.
///
/// The empty query is contained in every present field, so it returns each
/// report that has at least one non-null searchable field of its own or
/// below it.
///
/// # Errors
///
/// Only fails when a matching document or page points at a missing owner.
pub fn search_store(store: &Store, query: &str) -> StoreResult<Vec<ReportId>> {
    let mut found = DiscoveredReports::default();

    for report in store.reports() {
        if field_contains(report.title.as_deref(), query) && found.discover(report.id) {
            trace!(report_id = report.id, pass = "report", "Report discovered");
        }
    }

    for document in store.documents() {
        if field_contains(document.name.as_deref(), query) {
            let report_id = store.report_id_of_document(document)?;
            if found.discover(report_id) {
                trace!(
                    report_id,
                    document_id = document.id,
                    pass = "document",
                    "Report discovered"
                );
            }
        }
    }

    for page in store.pages() {
        if field_contains(page.body.as_deref(), query)
            || field_contains(page.footnote.as_deref(), query)
        {
            let report_id = store.report_id_of_page(page)?;
            if found.discover(report_id) {
                trace!(
                    report_id,
                    page_id = page.id,
                    pass = "page",
                    "Report discovered"
                );
            }
        }
    }

    let ids = found.into_ids();
    debug!(query = %query, matches = ids.len(), "Store search complete");

    Ok(ids)
}
