//! The fixed sample dataset used by the demo runner and tests.

use std::collections::BTreeMap;

use super::models::{Document, Page, Report};
use super::snapshot::Store;

/// Two reports, three documents and three pages.
///
/// Report 4 owns one document and no pages; report 21 owns two documents
/// holding all three pages.
pub fn sample_store() -> Store {
    let reports = [
        Report::new(4).with_title("Sample Report"),
        Report::new(21).with_title("Portfolio Summary 2020"),
    ];

    let documents = [
        Document::new(8, 4, "txt").with_name("Sample Document"),
        Document::new(34, 21, "pdf").with_name("Quarterly Report"),
        Document::new(87, 21, "pdf").with_name("Performance Summary"),
    ];

    let pages = [
        Page::new(19, 34).with_body("Lorem ipsum..."),
        Page::new(72, 87)
            .with_body("Ut aliquet...")
            .with_footnote("Aliquam erat..."),
        Page::new(205, 34).with_body("Donec a dui et..."),
    ];

    Store::from_maps(
        reports.into_iter().map(|r| (r.id, r)).collect::<BTreeMap<_, _>>(),
        documents.into_iter().map(|d| (d.id, d)).collect(),
        pages.into_iter().map(|p| (p.id, p)).collect(),
    )
}
