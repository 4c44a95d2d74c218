//! Property-based tests for page counts and store search.
//!
//! Generated stores are always referentially consistent; every property is
//! checked against a brute-force oracle.

#![cfg(test)]

use std::collections::HashSet;

use proptest::prelude::*;
use reports::modules::query::{page_map, search_store};
use reports::modules::store::{Document, Page, Report, ReportId, Store};

// ============================================================================
// Generators
// ============================================================================

fn report_id(index: usize) -> ReportId {
    (index as u64) * 7 + 3
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[abc]{0,5}")
}

fn arb_store() -> impl Strategy<Value = Store> {
    (1usize..6, 0usize..8, 0usize..12)
        .prop_flat_map(|(n_reports, n_documents, n_pages)| {
            (
                prop::collection::vec(arb_text(), n_reports),
                prop::collection::vec((0..n_reports, arb_text()), n_documents),
                prop::collection::vec(
                    (any::<prop::sample::Index>(), arb_text(), arb_text()),
                    n_pages,
                ),
            )
        })
        .prop_map(|(titles, documents, pages)| {
            let reports = titles.into_iter().enumerate().map(|(i, title)| Report {
                id: report_id(i),
                title,
            });

            let document_ids: Vec<u64> = (0..documents.len() as u64).map(|j| 100 + j).collect();
            let documents: Vec<Document> = documents
                .into_iter()
                .enumerate()
                .map(|(j, (owner, name))| Document {
                    id: 100 + j as u64,
                    report_id: report_id(owner),
                    name,
                    filetype: "pdf".to_string(),
                })
                .collect();

            let pages: Vec<Page> = if document_ids.is_empty() {
                Vec::new()
            } else {
                pages
                    .into_iter()
                    .enumerate()
                    .map(|(k, (doc, body, footnote))| Page {
                        id: 1000 + k as u64,
                        document_id: document_ids[doc.index(document_ids.len())],
                        body,
                        footnote,
                    })
                    .collect()
            };

            Store::from_records(reports, documents, pages).expect("Generated ids are unique")
        })
}

// ============================================================================
// Oracles
// ============================================================================

fn contains(field: &Option<String>, query: &str) -> bool {
    field.as_ref().is_some_and(|text| text.contains(query))
}

fn owner_of_page(store: &Store, page: &Page) -> ReportId {
    store.document(page.document_id).unwrap().report_id
}

/// Whether anything reachable from `report` contains `query`.
fn report_matches(store: &Store, report: &Report, query: &str) -> bool {
    contains(&report.title, query)
        || store
            .documents()
            .any(|d| d.report_id == report.id && contains(&d.name, query))
        || store.pages().any(|p| {
            owner_of_page(store, p) == report.id
                && (contains(&p.body, query) || contains(&p.footnote, query))
        })
}

/// Three passes with a linear membership check per candidate.
fn naive_search(store: &Store, query: &str) -> Vec<ReportId> {
    let mut found: Vec<ReportId> = Vec::new();
    let mut push = |id: ReportId| {
        if !found.contains(&id) {
            found.push(id);
        }
    };

    for report in store.reports() {
        if contains(&report.title, query) {
            push(report.id);
        }
    }
    for document in store.documents() {
        if contains(&document.name, query) {
            push(document.report_id);
        }
    }
    for page in store.pages() {
        if contains(&page.body, query) || contains(&page.footnote, query) {
            push(owner_of_page(store, page));
        }
    }

    found
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// One entry per report and the counts add up to the page total
    #[test]
    fn page_map_covers_every_report(store in arb_store()) {
        let map = page_map(&store).unwrap();

        prop_assert_eq!(map.len(), store.report_count());
        prop_assert_eq!(map.total_pages(), store.page_count());

        for report in store.reports() {
            let expected = store
                .pages()
                .filter(|p| owner_of_page(&store, p) == report.id)
                .count();
            prop_assert_eq!(map.get(report.id), Some(expected));
        }
    }

    /// Search results never repeat an id
    #[test]
    fn search_has_no_duplicates(store in arb_store(), query in "[abc]{0,2}") {
        let ids = search_store(&store, &query).unwrap();
        let unique: HashSet<_> = ids.iter().collect();

        prop_assert_eq!(unique.len(), ids.len());
    }

    /// Exactly the reports with a matching field somewhere are returned
    #[test]
    fn search_is_sound_and_complete(store in arb_store(), query in "[abc]{0,2}") {
        let ids: HashSet<ReportId> = search_store(&store, &query).unwrap().into_iter().collect();
        let expected: HashSet<ReportId> = store
            .reports()
            .filter(|r| report_matches(&store, r, &query))
            .map(|r| r.id)
            .collect();

        prop_assert_eq!(ids, expected);
    }

    /// Order follows first discovery across the three passes
    #[test]
    fn search_preserves_discovery_order(store in arb_store(), query in "[abc]{0,2}") {
        prop_assert_eq!(search_store(&store, &query).unwrap(), naive_search(&store, &query));
    }
}
