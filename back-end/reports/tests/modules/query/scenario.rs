//! Queries over the fixed sample dataset.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use reports::modules::query::{page_map, search_store};
    use reports::modules::store::sample_store;

    #[test]
    fn test_page_map() {
        let map = page_map(&sample_store()).unwrap();
        assert_eq!(map.into_inner(), BTreeMap::from([(4, 0), (21, 3)]));
    }

    #[test]
    fn test_search_footnote() {
        assert_eq!(search_store(&sample_store(), "erat").unwrap(), vec![21]);
    }

    #[test]
    fn test_search_title_before_document() {
        // Report 4 matches by title and by document 8's name; listed once.
        assert_eq!(search_store(&sample_store(), "Sample").unwrap(), vec![4]);
    }

    #[test]
    fn test_search_document_name_only() {
        assert_eq!(search_store(&sample_store(), "Quarterly").unwrap(), vec![21]);
        assert_eq!(search_store(&sample_store(), "Report").unwrap(), vec![4, 21]);
    }

    #[test]
    fn test_search_page_body() {
        assert_eq!(search_store(&sample_store(), "dui").unwrap(), vec![21]);
    }

    #[test]
    fn test_search_filetype_is_not_searched() {
        assert!(search_store(&sample_store(), "pdf").unwrap().is_empty());
        assert!(search_store(&sample_store(), "txt").unwrap().is_empty());
    }

    #[test]
    fn test_search_empty_query() {
        assert_eq!(search_store(&sample_store(), "").unwrap(), vec![4, 21]);
    }

    #[test]
    fn test_search_is_repeatable() {
        let store = sample_store();
        let first = search_store(&store, "a").unwrap();
        let second = search_store(&store, "a").unwrap();

        assert_eq!(first, second);
    }
}
