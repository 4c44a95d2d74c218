#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use reports::modules::store::{
        DataSource, JsonFileSource, SourceConfig, Store, StoreError, build_source, sample_store,
    };
    use tempfile::TempDir;

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/store.json")
    }

    fn write_snapshot(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("store.json");
        std::fs::write(&path, contents).expect("Failed to write snapshot");
        path
    }

    #[tokio::test]
    async fn test_fixture_matches_sample_store() {
        let source = JsonFileSource::new(fixture_path());

        let store = source.fetch().await.unwrap();
        assert_eq!(*store, sample_store());
    }

    #[tokio::test]
    async fn test_roundtrip_through_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let json = serde_json::to_string_pretty(&sample_store()).unwrap();
        let path = write_snapshot(&temp, &json);

        let store = JsonFileSource::new(&path).fetch().await.unwrap();
        assert_eq!(store.report_count(), 2);
        assert_eq!(store.page(72).unwrap().footnote.as_deref(), Some("Aliquam erat..."));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let source = JsonFileSource::new(temp.path().join("absent.json"));

        match source.fetch().await {
            Err(StoreError::Io(msg)) => assert!(msg.contains("absent.json")),
            other => panic!("Expected io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_deserialization_error() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = write_snapshot(&temp, "{\"report\": [1, 2, 3]}");

        let err = JsonFileSource::new(path).fetch().await.unwrap_err();
        assert_eq!(err.error_code(), "DESERIALIZATION_ERROR");
    }

    #[tokio::test]
    async fn test_dangling_reference_rejected_on_load() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = write_snapshot(
            &temp,
            r#"{
                "report": { "1": { "id": 1, "title": "Only" } },
                "document": { "2": { "id": 2, "report_id": 9, "name": null, "filetype": "pdf" } }
            }"#,
        );

        let err = JsonFileSource::new(path).fetch().await.unwrap_err();
        assert!(err.is_integrity_violation());
        assert!(matches!(
            err,
            StoreError::DanglingReport {
                document_id: 2,
                report_id: 9
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_collections_default_to_empty() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = write_snapshot(&temp, r#"{ "report": { "3": { "id": 3 } } }"#);

        let store = JsonFileSource::new(path).fetch().await.unwrap();
        assert_eq!(store.report_count(), 1);
        assert_eq!(store.document_count(), 0);
        assert_eq!(store.page_count(), 0);
        assert!(store.report(3).unwrap().title.is_none());
    }

    #[tokio::test]
    async fn test_config_snapshot_path_selects_file_source() {
        let config = SourceConfig::new().with_snapshot_path(fixture_path());
        let source = build_source(&config, Store::new());

        assert_eq!(source.name(), "json-file");
        assert_eq!(source.fetch().await.unwrap().page_count(), 3);
    }
}
