use tracing::info;

use crate::modules::query::{AsyncSearcher, QueryConfig, QueryResult, page_map, search_store};
use crate::modules::store::{SourceConfig, build_source, sample_store};

/// Queries replayed through the asynchronous searcher.
pub const ASYNC_QUERIES: [&str; 4] = ["Sample", "a", "Lorem", "erat"];

/// Load configuration, then run the page count and search queries over the
/// sample dataset, logging every result.
pub async fn run() -> QueryResult<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let source_config = SourceConfig::from_env();
    let query_config = QueryConfig::from_env();
    info!(
        source = ?source_config,
        query = ?query_config,
        "Configuration loaded. Running report queries..."
    );

    run_queries(source_config, query_config).await
}

/// Run the report queries with explicit configuration.
///
/// Synchronous queries always use the built-in sample data; asynchronous
/// ones go through the source selected by `source_config`.
pub async fn run_queries(
    source_config: SourceConfig,
    query_config: QueryConfig,
) -> QueryResult<()> {
    let store = sample_store();

    let counts = page_map(&store)?;
    info!(
        counts = ?counts.as_map(),
        total_pages = counts.total_pages(),
        "PageMap"
    );

    let ids = search_store(&store, "erat")?;
    info!(query = "erat", results = ?ids, "Search");

    let searcher = AsyncSearcher::new(build_source(&source_config, store), query_config);

    for query in ASYNC_QUERIES {
        let outcome = searcher.search_with_fallback(query).await;
        info!(
            query = %query,
            source = searcher.source_name(),
            failed = outcome.is_failure(),
            results = %outcome,
            "Async search"
        );
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}
