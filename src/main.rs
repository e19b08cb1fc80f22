use clap::Parser;
use record_search::build_router;
use record_search::config::ServerConfig;
use record_search::search::engine::SearchConfig;
use record_search::storage::memory::RecordStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Record store (read-only after this point):
    tracing::info!("Loading database from {}", config.db.display());
    let store = Arc::new(RecordStore::load(&config.db).await?);
    tracing::info!("Collections: {:?}", store.collection_names());

    // 2. Search defaults:
    let search_config = Arc::new(SearchConfig::default());
    if store.snapshot(&search_config.collection).is_none() {
        tracing::warn!(
            "Collection '{}' is missing; /search will fail until it exists",
            search_config.collection
        );
    }

    // 3. HTTP Router:
    let app = build_router(store, search_config);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
