use rusty_catalog::{
    adapters::postgres::PostgresBookCatalog,
    api::{handlers::AppState, router::create_router},
    application::catalog::CatalogDependencies,
    config::{ServerConfig, StoreConfig},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store_config = StoreConfig::from_env().expect("Invalid store configuration");
    tracing::info!(config = ?store_config, "Catalog store configured");

    // 接続は操作ごとに確立するため、ここではまだ接続しない
    let book_catalog = Arc::new(PostgresBookCatalog::new(&store_config));

    let catalog_deps = CatalogDependencies { book_catalog };

    // Create application state
    let app_state = Arc::new(AppState { catalog_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", server_config.bind_addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
