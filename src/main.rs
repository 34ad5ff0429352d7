//! board-gateway server entry point.
//!
//! Starts the Axum HTTP server with the board REST endpoints.

use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use board_gateway::api;
use board_gateway::app_state::AppState;
use board_gateway::config::BoardConfig;
use board_gateway::service::BoardService;
use board_gateway::store::{BoardStore, MemoryBoardStore, PostgresBoardStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = BoardConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    tracing::info!(addr = %config.listen_addr, "starting board-gateway");

    // Build storage layer
    let store: Arc<dyn BoardStore> = if config.persistence_enabled {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;

        let store = PostgresBoardStore::new(pool);
        store.migrate().await?;
        tracing::info!("postgres store ready");
        Arc::new(store)
    } else {
        tracing::warn!("persistence disabled; boards are held in memory only");
        Arc::new(MemoryBoardStore::new())
    };

    // Build service layer
    let board_service = Arc::new(BoardService::new(store));

    // Build application state
    let app_state = AppState {
        board_service,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
