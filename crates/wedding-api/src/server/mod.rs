//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use wedding_common::{AppConfig, AppError};
use wedding_db::{create_pool, run_migrations, MemoryStore};
use wedding_service::{ServiceContext, ServiceContextBuilder};

use crate::middleware::{apply_base_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let is_production = state.is_production();

    let api = apply_middleware_with_config(
        create_router(),
        &config.http_rate_limit,
        &config.cors,
        is_production,
    );
    let health = apply_base_middleware(health_routes(), &config.cors, is_production);

    api.merge(health).with_state(state)
}

/// Connect the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let builder = if config.database.is_in_memory() {
        info!("Using in-memory store; data is lost on restart");
        ServiceContext::builder().memory_store(MemoryStore::new())
    } else {
        info!("Connecting to PostgreSQL...");
        let db_config = wedding_db::DatabaseConfig::from(&config.database);
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;
        info!("PostgreSQL connection established");

        ServiceContext::builder().postgres(pool)
    };

    create_app_state_with(config, builder)
}

/// Create AppState from a builder whose store is already wired
///
/// Settings from `config` are applied on top of whatever the builder holds.
pub fn create_app_state_with(
    config: AppConfig,
    builder: ServiceContextBuilder,
) -> Result<AppState, AppError> {
    let service_context = builder
        .config(&config)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
