use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool and bring the schema to the latest migration. Any failure
/// here is fatal to startup.
pub async fn prepare_database(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    if let Some(dir) = cfg.sqlite_data_dir() {
        common::env::ensure_data_dir(&dir).await?;
    }
    let db = models::db::connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!(event = "migrations_applied", "database schema is up to date");
    Ok(db)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: migrate, build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = prepare_database(&cfg.database).await?;

    let app: Router = routes::build_router(AppState { db }, build_cors());

    let bind = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind.as_str())
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("cannot bind {bind}: {e}")))?;
    let addr: SocketAddr = listener.local_addr().map_err(|e| StartupError::Any(e.into()))?;
    info!(%addr, "glossary server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Any(e.into()))?;
    Ok(())
}
