//! # masa API Server
//!
//! HTTP JSON API for the masa daily-operations tracker.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tracing init ──► config load ──► SQLite pool + migrations             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  axum router ──► serve on 0.0.0.0:PORT ──► graceful shutdown           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use masa_api::{ApiConfig, AppState};
use masa_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting masa API server...");

    // Load configuration (fails fast when RECONCILE_STRATEGY is unset)
    let config = ApiConfig::load()?;
    info!(
        port = config.port,
        db = %config.database_path,
        strategy = ?config.strategy,
        unit_cost_cents = config.unit_cost_cents,
        "Configuration loaded"
    );

    // Connect to database and run migrations
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Connected to SQLite, migrations complete");

    let state = AppState {
        db,
        policy: config.policy(),
    };

    let app = masa_api::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
