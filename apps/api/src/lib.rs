//! # masa API
//!
//! HTTP JSON API for the masa daily-operations tracker.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /health                    liveness + database ping             │
//! │                                                                         │
//! │  GET    /production?date=          day's ledger (all when omitted)      │
//! │  POST   /production                absolute set  → reconciles           │
//! │  POST   /production/increment      relative bump → reconciles           │
//! │                                                                         │
//! │  GET    /products                  catalog, name ASC                    │
//! │  POST   /products                  create                               │
//! │  PUT    /products/{id}             edit                                 │
//! │  DELETE /products/{id}             remove                               │
//! │                                                                         │
//! │  GET    /sales?date=               day's sales, product joined          │
//! │  POST   /sales                     record (timestamped now)             │
//! │  DELETE /sales/{id}                remove                               │
//! │                                                                         │
//! │  GET    /cash-register?date=       day's register or null               │
//! │  POST   /cash-register             create corte                         │
//! │  PUT    /cash-register/{id}        overwrite corte                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Contract
//! Validation failures are 400, everything from the storage layer is 500
//! (not-found on update/delete included), both as `{"error": "<mensaje>"}`
//! with the user-facing message in Spanish. Underlying errors are logged
//! via `tracing`, never surfaced.

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use masa_core::ReconcilePolicy;
use masa_db::Database;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state: the database handle plus the reconciliation
/// policy selected at configuration time.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub policy: ReconcilePolicy,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::get_health))
        .route(
            "/production",
            get(routes::production::list_production).post(routes::production::set_production),
        )
        .route(
            "/production/increment",
            post(routes::production::increment_production),
        )
        .route(
            "/products",
            get(routes::products::list_products).post(routes::products::create_product),
        )
        .route(
            "/products/:id",
            put(routes::products::update_product).delete(routes::products::delete_product),
        )
        .route(
            "/sales",
            get(routes::sales::list_sales).post(routes::sales::create_sale),
        )
        .route("/sales/:id", delete(routes::sales::delete_sale))
        .route(
            "/cash-register",
            get(routes::cash_register::get_register).post(routes::cash_register::create_register),
        )
        .route("/cash-register/:id", put(routes::cash_register::update_register))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
