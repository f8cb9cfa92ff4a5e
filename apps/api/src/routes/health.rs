//! # Health Route
//!
//! Liveness plus a database ping, for process supervision.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

/// `GET /health` response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
}

/// `GET /health`
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await;

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use masa_core::{Money, ReconcilePolicy, ReconcileStrategy, DEFAULT_UNIT_COST_CENTS};
    use masa_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_health_reports_ok() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = AppState {
            db,
            policy: ReconcilePolicy::new(
                ReconcileStrategy::Production,
                Money::from_cents(DEFAULT_UNIT_COST_CENTS),
            ),
        };

        let Json(health) = get_health(State(state)).await;
        assert_eq!(health.status, "ok");
        assert!(health.database);
    }
}
