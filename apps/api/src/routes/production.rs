//! # Production Routes
//!
//! The production ledger endpoints. Both mutations reconcile the day's
//! cash register inside the repository transaction, so a register refresh
//! failure fails the whole request the same way the mutation itself
//! would.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use masa_core::{validation, Variety};

use crate::dto::{
    DateQuery, IncrementProductionRequest, ProductionEntryDto, SetProductionRequest,
};
use crate::error::ApiError;
use crate::routes::{parse_optional_day, resolve_day};
use crate::AppState;

/// `GET /production?date=YYYY-MM-DD`
///
/// Lists the day's ledger (the whole ledger when `date` is omitted),
/// variety ascending. An empty day is an empty array.
pub async fn list_production(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<ProductionEntryDto>>, ApiError> {
    let day = parse_optional_day(query.date.as_deref())?;

    let entries = state
        .db
        .production()
        .list_by_day(day)
        .await
        .map_err(|e| ApiError::storage("Error al obtener producción", e))?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// `POST /production`
///
/// Sets the absolute quantity for (variety, day). 201 with the resulting
/// row; the existing row is overwritten when present.
pub async fn set_production(
    State(state): State<AppState>,
    Json(body): Json<SetProductionRequest>,
) -> Result<(StatusCode, Json<ProductionEntryDto>), ApiError> {
    let variety: Variety = body
        .variety
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|_| ApiError::validation("Variedad inválida"))?;

    let quantity = validation::parse_quantity("quantity", body.quantity.as_ref())
        .map_err(|_| ApiError::validation("Cantidad inválida"))?;

    let day = resolve_day(body.date.as_deref())?;

    debug!(%variety, %day, quantity, "set_production");

    let entry = state
        .db
        .production()
        .set_quantity(variety, day, quantity, &state.policy)
        .await
        .map_err(|e| ApiError::storage("Error al guardar producción", e))?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// `POST /production/increment`
///
/// Applies a signed increment to (variety, day), clamped at zero. 200
/// with the resulting row.
pub async fn increment_production(
    State(state): State<AppState>,
    Json(body): Json<IncrementProductionRequest>,
) -> Result<Json<ProductionEntryDto>, ApiError> {
    let variety: Variety = body
        .variety
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|_| ApiError::validation("Variedad inválida"))?;

    let delta = validation::parse_increment("increment", body.increment.as_ref())
        .map_err(|_| ApiError::validation("Incremento inválido"))?;

    let day = resolve_day(body.date.as_deref())?;

    debug!(%variety, %day, delta, "increment_production");

    let entry = state
        .db
        .production()
        .increment_quantity(variety, day, delta, &state.policy)
        .await
        .map_err(|e| ApiError::storage("Error al incrementar producción", e))?;

    Ok(Json(entry.into()))
}

// =============================================================================
// Unit Tests
// =============================================================================
