//! # Cash Register Routes
//!
//! The corte de caja workflow: fetch the day's register (null before the
//! corte is performed), create it with operator-entered actuals, and
//! overwrite it in place. Creation is the only path that brings a
//! register into existence - reconciliation never does.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use masa_core::validation;
use masa_core::Money;

use crate::dto::{CashRegisterDto, CashRegisterRequest, DateQuery};
use crate::error::ApiError;
use crate::routes::resolve_day;
use crate::AppState;

/// Validates the three required numeric fields of a register body.
/// Each may legitimately be zero.
fn parse_register_body(body: &CashRegisterRequest) -> Result<(i64, Money, Money), ApiError> {
    let invalid =
        || ApiError::validation("Producción total, monto esperado y monto real son requeridos");

    let total_production =
        validation::parse_count("totalProduction", body.total_production.as_ref())
            .map_err(|_| invalid())?;
    let expected = validation::parse_amount("expectedAmount", body.expected_amount.as_ref())
        .map_err(|_| invalid())?;
    let actual = validation::parse_amount("actualAmount", body.actual_amount.as_ref())
        .map_err(|_| invalid())?;

    Ok((total_production, expected, actual))
}

/// `GET /cash-register?date=YYYY-MM-DD`
///
/// Returns the day's register, or `null` before the corte is performed.
/// Absence is the expected steady state, not an error; the date itself
/// is required.
pub async fn get_register(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Option<CashRegisterDto>>, ApiError> {
    let date = query
        .date
        .as_deref()
        .ok_or_else(|| ApiError::validation("Fecha es requerida"))?;
    let day = resolve_day(Some(date))?;

    let register = state
        .db
        .registers()
        .find_by_day(day)
        .await
        .map_err(|e| ApiError::storage("Error al obtener corte de caja", e))?;

    Ok(Json(register.map(Into::into)))
}

/// `POST /cash-register` - perform the day's corte. 201.
///
/// The schema allows one register per day; a same-day duplicate fails
/// through the storage path.
pub async fn create_register(
    State(state): State<AppState>,
    Json(body): Json<CashRegisterRequest>,
) -> Result<(StatusCode, Json<CashRegisterDto>), ApiError> {
    let (total_production, expected, actual) = parse_register_body(&body)?;
    let day = resolve_day(body.date.as_deref())?;

    let register = state
        .db
        .registers()
        .create(day, total_production, expected, actual, body.notes)
        .await
        .map_err(|e| ApiError::storage("Error al crear corte de caja", e))?;

    Ok((StatusCode::CREATED, Json(register.into())))
}

/// `PUT /cash-register/{id}` - overwrite a register in place.
///
/// Does not re-trigger reconciliation; what the operator writes is what
/// stays until the next production mutation refreshes the snapshot.
pub async fn update_register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<CashRegisterRequest>,
) -> Result<Json<CashRegisterDto>, ApiError> {
    let (total_production, expected, actual) = parse_register_body(&body)?;

    let register = state
        .db
        .registers()
        .update(&id, total_production, expected, actual, body.notes)
        .await
        .map_err(|e| ApiError::storage("Error al actualizar corte de caja", e))?;

    Ok(Json(register.into()))
}

// =============================================================================
// Unit Tests
// =============================================================================
