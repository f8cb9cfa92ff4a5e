//! # Sales Routes
//!
//! The sales ledger: record, list (product joined, newest first), delete.
//! Sales are timestamped server-side; the client never sets the instant.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use masa_core::validation;

use crate::dto::{CreateSaleRequest, DateQuery, SaleDto, SuccessResponse};
use crate::error::ApiError;
use crate::routes::parse_optional_day;
use crate::AppState;

/// `GET /sales?date=YYYY-MM-DD`
///
/// Lists the day's sales (all sales when `date` is omitted) with their
/// product joined, newest first.
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<SaleDto>>, ApiError> {
    let day = parse_optional_day(query.date.as_deref())?;

    let sales = state
        .db
        .sales()
        .list(day)
        .await
        .map_err(|e| ApiError::storage("Error al obtener ventas", e))?;

    Ok(Json(sales.into_iter().map(Into::into).collect()))
}

/// `POST /sales` - record a sale. 201 with the product joined.
///
/// An unknown `productId` fails the foreign key and surfaces as a
/// storage error, matching the collapse contract.
pub async fn create_sale(
    State(state): State<AppState>,
    Json(body): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<SaleDto>), ApiError> {
    let invalid = || ApiError::validation("Producto y cantidad son requeridos");

    let product_id = body
        .product_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(invalid)?;

    let quantity = validation::parse_sale_quantity("quantity", body.quantity.as_ref())
        .map_err(|_| invalid())?;

    let sale = state
        .db
        .sales()
        .record(product_id, quantity)
        .await
        .map_err(|e| ApiError::storage("Error al crear venta", e))?;

    Ok((StatusCode::CREATED, Json(sale.into())))
}

/// `DELETE /sales/{id}`.
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .db
        .sales()
        .delete(&id)
        .await
        .map_err(|e| ApiError::storage("Error al eliminar venta", e))?;

    Ok(Json(SuccessResponse::ok()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use masa_core::{Money, RawNumber, ReconcilePolicy, ReconcileStrategy, DEFAULT_UNIT_COST_CENTS};
    use masa_db::{Database, DbConfig};

    async fn test_state() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AppState {
            db,
            policy: ReconcilePolicy::new(
                ReconcileStrategy::Production,
                Money::from_cents(DEFAULT_UNIT_COST_CENTS),
            ),
        }
    }

    async fn seed_product(state: &AppState, name: &str, cents: i64) -> String {
        state
            .db
            .products()
            .create(name, Money::from_cents(cents), None)
            .await
            .unwrap()
            .id
    }

    fn body(product_id: &str, quantity: i64) -> CreateSaleRequest {
        CreateSaleRequest {
            product_id: Some(product_id.to_string()),
            quantity: Some(RawNumber::Int(quantity)),
        }
    }

    #[tokio::test]
    async fn test_record_and_list() {
        let state = test_state().await;
        let product_id = seed_product(&state, "Tamal Rojo", 2200).await;

        let (status, Json(sale)) = create_sale(State(state.clone()), Json(body(&product_id, 3)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(sale.quantity, 3);
        assert_eq!(sale.product.name, "Tamal Rojo");
        assert_eq!(sale.product.price, 22.0);

        let Json(sales) = list_sales(State(state), Query(DateQuery { date: None }))
            .await
            .unwrap();
        assert_eq!(sales.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let state = test_state().await;

        let no_product = CreateSaleRequest {
            product_id: None,
            quantity: Some(RawNumber::Int(1)),
        };
        let err = create_sale(State(state.clone()), Json(no_product))
            .await
            .unwrap_err();
        assert!(matches!(err.code, ErrorCode::ValidationError));
        assert_eq!(err.message, "Producto y cantidad son requeridos");

        let product_id = seed_product(&state, "Agua", 1500).await;
        let err = create_sale(State(state), Json(body(&product_id, 0)))
            .await
            .unwrap_err();
        assert_eq!(err.message, "Producto y cantidad son requeridos");
    }

    #[tokio::test]
    async fn test_unknown_product_is_storage_error() {
        let state = test_state().await;

        let err = create_sale(State(state), Json(body("missing", 1)))
            .await
            .unwrap_err();
        assert!(matches!(err.code, ErrorCode::StorageError));
        assert_eq!(err.message, "Error al crear venta");
    }

    #[tokio::test]
    async fn test_delete_sale() {
        let state = test_state().await;
        let product_id = seed_product(&state, "Agua", 1500).await;

        let (_, Json(sale)) = create_sale(State(state.clone()), Json(body(&product_id, 1)))
            .await
            .unwrap();

        let Json(response) = delete_sale(State(state.clone()), Path(sale.id.clone()))
            .await
            .unwrap();
        assert!(response.success);

        // Deleting again: not-found, collapsed into the 500 contract
        let err = delete_sale(State(state), Path(sale.id)).await.unwrap_err();
        assert!(matches!(err.code, ErrorCode::StorageError));
        assert_eq!(err.message, "Error al eliminar venta");
    }
}
