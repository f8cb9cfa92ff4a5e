//! # Product Catalog Routes
//!
//! Catalog CRUD. Deleting a product that existing sales reference fails
//! at the foreign key and surfaces through the storage path, like every
//! other persistence failure.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use masa_core::{validation, Money};

use crate::dto::{ProductDto, ProductRequest, SuccessResponse};
use crate::error::ApiError;
use crate::AppState;

/// Validates the shared create/update body: name and price are required.
fn parse_product_body(body: &ProductRequest) -> Result<(String, Money), ApiError> {
    let invalid = || ApiError::validation("Nombre y precio son requeridos");

    let name = validation::validate_product_name(body.name.as_deref().unwrap_or(""))
        .map_err(|_| invalid())?;
    let price =
        validation::parse_amount("price", body.price.as_ref()).map_err(|_| invalid())?;

    Ok((name, price))
}

/// `GET /products` - the whole catalog, name ascending.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let products = state
        .db
        .products()
        .list()
        .await
        .map_err(|e| ApiError::storage("Error al obtener productos", e))?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// `POST /products` - create a catalog entry. 201.
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let (name, price) = parse_product_body(&body)?;

    let product = state
        .db
        .products()
        .create(&name, price, body.category)
        .await
        .map_err(|e| ApiError::storage("Error al crear producto", e))?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// `PUT /products/{id}` - overwrite a catalog entry.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let (name, price) = parse_product_body(&body)?;

    let product = state
        .db
        .products()
        .update(&id, &name, price, body.category)
        .await
        .map_err(|e| ApiError::storage("Error al actualizar producto", e))?;

    Ok(Json(product.into()))
}

/// `DELETE /products/{id}`.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .db
        .products()
        .delete(&id)
        .await
        .map_err(|e| ApiError::storage("Error al eliminar producto", e))?;

    Ok(Json(SuccessResponse::ok()))
}

// =============================================================================
// Unit Tests
// =============================================================================
