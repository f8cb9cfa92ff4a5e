//! # Wire DTOs
//!
//! Request and response shapes for the JSON API.
//!
//! ## Why DTOs?
//! - Decouples the domain model from the API contract
//! - camelCase field names for the JS client
//! - Request numerics arrive as [`RawNumber`] (number or string) so
//!   presence and well-formedness are checked explicitly instead of
//!   being coerced
//! - Response amounts are decimal pesos; internally everything is
//!   integer centavos

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use masa_core::{CashRegister, Product, ProductionEntry, RawNumber, SaleWithProduct, Variety};

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /production` (absolute set).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetProductionRequest {
    pub variety: Option<String>,
    pub quantity: Option<RawNumber>,
    pub date: Option<String>,
}

/// Body of `POST /production/increment`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementProductionRequest {
    pub variety: Option<String>,
    pub increment: Option<RawNumber>,
    pub date: Option<String>,
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: Option<String>,
    pub price: Option<RawNumber>,
    pub category: Option<String>,
}

/// Body of `POST /sales`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleRequest {
    pub product_id: Option<String>,
    pub quantity: Option<RawNumber>,
}

/// Body of `POST /cash-register` and `PUT /cash-register/{id}`.
/// `date` is only honored on create.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRegisterRequest {
    pub total_production: Option<RawNumber>,
    pub expected_amount: Option<RawNumber>,
    pub actual_amount: Option<RawNumber>,
    pub notes: Option<String>,
    pub date: Option<String>,
}

/// `?date=YYYY-MM-DD` query string.
#[derive(Debug, Clone, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

// =============================================================================
// Responses
// =============================================================================

/// A production ledger row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionEntryDto {
    pub id: String,
    pub variety: Variety,
    pub quantity: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductionEntry> for ProductionEntryDto {
    fn from(entry: ProductionEntry) -> Self {
        ProductionEntryDto {
            id: entry.id,
            variety: entry.variety,
            quantity: entry.quantity,
            date: entry.date,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// A catalog product. `price` is decimal pesos.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price().to_pesos(),
            category: product.category.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// A sale with its product joined, as the sales screen renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDto {
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub product: ProductDto,
}

impl From<SaleWithProduct> for SaleDto {
    fn from(joined: SaleWithProduct) -> Self {
        SaleDto {
            id: joined.sale.id,
            product_id: joined.sale.product_id,
            quantity: joined.sale.quantity,
            date: joined.sale.date,
            created_at: joined.sale.created_at,
            product: joined.product.into(),
        }
    }
}

/// A day's corte de caja. Amounts are decimal pesos; `difference` is
/// `actualAmount - expectedAmount` (positive = surplus, negative =
/// shortage).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashRegisterDto {
    pub id: String,
    pub date: NaiveDate,
    pub total_production: i64,
    pub expected_amount: f64,
    pub actual_amount: f64,
    pub difference: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CashRegister> for CashRegisterDto {
    fn from(register: CashRegister) -> Self {
        CashRegisterDto {
            id: register.id.clone(),
            date: register.date,
            total_production: register.total_production,
            expected_amount: register.expected().to_pesos(),
            actual_amount: register.actual().to_pesos(),
            difference: register.difference().to_pesos(),
            notes: register.notes.clone(),
            created_at: register.created_at,
            updated_at: register.updated_at,
        }
    }
}

/// `{"success": true}` acknowledgement for deletes.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use masa_core::Money;

    #[test]
    fn test_register_dto_amounts_in_pesos() {
        let now = Utc::now();
        let register = CashRegister {
            id: "r1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            total_production: 10,
            expected_cents: 22000,
            actual_cents: 21000,
            notes: None,
            created_at: now,
            updated_at: now,
        };

        let dto = CashRegisterDto::from(register);
        assert_eq!(dto.expected_amount, 220.0);
        assert_eq!(dto.actual_amount, 210.0);
        assert_eq!(dto.difference, -10.0);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let now = Utc::now();
        let product = Product {
            id: "p1".to_string(),
            name: "Agua".to_string(),
            price_cents: Money::from_pesos(15.0).unwrap().cents(),
            category: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(ProductDto::from(product)).unwrap();
        assert_eq!(json["name"], "Agua");
        assert_eq!(json["price"], 15.0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_request_accepts_number_or_string() {
        let body: SetProductionRequest =
            serde_json::from_str(r#"{"variety":"Rojo","quantity":"12","date":"2026-08-06"}"#)
                .unwrap();
        assert!(body.quantity.is_some());

        let body: SetProductionRequest =
            serde_json::from_str(r#"{"variety":"Rojo","quantity":12}"#).unwrap();
        assert!(body.quantity.is_some());
        assert!(body.date.is_none());
    }
}
