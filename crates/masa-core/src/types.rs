//! # Domain Types
//!
//! Core domain types used throughout masa.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductionEntry │   │    Product      │   │   SaleEntry     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  variety        │   │  name           │   │  product_id(FK) │       │
//! │  │  quantity       │   │  price_cents    │   │  quantity       │       │
//! │  │  date (day)     │   │  category       │   │  date (instant) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Variety      │   │  CashRegister   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  closed set of  │   │  date (day)     │                             │
//! │  │  six values     │   │  expected_cents │                             │
//! │  │                 │   │  actual_cents   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity has a UUID v4 `id`, generated at insert time by masa-db.
//! Production entries additionally carry the natural key (variety, date),
//! cash registers the natural key (date); both are UNIQUE in storage.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Variety
// =============================================================================

/// One of the six tamal varieties produced daily.
///
/// The set is closed: anything outside it is rejected at the boundary with
/// a validation error, never coerced or stored as free text. Variants are
/// declared in alphabetical order so the derived `Ord` matches the
/// lexicographic ordering the ledger lists by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[ts(export)]
pub enum Variety {
    Dulce,
    Frijoles,
    Prensado,
    Rajas,
    Rojo,
    Verde,
}

impl Variety {
    /// All recognized varieties, in lexicographic order.
    pub const ALL: [Variety; 6] = [
        Variety::Dulce,
        Variety::Frijoles,
        Variety::Prensado,
        Variety::Rajas,
        Variety::Rojo,
        Variety::Verde,
    ];

    /// The stored/serialized name of the variety.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Variety::Dulce => "Dulce",
            Variety::Frijoles => "Frijoles",
            Variety::Prensado => "Prensado",
            Variety::Rajas => "Rajas",
            Variety::Rojo => "Rojo",
            Variety::Verde => "Verde",
        }
    }
}

impl fmt::Display for Variety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variety {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Dulce" => Ok(Variety::Dulce),
            "Frijoles" => Ok(Variety::Frijoles),
            "Prensado" => Ok(Variety::Prensado),
            "Rajas" => Ok(Variety::Rajas),
            "Rojo" => Ok(Variety::Rojo),
            "Verde" => Ok(Variety::Verde),
            other => Err(ValidationError::UnknownVariety {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Production Entry
// =============================================================================

/// One quantity-per-variety-per-day record in the production ledger.
///
/// Created on the first set/increment for a (variety, day) pair, mutated
/// in place thereafter, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct ProductionEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Which of the six varieties this row counts.
    pub variety: Variety,

    /// Pieces produced. Never negative; increments clamp at zero.
    pub quantity: i64,

    /// Calendar day this row belongs to (local time).
    #[ts(as = "String")]
    pub date: NaiveDate,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item in the catalog. Read-mostly, independent of the
/// production ledger.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Unique by convention, not enforced.
    pub name: String,

    /// Price in centavos.
    pub price_cents: i64,

    /// Optional grouping for the sales UI.
    pub category: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Sale Entry
// =============================================================================

/// An individual sale transaction. Immutable once created; deletable.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct SaleEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The catalog product sold. Weak reference: the product's current
    /// price is what sale listings and the sales-based reconciliation
    /// strategy read.
    pub product_id: String,

    /// Units sold, at least 1.
    pub quantity: i64,

    /// Instant of the sale (not settable by the client).
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// A sale joined with its catalog product, as the sales screen needs it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleWithProduct {
    pub sale: SaleEntry,
    pub product: Product,
}

impl SaleWithProduct {
    /// Revenue of this sale at the product's current price.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.sale.quantity)
    }
}

// =============================================================================
// Cash Register (corte de caja)
// =============================================================================

/// One end-of-day cash reconciliation record per calendar day.
///
/// `total_production` and `expected_cents` are point-in-time snapshots of
/// the production ledger's daily aggregate; the reconciliation service
/// refreshes them whenever production changes for that day, provided the
/// register already exists.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CashRegister {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Calendar day of the corte. UNIQUE in storage.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Snapshot: total pieces produced that day, across all varieties.
    pub total_production: i64,

    /// Snapshot: expected cash in centavos, per the configured strategy.
    pub expected_cents: i64,

    /// Operator-entered cash actually on hand, in centavos.
    pub actual_cents: i64,

    /// Free-text operator notes.
    pub notes: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CashRegister {
    /// Expected cash as Money.
    #[inline]
    pub fn expected(&self) -> Money {
        Money::from_cents(self.expected_cents)
    }

    /// Actual cash as Money.
    #[inline]
    pub fn actual(&self) -> Money {
        Money::from_cents(self.actual_cents)
    }

    /// `actual - expected`: positive is a cash surplus (sobrante),
    /// negative a shortage (faltante).
    #[inline]
    pub fn difference(&self) -> Money {
        self.actual() - self.expected()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
