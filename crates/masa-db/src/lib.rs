//! # masa-db: Database Layer for masa
//!
//! This crate provides database access for the masa daily-operations
//! tracker. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         masa Data Flow                                  │
//! │                                                                         │
//! │  HTTP handler (POST /production)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     masa-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐ │   │
//! │  │   │   Database    │    │  Repositories  │    │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │ production.rs  │    │  (embedded)  │ │   │
//! │  │   │               │    │ product.rs     │    │              │ │   │
//! │  │   │ SqlitePool    │◄───│ sale.rs        │    │ 001_init.sql │ │   │
//! │  │   │ Connection    │    │ cash_register  │    │              │ │   │
//! │  │   │ Management    │    │ + reconcile.rs │    │              │ │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (masa.db)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (production, product, ...)
//! - [`reconcile`] - The reconciliation service: keeps a day's cash
//!   register consistent with the production ledger
//!
//! ## Usage
//!
//! ```rust,ignore
//! use masa_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("masa.db")).await?;
//!
//! // Mutate the ledger; the day's register is refreshed in the same
//! // transaction when one exists.
//! let entry = db
//!     .production()
//!     .increment_quantity(Variety::Rojo, day, 5, &policy)
//!     .await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod reconcile;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::cash_register::CashRegisterRepository;
pub use repository::product::ProductRepository;
pub use repository::production::ProductionRepository;
pub use repository::sale::SaleRepository;
