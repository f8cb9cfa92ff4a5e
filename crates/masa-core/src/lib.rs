//! # masa-core: Pure Business Logic for masa
//!
//! This crate is the **heart** of masa, a daily-operations tracker for a
//! tamalería. It contains all business logic as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         masa Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Client (forms)                           │   │
//! │  │    Production UI ──► Sales UI ──► Corte de Caja UI             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    masa-api (axum)                              │   │
//! │  │    /production, /products, /sales, /cash-register              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ masa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ reconcile │  │ validation│  │   │
//! │  │   │  Variety  │  │   Money   │  │  Policy   │  │   rules   │  │   │
//! │  │   │  Entries  │  │ centavos  │  │  Strategy │  │  parsing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    masa-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Variety, ProductionEntry, Product, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`day`] - Calendar-day resolution (local midnight boundaries)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and explicit numeric parsing
//! - [`reconcile`] - Expected-cash reconciliation policy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod day;
pub mod error;
pub mod money;
pub mod reconcile;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use masa_core::Money` instead of
// `use masa_core::money::Money`.

pub use error::ValidationError;
pub use money::Money;
pub use reconcile::{clamp_increment, ReconcilePolicy, ReconcileStrategy};
pub use types::*;
pub use validation::RawNumber;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default unit cost attributed to each produced piece, in centavos:
/// $22.00 per tamal. Overridable at configuration time for the
/// production-based reconciliation strategy.
pub const DEFAULT_UNIT_COST_CENTS: i64 = 2200;
