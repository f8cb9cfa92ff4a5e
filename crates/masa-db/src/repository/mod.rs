//! # Repository Module
//!
//! Database repository implementations for masa.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  db.production().increment_quantity(Rojo, day, 5, &policy)     │
//! │       ▼                                                                 │
//! │  ProductionRepository                                                  │
//! │  ├── set_quantity(&self, variety, day, quantity, policy)               │
//! │  ├── increment_quantity(&self, variety, day, delta, policy)            │
//! │  ├── list_by_day(&self, day)                                           │
//! │  └── total_for_day(&self, day)                                         │
//! │       │                                                                 │
//! │       │  SQL (one transaction per mutation, reconciliation included)   │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`production::ProductionRepository`] - Production ledger mutations and reads
//! - [`product::ProductRepository`] - Product catalog CRUD
//! - [`sale::SaleRepository`] - Sales ledger
//! - [`cash_register::CashRegisterRepository`] - Corte de caja records

pub mod cash_register;
pub mod product;
pub mod production;
pub mod sale;
