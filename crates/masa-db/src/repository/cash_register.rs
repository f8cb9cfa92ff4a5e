//! # Cash Register Repository
//!
//! Database operations for end-of-day cash registers (cortes de caja).
//!
//! ## Register Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. ABSENT                                                              │
//! │     └── find_by_day() → None   (expected steady state before corte)    │
//! │                                                                         │
//! │  2. CREATED by the corte workflow                                      │
//! │     └── create() → CashRegister (UNIQUE(date): one per day)            │
//! │                                                                         │
//! │  3. REFRESHED by reconciliation on production changes                  │
//! │     └── update_aggregates() → totals snapshot stays current            │
//! │                                                                         │
//! │  4. OVERWRITTEN by the operator                                        │
//! │     └── update() → actual amount, notes; no re-reconciliation          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use masa_core::{CashRegister, Money};

use crate::error::{DbError, DbResult};

const SELECT_REGISTER: &str = r#"
    SELECT id, date, total_production, expected_cents, actual_cents,
           notes, created_at, updated_at
    FROM cash_registers
"#;

/// Repository for cash register operations.
#[derive(Debug, Clone)]
pub struct CashRegisterRepository {
    pool: SqlitePool,
}

impl CashRegisterRepository {
    /// Creates a new CashRegisterRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CashRegisterRepository { pool }
    }

    /// Returns the day's register, or None before the corte is performed.
    /// Absence is a normal state, not an error.
    pub async fn find_by_day(&self, day: NaiveDate) -> DbResult<Option<CashRegister>> {
        let mut conn = self.pool.acquire().await?;
        find_by_day(&mut conn, day).await
    }

    /// Gets a register by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<CashRegister>> {
        let register =
            sqlx::query_as::<_, CashRegister>(&format!("{SELECT_REGISTER} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(register)
    }

    /// Creates the day's register. Each numeric field is required but may
    /// legitimately be zero (a day with no production).
    ///
    /// The schema enforces one register per day; a same-day duplicate
    /// fails with a unique violation.
    pub async fn create(
        &self,
        day: NaiveDate,
        total_production: i64,
        expected: Money,
        actual: Money,
        notes: Option<String>,
    ) -> DbResult<CashRegister> {
        debug!(%day, total_production, expected = %expected, actual = %actual, "Creating cash register");

        let now = Utc::now();
        let register = CashRegister {
            id: Uuid::new_v4().to_string(),
            date: day,
            total_production,
            expected_cents: expected.cents(),
            actual_cents: actual.cents(),
            notes,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO cash_registers
                (id, date, total_production, expected_cents, actual_cents,
                 notes, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&register.id)
        .bind(register.date)
        .bind(register.total_production)
        .bind(register.expected_cents)
        .bind(register.actual_cents)
        .bind(&register.notes)
        .bind(register.created_at)
        .bind(register.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(register)
    }

    /// Overwrites a register's numeric fields and notes in place. Does
    /// not re-trigger reconciliation.
    pub async fn update(
        &self,
        id: &str,
        total_production: i64,
        expected: Money,
        actual: Money,
        notes: Option<String>,
    ) -> DbResult<CashRegister> {
        debug!(id = %id, "Updating cash register");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE cash_registers
            SET total_production = ?2, expected_cents = ?3, actual_cents = ?4,
                notes = ?5, updated_at = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(total_production)
        .bind(expected.cents())
        .bind(actual.cents())
        .bind(&notes)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("CashRegister", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("CashRegister", id))
    }

    /// Counts registers (used by tests to assert reconciliation never
    /// creates one).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cash_registers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Connection-level lookup, shared with the reconciliation service.
pub(crate) async fn find_by_day(
    conn: &mut SqliteConnection,
    day: NaiveDate,
) -> DbResult<Option<CashRegister>> {
    let register = sqlx::query_as::<_, CashRegister>(&format!("{SELECT_REGISTER} WHERE date = ?1"))
        .bind(day)
        .fetch_optional(&mut *conn)
        .await?;

    Ok(register)
}

/// Connection-level snapshot refresh, used by the reconciliation service
/// inside the mutation's transaction.
pub(crate) async fn update_aggregates(
    conn: &mut SqliteConnection,
    id: &str,
    total_production: i64,
    expected: Money,
) -> DbResult<()> {
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE cash_registers
        SET total_production = ?2, expected_cents = ?3, updated_at = ?4
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .bind(total_production)
    .bind(expected.cents())
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
