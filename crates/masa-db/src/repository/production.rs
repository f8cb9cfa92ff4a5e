//! # Production Ledger Repository
//!
//! Database operations for the daily production ledger.
//!
//! ## Ledger Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               production_entries (one row per variety+day)             │
//! │                                                                         │
//! │  variety   │ date       │ quantity                                     │
//! │  ──────────┼────────────┼─────────                                     │
//! │  Dulce     │ 2026-08-06 │ 12                                           │
//! │  Rojo      │ 2026-08-06 │ 40        ◄── absolute set overwrites,       │
//! │  Verde     │ 2026-08-06 │ 25            increment adjusts (clamped 0)  │
//! │                                                                         │
//! │  UNIQUE (variety, date) - the invariant lives in the schema            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reconciliation Coupling
//! Both mutations run in a single transaction that also refreshes the
//! day's cash register (when one exists). Either the ledger write and the
//! register snapshot both land, or neither does.

use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use masa_core::{clamp_increment, ProductionEntry, ReconcilePolicy, Variety};

use crate::error::DbResult;
use crate::reconcile::reconcile_in_tx;

/// Repository for production ledger operations.
#[derive(Debug, Clone)]
pub struct ProductionRepository {
    pool: SqlitePool,
}

impl ProductionRepository {
    /// Creates a new ProductionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductionRepository { pool }
    }

    /// Sets the absolute quantity for a (variety, day) pair.
    ///
    /// Overwrites the existing row or creates one; then reconciles the
    /// day's cash register in the same transaction. Idempotent: calling
    /// twice with the same arguments yields the same final record.
    ///
    /// ## Arguments
    /// * `variety` - one of the six recognized varieties
    /// * `day` - local calendar day the count belongs to
    /// * `quantity` - absolute piece count, >= 0 (validated upstream)
    pub async fn set_quantity(
        &self,
        variety: Variety,
        day: NaiveDate,
        quantity: i64,
        policy: &ReconcilePolicy,
    ) -> DbResult<ProductionEntry> {
        debug!(variety = %variety, %day, quantity, "Setting production quantity");

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO production_entries (id, variety, quantity, date, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT (variety, date) DO UPDATE SET
                quantity = excluded.quantity,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(variety)
        .bind(quantity)
        .bind(day)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let entry = fetch_entry(&mut tx, variety, day).await?;
        reconcile_in_tx(&mut tx, day, policy).await?;
        tx.commit().await?;

        Ok(entry)
    }

    /// Applies a relative increment to a (variety, day) pair.
    ///
    /// Resolves the existing row (or starts from zero), clamps the new
    /// quantity at zero, and reconciles the day's cash register in the
    /// same transaction.
    ///
    /// ## Arguments
    /// * `delta` - signed piece count, != 0 (validated upstream)
    pub async fn increment_quantity(
        &self,
        variety: Variety,
        day: NaiveDate,
        delta: i64,
        policy: &ReconcilePolicy,
    ) -> DbResult<ProductionEntry> {
        debug!(variety = %variety, %day, delta, "Incrementing production quantity");

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let existing: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT id, quantity FROM production_entries
            WHERE variety = ?1 AND date = ?2
            "#,
        )
        .bind(variety)
        .bind(day)
        .fetch_optional(&mut *tx)
        .await?;

        match existing {
            Some((id, current)) => {
                let next = clamp_increment(current, delta);
                sqlx::query(
                    r#"
                    UPDATE production_entries
                    SET quantity = ?2, updated_at = ?3
                    WHERE id = ?1
                    "#,
                )
                .bind(&id)
                .bind(next)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
            None => {
                let initial = clamp_increment(0, delta);
                sqlx::query(
                    r#"
                    INSERT INTO production_entries
                        (id, variety, quantity, date, created_at, updated_at)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                    "#,
                )
                .bind(Uuid::new_v4().to_string())
                .bind(variety)
                .bind(initial)
                .bind(day)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
        }

        let entry = fetch_entry(&mut tx, variety, day).await?;
        reconcile_in_tx(&mut tx, day, policy).await?;
        tx.commit().await?;

        Ok(entry)
    }

    /// Lists the ledger for a calendar day, variety ascending. Without a
    /// day, lists the whole ledger. A day with no records is an empty
    /// list, not an error.
    pub async fn list_by_day(&self, day: Option<NaiveDate>) -> DbResult<Vec<ProductionEntry>> {
        let entries = match day {
            Some(day) => {
                sqlx::query_as::<_, ProductionEntry>(
                    r#"
                    SELECT id, variety, quantity, date, created_at, updated_at
                    FROM production_entries
                    WHERE date = ?1
                    ORDER BY variety ASC
                    "#,
                )
                .bind(day)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProductionEntry>(
                    r#"
                    SELECT id, variety, quantity, date, created_at, updated_at
                    FROM production_entries
                    ORDER BY variety ASC, date ASC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(entries)
    }

    /// Total pieces produced on a day, across all varieties.
    pub async fn total_for_day(&self, day: NaiveDate) -> DbResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(quantity), 0) FROM production_entries WHERE date = ?1",
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}

/// Fetches the (variety, day) row inside an open transaction.
async fn fetch_entry(
    conn: &mut SqliteConnection,
    variety: Variety,
    day: NaiveDate,
) -> DbResult<ProductionEntry> {
    let entry = sqlx::query_as::<_, ProductionEntry>(
        r#"
        SELECT id, variety, quantity, date, created_at, updated_at
        FROM production_entries
        WHERE variety = ?1 AND date = ?2
        "#,
    )
    .bind(variety)
    .bind(day)
    .fetch_one(&mut *conn)
    .await?;

    Ok(entry)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use masa_core::{Money, ReconcileStrategy, DEFAULT_UNIT_COST_CENTS};

    fn policy() -> ReconcilePolicy {
        ReconcilePolicy::new(
            ReconcileStrategy::Production,
            Money::from_cents(DEFAULT_UNIT_COST_CENTS),
        )
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_set_quantity_creates_then_overwrites() {
        let db = test_db().await;
        let repo = db.production();

        let entry = repo
            .set_quantity(Variety::Rojo, day(), 40, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 40);
        assert_eq!(entry.variety, Variety::Rojo);
        assert_eq!(entry.date, day());

        let overwritten = repo
            .set_quantity(Variety::Rojo, day(), 15, &policy())
            .await
            .unwrap();
        assert_eq!(overwritten.id, entry.id);
        assert_eq!(overwritten.quantity, 15);
    }

    #[tokio::test]
    async fn test_set_quantity_is_idempotent() {
        let db = test_db().await;
        let repo = db.production();

        let first = repo
            .set_quantity(Variety::Dulce, day(), 12, &policy())
            .await
            .unwrap();
        let second = repo
            .set_quantity(Variety::Dulce, day(), 12, &policy())
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.quantity, second.quantity);

        let entries = repo.list_by_day(Some(day())).await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_increment_walkthrough() {
        // +5 from nothing, -3, then -10 clamps at zero
        let db = test_db().await;
        let repo = db.production();

        let entry = repo
            .increment_quantity(Variety::Rojo, day(), 5, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 5);

        let entry = repo
            .increment_quantity(Variety::Rojo, day(), -3, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 2);

        let entry = repo
            .increment_quantity(Variety::Rojo, day(), -10, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 0);
    }

    #[tokio::test]
    async fn test_increment_then_negation_both_orderings() {
        let db = test_db().await;
        let repo = db.production();

        // No clamping: +3 then -3 returns to the original value
        repo.set_quantity(Variety::Verde, day(), 5, &policy())
            .await
            .unwrap();
        repo.increment_quantity(Variety::Verde, day(), 3, &policy())
            .await
            .unwrap();
        let entry = repo
            .increment_quantity(Variety::Verde, day(), -3, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 5);

        // Clamping in between: -10 then +10 does NOT recover the original
        repo.increment_quantity(Variety::Verde, day(), -10, &policy())
            .await
            .unwrap();
        let entry = repo
            .increment_quantity(Variety::Verde, day(), 10, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 10);
    }

    #[tokio::test]
    async fn test_negative_initial_increment_clamps_to_zero() {
        let db = test_db().await;
        let repo = db.production();

        let entry = repo
            .increment_quantity(Variety::Frijoles, day(), -4, &policy())
            .await
            .unwrap();
        assert_eq!(entry.quantity, 0);
    }

    #[tokio::test]
    async fn test_list_empty_day_is_empty_not_error() {
        let db = test_db().await;
        let entries = db.production().list_by_day(Some(day())).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_by_variety() {
        let db = test_db().await;
        let repo = db.production();

        repo.set_quantity(Variety::Verde, day(), 1, &policy())
            .await
            .unwrap();
        repo.set_quantity(Variety::Dulce, day(), 2, &policy())
            .await
            .unwrap();
        repo.set_quantity(Variety::Rojo, day(), 3, &policy())
            .await
            .unwrap();

        let entries = repo.list_by_day(Some(day())).await.unwrap();
        let varieties: Vec<Variety> = entries.iter().map(|e| e.variety).collect();
        assert_eq!(
            varieties,
            vec![Variety::Dulce, Variety::Rojo, Variety::Verde]
        );
    }

    #[tokio::test]
    async fn test_entries_are_per_day() {
        let db = test_db().await;
        let repo = db.production();
        let other_day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        repo.set_quantity(Variety::Rojo, day(), 10, &policy())
            .await
            .unwrap();
        repo.set_quantity(Variety::Rojo, other_day, 20, &policy())
            .await
            .unwrap();

        assert_eq!(repo.total_for_day(day()).await.unwrap(), 10);
        assert_eq!(repo.total_for_day(other_day).await.unwrap(), 20);
        assert_eq!(repo.list_by_day(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_total_for_day_sums_varieties() {
        let db = test_db().await;
        let repo = db.production();

        repo.set_quantity(Variety::Rojo, day(), 10, &policy())
            .await
            .unwrap();
        repo.set_quantity(Variety::Verde, day(), 15, &policy())
            .await
            .unwrap();

        assert_eq!(repo.total_for_day(day()).await.unwrap(), 25);
    }
}
