//! # Sales Ledger Repository
//!
//! Database operations for individual sale transactions.
//!
//! Sales are timestamped at creation (the client never sets the instant),
//! immutable once recorded, and individually deletable. Listings join the
//! live catalog product; there is no price snapshot, so a catalog price
//! edit retroactively changes what listings and the sales-based expected
//! amount report.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use masa_core::day::day_bounds_utc;
use masa_core::{Money, Product, SaleEntry, SaleWithProduct};

use crate::error::{DbError, DbResult};

/// Repository for sales ledger operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale against a catalog product, timestamped now.
    ///
    /// The product reference is checked by the foreign key; an unknown
    /// `product_id` fails with a foreign key violation.
    pub async fn record(&self, product_id: &str, quantity: i64) -> DbResult<SaleWithProduct> {
        debug!(product_id = %product_id, quantity, "Recording sale");

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO sales (id, product_id, quantity, date, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&id)
        .bind(product_id)
        .bind(quantity)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let sale = sqlx::query_as::<_, SaleWithProductRow>(&format!(
            "{SELECT_JOINED} WHERE s.id = ?1"
        ))
        .bind(&id)
        .fetch_one(&self.pool)
        .await?;

        Ok(sale.into())
    }

    /// Lists sales with their product joined, newest first. With a day,
    /// only that local calendar day's sales are returned.
    pub async fn list(&self, day: Option<NaiveDate>) -> DbResult<Vec<SaleWithProduct>> {
        let rows = match day {
            Some(day) => {
                let (start, end) = day_bounds_utc(day);
                sqlx::query_as::<_, SaleWithProductRow>(&format!(
                    "{SELECT_JOINED} WHERE s.date BETWEEN ?1 AND ?2 ORDER BY s.created_at DESC"
                ))
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, SaleWithProductRow>(&format!(
                    "{SELECT_JOINED} ORDER BY s.created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(SaleWithProduct::from).collect())
    }

    /// Removes a sale.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting sale");

        let result = sqlx::query("DELETE FROM sales WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Sale", id));
        }

        Ok(())
    }

    /// Revenue of a day's sales at current catalog prices:
    /// SUM(price × quantity). Feeds the sales-based reconciliation
    /// strategy.
    pub async fn revenue_for_day(&self, day: NaiveDate) -> DbResult<Money> {
        let mut conn = self.pool.acquire().await?;
        revenue_for_day(&mut conn, day).await
    }
}

/// Connection-level revenue query, shared with the reconciliation service
/// so it can run inside a mutation's transaction.
pub(crate) async fn revenue_for_day(
    conn: &mut SqliteConnection,
    day: NaiveDate,
) -> DbResult<Money> {
    let (start, end) = day_bounds_utc(day);

    let cents: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE(SUM(p.price_cents * s.quantity), 0)
        FROM sales s
        INNER JOIN products p ON p.id = s.product_id
        WHERE s.date BETWEEN ?1 AND ?2
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_one(&mut *conn)
    .await?;

    Ok(Money::from_cents(cents))
}

// =============================================================================
// Row Mapping
// =============================================================================

/// Shared SELECT for the sale+product join.
const SELECT_JOINED: &str = r#"
    SELECT
        s.id, s.product_id, s.quantity, s.date, s.created_at,
        p.name       AS product_name,
        p.price_cents AS product_price_cents,
        p.category   AS product_category,
        p.created_at AS product_created_at,
        p.updated_at AS product_updated_at
    FROM sales s
    INNER JOIN products p ON p.id = s.product_id
"#;

/// Flat row for the sale+product join; reassembled into the nested
/// domain shape below.
#[derive(Debug, sqlx::FromRow)]
struct SaleWithProductRow {
    id: String,
    product_id: String,
    quantity: i64,
    date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    product_name: String,
    product_price_cents: i64,
    product_category: Option<String>,
    product_created_at: DateTime<Utc>,
    product_updated_at: DateTime<Utc>,
}

impl From<SaleWithProductRow> for SaleWithProduct {
    fn from(row: SaleWithProductRow) -> Self {
        SaleWithProduct {
            sale: SaleEntry {
                id: row.id,
                product_id: row.product_id.clone(),
                quantity: row.quantity,
                date: row.date,
                created_at: row.created_at,
            },
            product: Product {
                id: row.product_id,
                name: row.product_name,
                price_cents: row.product_price_cents,
                category: row.product_category,
                created_at: row.product_created_at,
                updated_at: row.product_updated_at,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
