//! # Product Catalog Repository
//!
//! Database operations for the sellable-product catalog: list, create,
//! edit, delete. Read-mostly; the sales UI fetches the list once per
//! screen.
//!
//! Deletion is guarded only by the sales foreign key: removing a product
//! that existing sales reference fails at the constraint, surfaced to the
//! caller as a storage error.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use masa_core::{Money, Product};

use crate::error::{DbError, DbResult};

/// Repository for product catalog operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists the whole catalog, name ascending.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, category, created_at, updated_at
            FROM products
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents, category, created_at, updated_at
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product.
    pub async fn create(
        &self,
        name: &str,
        price: Money,
        category: Option<String>,
    ) -> DbResult<Product> {
        debug!(name = %name, price = %price, "Creating product");

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price_cents: price.cents(),
            category,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO products (id, name, price_cents, category, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(&product.category)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Overwrites an existing product's name, price and category.
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        price: Money,
        category: Option<String>,
    ) -> DbResult<Product> {
        debug!(id = %id, "Updating product");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?2, price_cents = ?3, category = ?4, updated_at = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price.cents())
        .bind(&category)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Deletes a product from the catalog.
    ///
    /// Fails with a foreign key violation when existing sales still
    /// reference the product.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts catalog entries (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_sorted_by_name() {
        let db = test_db().await;
        let repo = db.products();

        repo.create("Tamal Rojo", Money::from_cents(2200), Some("Tamales".into()))
            .await
            .unwrap();
        repo.create("Café", Money::from_cents(1800), Some("Bebidas".into()))
            .await
            .unwrap();
        repo.create("Agua", Money::from_cents(1500), None)
            .await
            .unwrap();

        let products = repo.list().await.unwrap();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Agua", "Café", "Tamal Rojo"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = test_db().await;
        let repo = db.products();

        let created = repo
            .create("Agua", Money::from_cents(1500), None)
            .await
            .unwrap();

        let fetched = repo.get_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Agua");
        assert_eq!(fetched.price(), Money::from_cents(1500));

        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update() {
        let db = test_db().await;
        let repo = db.products();

        let created = repo
            .create("Agua", Money::from_cents(1500), None)
            .await
            .unwrap();

        let updated = repo
            .update(
                &created.id,
                "Agua de Horchata",
                Money::from_cents(2000),
                Some("Bebidas".into()),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Agua de Horchata");
        assert_eq!(updated.price_cents, 2000);
        assert_eq!(updated.category.as_deref(), Some("Bebidas"));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;
        let err = db
            .products()
            .update("missing", "X", Money::zero(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.products();

        let created = repo
            .create("Agua", Money::from_cents(1500), None)
            .await
            .unwrap();
        repo.delete(&created.id).await.unwrap();

        assert!(repo.get_by_id(&created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_delete_referenced_product_fails() {
        let db = test_db().await;
        let product = db
            .products()
            .create("Tamal Verde", Money::from_cents(2200), None)
            .await
            .unwrap();
        db.sales().record(&product.id, 2).await.unwrap();

        let err = db.products().delete(&product.id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }
}
