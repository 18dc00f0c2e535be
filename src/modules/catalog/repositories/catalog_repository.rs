use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::catalog::models::Product;

/// Read-only gateway for dish and set-meal lookups.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn dish_by_id(&self, id: i64) -> Result<Option<Product>>;

    async fn setmeal_by_id(&self, id: i64) -> Result<Option<Product>>;
}

pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for MySqlCatalogRepository {
    async fn dish_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT name, image, price FROM dish WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn setmeal_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT name, image, price FROM setmeal WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}
