use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::cart::models::{CartItem, CartProbe, NewCartItem};

/// Gateway for the shopping-cart table.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Rows matching the probe; unset probe fields are not constrained.
    async fn list(&self, probe: &CartProbe) -> Result<Vec<CartItem>>;

    async fn insert(&self, item: &NewCartItem) -> Result<()>;

    /// Overwrite `number` on the row with the given id.
    async fn update_number(&self, id: i64, number: i32) -> Result<()>;

    /// Delete every row belonging to the user.
    async fn clear(&self, user_id: i64) -> Result<()>;
}

pub struct MySqlCartRepository {
    pool: MySqlPool,
}

impl MySqlCartRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for MySqlCartRepository {
    async fn list(&self, probe: &CartProbe) -> Result<Vec<CartItem>> {
        let mut sql = String::from(
            "SELECT id, user_id, dish_id, setmeal_id, dish_flavor, \
             name, image, amount, number, create_time \
             FROM shopping_cart WHERE user_id = ?",
        );
        if probe.dish_id.is_some() {
            sql.push_str(" AND dish_id = ?");
        }
        if probe.setmeal_id.is_some() {
            sql.push_str(" AND setmeal_id = ?");
        }
        if probe.dish_flavor.is_some() {
            sql.push_str(" AND dish_flavor = ?");
        }
        sql.push_str(" ORDER BY create_time DESC");

        let mut query = sqlx::query_as::<_, CartItem>(&sql).bind(probe.user_id);
        if let Some(dish_id) = probe.dish_id {
            query = query.bind(dish_id);
        }
        if let Some(setmeal_id) = probe.setmeal_id {
            query = query.bind(setmeal_id);
        }
        if let Some(flavor) = &probe.dish_flavor {
            query = query.bind(flavor);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn insert(&self, item: &NewCartItem) -> Result<()> {
        sqlx::query(
            "INSERT INTO shopping_cart \
             (user_id, dish_id, setmeal_id, dish_flavor, name, image, amount, number, create_time) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(item.user_id)
        .bind(item.dish_id)
        .bind(item.setmeal_id)
        .bind(&item.dish_flavor)
        .bind(&item.name)
        .bind(&item.image)
        .bind(item.amount)
        .bind(item.number)
        .bind(item.create_time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_number(&self, id: i64, number: i32) -> Result<()> {
        sqlx::query("UPDATE shopping_cart SET number = ? WHERE id = ?")
            .bind(number)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn clear(&self, user_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM shopping_cart WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
