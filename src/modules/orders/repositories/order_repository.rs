use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::{Result, TimeWindow};
use crate::modules::orders::models::{Order, OrderCountQuery, OrderStatus, SalesRank};

/// Gateway for the order table.
///
/// Services depend only on this trait so reports and the lifecycle scanner
/// can be exercised against in-memory stores.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Sum of `amount` over orders in `window` with the given status.
    /// Returns `None` when no rows match (SQL `SUM` of an empty set).
    async fn sum_turnover(&self, window: TimeWindow, status: OrderStatus)
        -> Result<Option<Decimal>>;

    /// Count orders in the query window, optionally filtered by status.
    async fn count_orders(&self, query: OrderCountQuery) -> Result<i64>;

    /// Best-selling items over the window, descending by quantity.
    /// Ties break by name ascending so repeated calls are stable.
    async fn top_sellers(&self, window: TimeWindow, limit: i64) -> Result<Vec<SalesRank>>;

    /// Orders in `status` placed strictly before `cutoff`.
    async fn find_by_status_older_than(
        &self,
        status: OrderStatus,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<Order>>;

    /// Full-row update by id.
    async fn update(&self, order: &Order) -> Result<()>;

    /// Guarded status transition: only applies while the row is still in
    /// `from`. Returns whether a row was changed; a concurrent transition
    /// away from `from` makes this a silent no-op.
    async fn update_status_from(
        &self,
        id: i64,
        from: OrderStatus,
        to: OrderStatus,
        cancel_reason: Option<String>,
        cancel_time: Option<NaiveDateTime>,
    ) -> Result<bool>;
}

pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn sum_turnover(
        &self,
        window: TimeWindow,
        status: OrderStatus,
    ) -> Result<Option<Decimal>> {
        let sum: Option<Decimal> = sqlx::query_scalar(
            "SELECT SUM(amount) FROM orders \
             WHERE order_time BETWEEN ? AND ? AND status = ?",
        )
        .bind(window.begin)
        .bind(window.end)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(sum)
    }

    async fn count_orders(&self, query: OrderCountQuery) -> Result<i64> {
        let count: i64 = match query.status {
            Some(status) => {
                sqlx::query_scalar(
                    "SELECT COUNT(id) FROM orders \
                     WHERE order_time BETWEEN ? AND ? AND status = ?",
                )
                .bind(query.window.begin)
                .bind(query.window.end)
                .bind(status)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar(
                    "SELECT COUNT(id) FROM orders WHERE order_time BETWEEN ? AND ?",
                )
                .bind(query.window.begin)
                .bind(query.window.end)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(count)
    }

    async fn top_sellers(&self, window: TimeWindow, limit: i64) -> Result<Vec<SalesRank>> {
        let ranks = sqlx::query_as::<_, SalesRank>(
            "SELECT od.name AS name, CAST(SUM(od.number) AS SIGNED) AS number \
             FROM order_detail od \
             JOIN orders o ON od.order_id = o.id \
             WHERE o.status = ? AND o.order_time BETWEEN ? AND ? \
             GROUP BY od.name \
             ORDER BY number DESC, od.name ASC \
             LIMIT ?",
        )
        .bind(OrderStatus::Completed)
        .bind(window.begin)
        .bind(window.end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(ranks)
    }

    async fn find_by_status_older_than(
        &self,
        status: OrderStatus,
        cutoff: NaiveDateTime,
    ) -> Result<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, status, order_time, amount, cancel_reason, cancel_time \
             FROM orders WHERE status = ? AND order_time < ?",
        )
        .bind(status)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    async fn update(&self, order: &Order) -> Result<()> {
        sqlx::query(
            "UPDATE orders \
             SET status = ?, order_time = ?, amount = ?, cancel_reason = ?, cancel_time = ? \
             WHERE id = ?",
        )
        .bind(order.status)
        .bind(order.order_time)
        .bind(order.amount)
        .bind(&order.cancel_reason)
        .bind(order.cancel_time)
        .bind(order.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_status_from(
        &self,
        id: i64,
        from: OrderStatus,
        to: OrderStatus,
        cancel_reason: Option<String>,
        cancel_time: Option<NaiveDateTime>,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE orders SET status = ?, cancel_reason = ?, cancel_time = ? \
             WHERE id = ? AND status = ?",
        )
        .bind(to)
        .bind(cancel_reason)
        .bind(cancel_time)
        .bind(id)
        .bind(from)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
