use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::MySqlPool;

use crate::core::{Result, TimeWindow};

/// Filter for user counts; absent bounds mean "no predicate".
#[derive(Debug, Clone, Copy, Default)]
pub struct UserCountFilter {
    pub created_after: Option<NaiveDateTime>,
    pub created_before: Option<NaiveDateTime>,
}

impl UserCountFilter {
    /// Users registered at or before `ts` (cumulative count).
    pub fn before(ts: NaiveDateTime) -> Self {
        Self {
            created_after: None,
            created_before: Some(ts),
        }
    }

    /// Users registered inside the window (incremental count).
    pub fn within(window: TimeWindow) -> Self {
        Self {
            created_after: Some(window.begin),
            created_before: Some(window.end),
        }
    }
}

/// Gateway for the user table.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count_users(&self, filter: UserCountFilter) -> Result<i64>;
}

pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn count_users(&self, filter: UserCountFilter) -> Result<i64> {
        let mut sql = String::from("SELECT COUNT(id) FROM user WHERE 1 = 1");
        if filter.created_after.is_some() {
            sql.push_str(" AND create_time >= ?");
        }
        if filter.created_before.is_some() {
            sql.push_str(" AND create_time <= ?");
        }

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(after) = filter.created_after {
            query = query.bind(after);
        }
        if let Some(before) = filter.created_before {
            query = query.bind(before);
        }

        let count = query.fetch_one(&self.pool).await?;
        Ok(count)
    }
}
