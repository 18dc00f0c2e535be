use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use crate::core::{enumerate_days, Result, TimeWindow};
use crate::modules::orders::models::{OrderCountQuery, OrderStatus};
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::reports::models::{
    OrderReportVo, SalesTopReportVo, TurnoverReportVo, UserReportVo,
};
use crate::modules::users::repositories::{UserCountFilter, UserRepository};

/// How many entries the sales ranking returns.
pub const TOP_SELLERS_LIMIT: i64 = 10;

/// Date-bucketed aggregation over the order and user stores.
///
/// Each report enumerates the inclusive date range, then issues exactly one
/// gateway call per series value, in date-ascending order. Reports are
/// recomputed from the transaction store on every request.
pub struct ReportService {
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReportService {
    pub fn new(orders: Arc<dyn OrderRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { orders, users }
    }

    /// Completed-order turnover per day. Days with no completed orders
    /// report zero.
    pub async fn turnover_statistics(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<TurnoverReportVo> {
        let dates = enumerate_days(begin, end)?;
        info!(%begin, %end, days = dates.len(), "generating turnover report");

        let mut turnover_list = Vec::with_capacity(dates.len());
        for date in &dates {
            let window = TimeWindow::for_day(*date);
            let turnover = self
                .orders
                .sum_turnover(window, OrderStatus::Completed)
                .await?
                .unwrap_or(Decimal::ZERO);
            turnover_list.push(turnover);
        }

        Ok(TurnoverReportVo {
            date_list: dates,
            turnover_list,
        })
    }

    /// New and cumulative user counts per day. The cumulative count takes
    /// only an upper bound, so the series never decreases.
    pub async fn user_statistics(&self, begin: NaiveDate, end: NaiveDate) -> Result<UserReportVo> {
        let dates = enumerate_days(begin, end)?;
        info!(%begin, %end, days = dates.len(), "generating user report");

        let mut new_user_list = Vec::with_capacity(dates.len());
        let mut total_user_list = Vec::with_capacity(dates.len());
        for date in &dates {
            let window = TimeWindow::for_day(*date);

            let total = self
                .users
                .count_users(UserCountFilter::before(window.end))
                .await?;
            let new = self
                .users
                .count_users(UserCountFilter::within(window))
                .await?;

            total_user_list.push(total);
            new_user_list.push(new);
        }

        Ok(UserReportVo {
            date_list: dates,
            new_user_list,
            total_user_list,
        })
    }

    /// Total and valid (completed) order counts per day, range totals, and
    /// the completion rate. An empty range reports a rate of zero rather
    /// than dividing by zero.
    pub async fn order_statistics(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<OrderReportVo> {
        let dates = enumerate_days(begin, end)?;
        info!(%begin, %end, days = dates.len(), "generating order report");

        let mut order_count_list = Vec::with_capacity(dates.len());
        let mut valid_order_count_list = Vec::with_capacity(dates.len());
        for date in &dates {
            let window = TimeWindow::for_day(*date);

            let valid = self
                .orders
                .count_orders(OrderCountQuery::with_status(window, OrderStatus::Completed))
                .await?;
            let total = self.orders.count_orders(OrderCountQuery::total(window)).await?;

            valid_order_count_list.push(valid);
            order_count_list.push(total);
        }

        // Range totals fold over the daily series instead of re-querying.
        let total_order_count: i64 = order_count_list.iter().sum();
        let valid_order_count: i64 = valid_order_count_list.iter().sum();
        let order_completion_rate = if total_order_count == 0 {
            0.0
        } else {
            valid_order_count as f64 / total_order_count as f64
        };

        Ok(OrderReportVo {
            date_list: dates,
            order_count_list,
            valid_order_count_list,
            total_order_count,
            valid_order_count,
            order_completion_rate,
        })
    }

    /// Top-10 sellers over the whole range, one gateway call. Fewer than
    /// ten sellers yields shorter (still aligned) lists.
    pub async fn sales_top10(
        &self,
        begin: NaiveDate,
        end: NaiveDate,
    ) -> Result<SalesTopReportVo> {
        let dates = enumerate_days(begin, end)?;
        info!(%begin, %end, days = dates.len(), "generating top sellers report");

        let window = TimeWindow::spanning(begin, end);
        let ranks = self.orders.top_sellers(window, TOP_SELLERS_LIMIT).await?;

        let mut name_list = Vec::with_capacity(ranks.len());
        let mut number_list = Vec::with_capacity(ranks.len());
        for rank in ranks {
            name_list.push(rank.name);
            number_list.push(rank.number);
        }

        Ok(SalesTopReportVo {
            name_list,
            number_list,
        })
    }
}
