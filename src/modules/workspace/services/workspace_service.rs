use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::{Clock, Result, TimeWindow};
use crate::modules::orders::models::{OrderCountQuery, OrderStatus};
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::users::repositories::{UserCountFilter, UserRepository};
use crate::modules::workspace::models::BusinessData;

/// Produces the [`BusinessData`] summary for arbitrary time windows.
pub struct WorkspaceService {
    orders: Arc<dyn OrderRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl WorkspaceService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orders,
            users,
            clock,
        }
    }

    /// Aggregate turnover, order counts, completion rate, unit price and
    /// new-user count over the window.
    pub async fn business_data(&self, window: TimeWindow) -> Result<BusinessData> {
        let turnover = self
            .orders
            .sum_turnover(window, OrderStatus::Completed)
            .await?
            .unwrap_or(Decimal::ZERO);

        let valid_order_count = self
            .orders
            .count_orders(OrderCountQuery::with_status(window, OrderStatus::Completed))
            .await?;
        let total_order_count = self.orders.count_orders(OrderCountQuery::total(window)).await?;

        let order_completion_rate = if total_order_count == 0 {
            0.0
        } else {
            valid_order_count as f64 / total_order_count as f64
        };
        let unit_price = if valid_order_count == 0 {
            0.0
        } else {
            turnover.to_f64().unwrap_or(0.0) / valid_order_count as f64
        };

        let new_users = self
            .users
            .count_users(UserCountFilter::within(window))
            .await?;

        Ok(BusinessData {
            turnover,
            valid_order_count,
            order_completion_rate,
            unit_price,
            new_users,
        })
    }

    /// Today's summary, for the admin dashboard.
    pub async fn today(&self) -> Result<BusinessData> {
        self.business_data(TimeWindow::for_day(self.clock.today()))
            .await
    }
}
