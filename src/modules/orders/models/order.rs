use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::core::TimeWindow;

/// Reason written by the scanner when a pending order times out.
pub const AUTO_CANCEL_REASON: &str = "订单超时，系统自动取消";

/// Order lifecycle states, stored as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum OrderStatus {
    PendingPayment = 1,
    ToBeConfirmed = 2,
    Confirmed = 3,
    DeliveryInProgress = 4,
    Completed = 5,
    Cancelled = 6,
}

/// Order row as the lifecycle scanner sees it.
///
/// The full order table carries many more columns; only the fields the
/// scanner reads or writes are mapped here.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub status: OrderStatus,
    pub order_time: NaiveDateTime,
    pub amount: Decimal,
    pub cancel_reason: Option<String>,
    pub cancel_time: Option<NaiveDateTime>,
}

/// One entry of the sales ranking, ordered by quantity sold.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SalesRank {
    pub name: String,
    pub number: i64,
}

/// Typed descriptor for order-count queries.
///
/// `status: None` means "no status predicate", not "status IS NULL".
#[derive(Debug, Clone, Copy)]
pub struct OrderCountQuery {
    pub window: TimeWindow,
    pub status: Option<OrderStatus>,
}

impl OrderCountQuery {
    pub fn total(window: TimeWindow) -> Self {
        Self {
            window,
            status: None,
        }
    }

    pub fn with_status(window: TimeWindow, status: OrderStatus) -> Self {
        Self {
            window,
            status: Some(status),
        }
    }
}
