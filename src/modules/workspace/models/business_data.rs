use rust_decimal::Decimal;
use serde::Serialize;

/// Summary figures for one date range, used by the dashboard and the
/// workbook export. Rates and unit price fall back to zero when their
/// denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    pub turnover: Decimal,
    pub valid_order_count: i64,
    pub order_completion_rate: f64,
    pub unit_price: f64,
    pub new_users: i64,
}
