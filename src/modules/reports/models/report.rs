use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::reports::models::series;

/// Daily turnover over a date range.
///
/// All report view objects hold typed vectors; the comma-joined wire
/// contract is produced at serialization time (see [`series`]). Every value
/// series has the same length as `date_list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnoverReportVo {
    #[serde(serialize_with = "series::serialize_dates")]
    pub date_list: Vec<NaiveDate>,
    #[serde(serialize_with = "series::serialize_amounts")]
    pub turnover_list: Vec<Decimal>,
}

/// Daily new-user and cumulative-user counts over a date range.
/// `total_user_list` is monotone non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReportVo {
    #[serde(serialize_with = "series::serialize_dates")]
    pub date_list: Vec<NaiveDate>,
    #[serde(serialize_with = "series::serialize_counts")]
    pub new_user_list: Vec<i64>,
    #[serde(serialize_with = "series::serialize_counts")]
    pub total_user_list: Vec<i64>,
}

/// Daily order counts plus range totals and the completion rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReportVo {
    #[serde(serialize_with = "series::serialize_dates")]
    pub date_list: Vec<NaiveDate>,
    #[serde(serialize_with = "series::serialize_counts")]
    pub order_count_list: Vec<i64>,
    #[serde(serialize_with = "series::serialize_counts")]
    pub valid_order_count_list: Vec<i64>,
    pub total_order_count: i64,
    pub valid_order_count: i64,
    pub order_completion_rate: f64,
}

/// Best-selling items over a date range, aligned name/quantity lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTopReportVo {
    #[serde(serialize_with = "series::serialize_names")]
    pub name_list: Vec<String>,
    #[serde(serialize_with = "series::serialize_counts")]
    pub number_list: Vec<i64>,
}
