//! Wire encoding of report series: comma-joined, no spaces, no trailing
//! comma. Dates are `YYYY-MM-DD`; amounts keep at least one fractional
//! digit (`120.5`, `0.0`, `80.0`); counts are plain base-10 integers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serializer;

pub fn join_dates(dates: &[NaiveDate]) -> String {
    let items: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
    items.join(",")
}

pub fn join_counts(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    items.join(",")
}

pub fn join_amounts(values: &[Decimal]) -> String {
    let items: Vec<String> = values.iter().map(format_amount).collect();
    items.join(",")
}

pub fn join_names(values: &[String]) -> String {
    values.join(",")
}

/// Render an amount with trailing zeros stripped but never as a bare
/// integer: `80.00` becomes `80.0`, zero becomes `0.0`.
pub fn format_amount(value: &Decimal) -> String {
    let normalized = value.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}

pub fn serialize_dates<S: Serializer>(dates: &[NaiveDate], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&join_dates(dates))
}

pub fn serialize_counts<S: Serializer>(values: &[i64], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&join_counts(values))
}

pub fn serialize_amounts<S: Serializer>(values: &[Decimal], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&join_amounts(values))
}

pub fn serialize_names<S: Serializer>(values: &[String], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&join_names(values))
}
