use chrono::{NaiveDate, NaiveDateTime};

use crate::core::error::{AppError, Result};

/// Expand `[begin, end]` into the inclusive list of calendar dates.
///
/// Both endpoints are included; the result is strictly ascending, one day
/// apart, with exactly `(end - begin).num_days() + 1` entries.
///
/// # Errors
/// Returns [`AppError::InvalidRange`] when `end < begin`. No other failure
/// mode exists; the enumeration itself is pure.
pub fn enumerate_days(begin: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < begin {
        return Err(AppError::invalid_range(format!(
            "end ({}) must not precede begin ({})",
            end, begin
        )));
    }

    Ok(begin.iter_days().take_while(|d| *d <= end).collect())
}

/// Closed date-time window used by all gateway range queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub begin: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Window covering one calendar day: `[00:00:00, 23:59:59.999999999]`.
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            begin: day_start(date),
            end: day_end(date),
        }
    }

    /// Window spanning whole days from `begin`'s start to `end`'s last instant.
    pub fn spanning(begin: NaiveDate, end: NaiveDate) -> Self {
        Self {
            begin: day_start(begin),
            end: day_end(end),
        }
    }
}

fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}

fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("end of day is a valid time")
}
