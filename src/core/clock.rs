use chrono::{Local, NaiveDate, NaiveDateTime};

/// Wall-clock source, injected into every service that reads "now".
///
/// Production uses [`SystemClock`]; tests substitute a fixed clock so the
/// export window and scanner cutoffs are deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
