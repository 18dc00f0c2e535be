pub mod clock;
pub mod context;
pub mod date_range;
pub mod error;

pub use clock::{Clock, SystemClock};
pub use context::UserContext;
pub use date_range::{enumerate_days, TimeWindow};
pub use error::{AppError, Result};
