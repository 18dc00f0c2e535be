mod report;
pub mod series;

pub use report::{OrderReportVo, SalesTopReportVo, TurnoverReportVo, UserReportVo};
