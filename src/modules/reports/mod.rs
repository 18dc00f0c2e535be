pub mod controllers;
pub mod models;
pub mod services;

pub use models::{OrderReportVo, SalesTopReportVo, TurnoverReportVo, UserReportVo};
pub use services::{ExportService, ReportService};
