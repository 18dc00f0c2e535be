mod export_service;
mod report_service;

pub use export_service::{ExportService, DEFAULT_EXPORT_DAYS};
pub use report_service::{ReportService, TOP_SELLERS_LIMIT};
