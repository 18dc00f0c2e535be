use std::io::{Seek, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use tracing::info;

use crate::core::{AppError, Clock, Result, TimeWindow};
use crate::modules::workspace::models::BusinessData;
use crate::modules::workspace::services::WorkspaceService;

/// Default length of the export window, ending yesterday.
pub const DEFAULT_EXPORT_DAYS: i64 = 30;

/// Sheet the template slots live on.
const TEMPLATE_SHEET: &str = "Sheet1";

/// First row of the per-day table (1-based).
const FIRST_DAILY_ROW: u32 = 8;

/// Fills the business-report workbook template and streams it to a sink.
///
/// Slot layout of the template (1-based rows/columns):
/// B2 header, row 4 B/D/F and row 5 B/D summary figures, then one row per
/// day starting at row 8 with date, turnover, valid orders, completion
/// rate, unit price and new users in columns A..F.
pub struct ExportService {
    workspace: Arc<WorkspaceService>,
    clock: Arc<dyn Clock>,
    template_path: PathBuf,
    window_days: i64,
}

impl ExportService {
    pub fn new(
        workspace: Arc<WorkspaceService>,
        clock: Arc<dyn Clock>,
        template_path: impl Into<PathBuf>,
        window_days: i64,
    ) -> Self {
        Self {
            workspace,
            clock,
            template_path: template_path.into(),
            window_days,
        }
    }

    /// Configured window length in days.
    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Export the report for `[today - days, today - 1]` into `out`.
    ///
    /// All data is fetched before the template is touched; a failure at any
    /// point surfaces an error and nothing is written to the sink.
    pub async fn export_business_report<W: Write + Seek>(
        &self,
        days: i64,
        out: &mut W,
    ) -> Result<()> {
        if days <= 0 {
            return Err(AppError::validation("export window must be at least one day"));
        }

        let today = self.clock.today();
        let begin = today - Duration::days(days);
        let end = today - Duration::days(1);
        info!(%begin, %end, "exporting business report");

        let summary = self
            .workspace
            .business_data(TimeWindow::spanning(begin, end))
            .await?;

        let mut daily: Vec<(NaiveDate, BusinessData)> = Vec::with_capacity(days as usize);
        for i in 0..days {
            let date = begin + Duration::days(i);
            let data = self.workspace.business_data(TimeWindow::for_day(date)).await?;
            daily.push((date, data));
        }

        let mut book = umya_spreadsheet::reader::xlsx::read(&self.template_path).map_err(|e| {
            AppError::export(format!(
                "failed to load template {}: {}",
                self.template_path.display(),
                e
            ))
        })?;
        let sheet = book
            .get_sheet_by_name_mut(TEMPLATE_SHEET)
            .ok_or_else(|| {
                AppError::export(format!("template is missing sheet {}", TEMPLATE_SHEET))
            })?;

        sheet
            .get_cell_mut((2, 2))
            .set_value(format!("时间：{}至{}", begin, end));

        sheet
            .get_cell_mut((2, 4))
            .set_value_number(amount_as_f64(&summary));
        sheet
            .get_cell_mut((4, 4))
            .set_value_number(summary.order_completion_rate);
        sheet
            .get_cell_mut((6, 4))
            .set_value_number(summary.new_users as f64);
        sheet
            .get_cell_mut((2, 5))
            .set_value_number(summary.valid_order_count as f64);
        sheet.get_cell_mut((4, 5)).set_value_number(summary.unit_price);

        for (i, (date, data)) in daily.iter().enumerate() {
            let row = FIRST_DAILY_ROW + i as u32;
            sheet.get_cell_mut((1, row)).set_value(date.to_string());
            sheet
                .get_cell_mut((2, row))
                .set_value_number(amount_as_f64(data));
            sheet
                .get_cell_mut((3, row))
                .set_value_number(data.valid_order_count as f64);
            sheet
                .get_cell_mut((4, row))
                .set_value_number(data.order_completion_rate);
            sheet.get_cell_mut((5, row)).set_value_number(data.unit_price);
            sheet
                .get_cell_mut((6, row))
                .set_value_number(data.new_users as f64);
        }

        umya_spreadsheet::writer::xlsx::write_writer(&book, out)
            .map_err(|e| AppError::export(format!("failed to write workbook: {}", e)))?;

        Ok(())
    }
}

fn amount_as_f64(data: &BusinessData) -> f64 {
    data.turnover.to_f64().unwrap_or(0.0)
}
