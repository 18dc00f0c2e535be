//! Workbook export tests: builds a throwaway template, runs the exporter
//! into a buffer, and reads the workbook back to verify the slot layout.

#[path = "../helpers/fakes.rs"]
mod fakes;

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use fakes::{FakeOrderRepository, FakeUserRepository, FixedClock};
use mealdesk::core::AppError;
use mealdesk::modules::orders::models::OrderStatus;
use mealdesk::modules::reports::services::ExportService;
use mealdesk::modules::workspace::services::WorkspaceService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, 0, 0).unwrap()
}

/// Write a minimal template workbook (a Sheet1 with nothing but labels)
/// to a temp directory and return its path.
fn write_template(dir: &tempfile::TempDir) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    sheet.get_cell_mut((1, 4)).set_value("营业额");
    sheet.get_cell_mut((3, 4)).set_value("订单完成率");

    let path = dir.path().join("report_template.xlsx");
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

struct Fixture {
    service: ExportService,
}

/// Today pinned to 2024-07-31; store holds one completed and one pending
/// order on 2024-07-29 plus one new user that day.
fn fixture(template_path: PathBuf) -> Fixture {
    let orders = Arc::new(FakeOrderRepository::new());
    let users = Arc::new(FakeUserRepository::new());
    let clock = Arc::new(FixedClock::at(at(2024, 7, 31, 8)));

    orders.push_order(OrderStatus::Completed, at(2024, 7, 29, 12), dec!(200.00));
    orders.push_order(OrderStatus::PendingPayment, at(2024, 7, 29, 13), dec!(35.00));
    users.push_user(at(2024, 7, 29, 9));

    let workspace = Arc::new(WorkspaceService::new(
        orders.clone(),
        users.clone(),
        clock.clone(),
    ));
    let service = ExportService::new(workspace, clock, template_path, 3);

    Fixture { service }
}

fn cell_number(sheet: &umya_spreadsheet::Worksheet, col: u32, row: u32) -> f64 {
    sheet.get_value((col, row)).parse::<f64>().unwrap()
}

#[tokio::test]
async fn export_fills_the_summary_and_daily_rows() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(&dir);
    let fx = fixture(template);

    let mut buffer = Cursor::new(Vec::new());
    fx.service.export_business_report(3, &mut buffer).await.unwrap();

    let bytes = buffer.into_inner();
    assert!(!bytes.is_empty());

    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true).unwrap();
    let sheet = book.get_sheet_by_name("Sheet1").unwrap();

    // Window is [today - 3d, today - 1d] = 2024-07-28 .. 2024-07-30
    assert_eq!(sheet.get_value((2, 2)), "时间：2024-07-28至2024-07-30");

    // Summary block: turnover, completion rate, new users / valid count, unit price
    assert!((cell_number(sheet, 2, 4) - 200.0).abs() < 1e-9);
    assert!((cell_number(sheet, 4, 4) - 0.5).abs() < 1e-9);
    assert!((cell_number(sheet, 6, 4) - 1.0).abs() < 1e-9);
    assert!((cell_number(sheet, 2, 5) - 1.0).abs() < 1e-9);
    assert!((cell_number(sheet, 4, 5) - 200.0).abs() < 1e-9);

    // Daily table starts at row 8; 2024-07-29 lands on row 9
    assert_eq!(sheet.get_value((1, 8)), "2024-07-28");
    assert_eq!(sheet.get_value((1, 9)), "2024-07-29");
    assert_eq!(sheet.get_value((1, 10)), "2024-07-30");

    assert!((cell_number(sheet, 2, 9) - 200.0).abs() < 1e-9);
    assert!((cell_number(sheet, 3, 9) - 1.0).abs() < 1e-9);
    assert!((cell_number(sheet, 4, 9) - 0.5).abs() < 1e-9);
    assert!((cell_number(sheet, 5, 9) - 200.0).abs() < 1e-9);
    assert!((cell_number(sheet, 6, 9) - 1.0).abs() < 1e-9);

    // Empty days zero-fill
    assert!((cell_number(sheet, 2, 8)).abs() < 1e-9);
    assert!((cell_number(sheet, 4, 8)).abs() < 1e-9);
}

#[tokio::test]
async fn missing_template_surfaces_an_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let fx = fixture(dir.path().join("no_such_template.xlsx"));

    let mut buffer = Cursor::new(Vec::new());
    let err = fx
        .service
        .export_business_report(3, &mut buffer)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Export(_)));
    // No partial output reaches the sink
    assert!(buffer.into_inner().is_empty());
}

#[tokio::test]
async fn non_positive_window_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(&dir);
    let fx = fixture(template);

    let mut buffer = Cursor::new(Vec::new());
    let err = fx
        .service
        .export_business_report(0, &mut buffer)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}
