use std::io::Cursor;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::Result;
use crate::modules::reports::services::{ExportService, ReportService};

/// Query parameters shared by all report endpoints (inclusive dates,
/// format `YYYY-MM-DD`).
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

/// GET /admin/report/turnoverStatistics
pub async fn turnover_statistics(
    service: web::Data<ReportService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse> {
    let report = service.turnover_statistics(query.begin, query.end).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /admin/report/userStatistics
pub async fn user_statistics(
    service: web::Data<ReportService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse> {
    let report = service.user_statistics(query.begin, query.end).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /admin/report/ordersStatistics
pub async fn orders_statistics(
    service: web::Data<ReportService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse> {
    let report = service.order_statistics(query.begin, query.end).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /admin/report/top10
pub async fn top10(
    service: web::Data<ReportService>,
    query: web::Query<DateRangeQuery>,
) -> Result<HttpResponse> {
    let report = service.sales_top10(query.begin, query.end).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /admin/report/export
///
/// Streams the populated workbook as an attachment. The workbook is built
/// in memory first, so a mid-export failure never leaks a partial file.
pub async fn export(service: web::Data<ExportService>) -> Result<HttpResponse> {
    let mut buffer = Cursor::new(Vec::new());
    service
        .export_business_report(service.window_days(), &mut buffer)
        .await?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"business_report.xlsx\"",
        ))
        .body(buffer.into_inner()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/report")
            .route("/turnoverStatistics", web::get().to(turnover_statistics))
            .route("/userStatistics", web::get().to(user_statistics))
            .route("/ordersStatistics", web::get().to(orders_statistics))
            .route("/top10", web::get().to(top10))
            .route("/export", web::get().to(export)),
    );
}
