use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::workspace::services::WorkspaceService;

/// GET /admin/workspace/businessData
pub async fn business_data(service: web::Data<WorkspaceService>) -> Result<HttpResponse> {
    let data = service.today().await?;
    Ok(HttpResponse::Ok().json(data))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/workspace").route("/businessData", web::get().to(business_data)),
    );
}
