use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::{AppError, Result, UserContext};
use crate::modules::cart::models::AddToCartDto;
use crate::modules::cart::services::CartService;

/// Bind the caller's identity from the X-User-Id header.
///
/// Authentication itself lives upstream; by the time a request reaches this
/// service the gateway has resolved the user and forwards the id.
fn caller_from(req: &HttpRequest) -> Result<UserContext> {
    req.headers()
        .get("X-User-Id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .map(UserContext::new)
        .ok_or_else(|| AppError::validation("missing or invalid X-User-Id header"))
}

/// POST /user/shoppingCart/add
pub async fn add(
    service: web::Data<CartService>,
    req: HttpRequest,
    body: web::Json<AddToCartDto>,
) -> Result<HttpResponse> {
    let caller = caller_from(&req)?;
    service.add_item(&caller, &body).await?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /user/shoppingCart/list
pub async fn list(service: web::Data<CartService>, req: HttpRequest) -> Result<HttpResponse> {
    let caller = caller_from(&req)?;
    let items = service.list(&caller).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// DELETE /user/shoppingCart/clean
pub async fn clean(service: web::Data<CartService>, req: HttpRequest) -> Result<HttpResponse> {
    let caller = caller_from(&req)?;
    service.clean(&caller).await?;
    Ok(HttpResponse::Ok().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user/shoppingCart")
            .route("/add", web::post().to(add))
            .route("/list", web::get().to(list))
            .route("/clean", web::delete().to(clean)),
    );
}
