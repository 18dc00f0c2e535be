use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mealdesk::config::Config;
use mealdesk::core::{Clock, SystemClock};
use mealdesk::modules::cart::repositories::{CartRepository, MySqlCartRepository};
use mealdesk::modules::cart::services::CartService;
use mealdesk::modules::catalog::repositories::{CatalogRepository, MySqlCatalogRepository};
use mealdesk::modules::orders::repositories::{MySqlOrderRepository, OrderRepository};
use mealdesk::modules::orders::services::LifecycleScanner;
use mealdesk::modules::reports::services::{ExportService, ReportService};
use mealdesk::modules::users::repositories::{MySqlUserRepository, UserRepository};
use mealdesk::modules::workspace::services::WorkspaceService;
use mealdesk::modules::{cart, reports, workspace};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mealdesk=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting MealDesk back-office service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized (max {} connections)",
        config.database.max_connections
    );

    // Store gateways
    let orders: Arc<dyn OrderRepository> = Arc::new(MySqlOrderRepository::new(db_pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(db_pool.clone()));
    let catalog: Arc<dyn CatalogRepository> =
        Arc::new(MySqlCatalogRepository::new(db_pool.clone()));
    let cart_repo: Arc<dyn CartRepository> = Arc::new(MySqlCartRepository::new(db_pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Services
    let report_service = web::Data::new(ReportService::new(orders.clone(), users.clone()));
    let workspace_service = Arc::new(WorkspaceService::new(
        orders.clone(),
        users.clone(),
        clock.clone(),
    ));
    let export_service = web::Data::new(ExportService::new(
        workspace_service.clone(),
        clock.clone(),
        config.export.template_path.clone(),
        config.export.window_days,
    ));
    let workspace_data = web::Data::from(workspace_service);
    let cart_service = web::Data::new(CartService::new(cart_repo, catalog, clock.clone()));

    // Lifecycle scanner runs as background tasks for the whole process
    let scanner = Arc::new(LifecycleScanner::new(orders, clock));
    tokio::spawn(scanner.clone().run_payment_timeout_loop());
    tokio::spawn(scanner.run_stale_delivery_loop());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        App::new()
            .app_data(report_service.clone())
            .app_data(export_service.clone())
            .app_data(workspace_data.clone())
            .app_data(cart_service.clone())
            .configure(reports::controllers::configure_routes)
            .configure(workspace::controllers::configure_routes)
            .configure(cart::controllers::configure_routes)
            .route("/health", web::get().to(health_check))
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mealdesk"
    }))
}
