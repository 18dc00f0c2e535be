use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Settings for the business-report workbook export
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Path to the XLSX template the exporter fills in
    pub template_path: String,
    /// Length of the export window in days, ending yesterday
    pub window_days: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            export: ExportConfig {
                template_path: env::var("EXPORT_TEMPLATE_PATH")
                    .unwrap_or_else(|_| "template/运营数据报表模板.xlsx".to_string()),
                window_days: env::var("EXPORT_WINDOW_DAYS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid EXPORT_WINDOW_DAYS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.export.window_days <= 0 {
            return Err(AppError::Configuration(
                "Export window must be at least one day".to_string(),
            ));
        }

        if self.export.template_path.is_empty() {
            return Err(AppError::Configuration(
                "Export template path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
