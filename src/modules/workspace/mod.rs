pub mod controllers;
pub mod models;
pub mod services;

pub use models::BusinessData;
pub use services::WorkspaceService;
