//! MealDesk back-office service
//!
//! Service tier for a food-ordering back office: date-bucketed business
//! reports, workbook export, the order-lifecycle scanner and the
//! shopping-cart merge, all layered over trait-based store gateways.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::cart;
pub use modules::orders;
pub use modules::reports;
pub use modules::workspace;
