pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Order, OrderCountQuery, OrderStatus, SalesRank};
pub use repositories::OrderRepository;
pub use services::LifecycleScanner;
