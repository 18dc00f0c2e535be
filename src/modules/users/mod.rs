pub mod repositories;

pub use repositories::{UserCountFilter, UserRepository};
