pub mod cart;
pub mod catalog;
pub mod orders;
pub mod reports;
pub mod users;
pub mod workspace;
