pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{AddToCartDto, CartItem, CartProbe, NewCartItem};
pub use repositories::CartRepository;
pub use services::CartService;
