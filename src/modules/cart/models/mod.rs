mod cart_item;

pub use cart_item::{AddToCartDto, CartItem, CartProbe, NewCartItem};
