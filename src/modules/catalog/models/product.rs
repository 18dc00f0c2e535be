use rust_decimal::Decimal;

/// Display fields of a sellable product (dish or set meal), as the cart
/// needs them. Catalog CRUD lives elsewhere; this module is read-only.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub name: String,
    pub image: String,
    pub price: Decimal,
}
