use std::sync::Arc;

use tracing::info;

use crate::core::{AppError, Clock, Result, UserContext};
use crate::modules::cart::models::{AddToCartDto, CartItem, CartProbe, NewCartItem};
use crate::modules::cart::repositories::CartRepository;
use crate::modules::catalog::repositories::CatalogRepository;

/// Shopping-cart service: lookup-or-create merge plus list/clean.
pub struct CartService {
    cart: Arc<dyn CartRepository>,
    catalog: Arc<dyn CatalogRepository>,
    clock: Arc<dyn Clock>,
}

impl CartService {
    pub fn new(
        cart: Arc<dyn CartRepository>,
        catalog: Arc<dyn CatalogRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cart,
            catalog,
            clock,
        }
    }

    /// Add one unit of a product to the caller's cart.
    ///
    /// If a row for the same `(user, product, flavor)` triple already
    /// exists its `number` is incremented; otherwise a new row is inserted
    /// with display fields hydrated from the catalog.
    ///
    /// # Errors
    /// - [`AppError::Validation`] unless exactly one of dishId/setmealId is set
    /// - [`AppError::NotFound`] when the referenced product does not exist
    pub async fn add_item(&self, caller: &UserContext, dto: &AddToCartDto) -> Result<()> {
        dto.validate()?;

        let probe = CartProbe::from_dto(caller, dto);
        let existing = self.cart.list(&probe).await?;

        if let Some(row) = existing.first() {
            self.cart.update_number(row.id, row.number + 1).await?;
            info!(
                user_id = caller.user_id,
                cart_id = row.id,
                number = row.number + 1,
                "cart row incremented"
            );
            return Ok(());
        }

        let product = match (dto.dish_id, dto.setmeal_id) {
            (Some(dish_id), _) => self
                .catalog
                .dish_by_id(dish_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("dish {}", dish_id)))?,
            (_, Some(setmeal_id)) => self
                .catalog
                .setmeal_by_id(setmeal_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("setmeal {}", setmeal_id)))?,
            // validate() rules this out
            (None, None) => unreachable!("validated product reference"),
        };

        let item = NewCartItem {
            user_id: caller.user_id,
            dish_id: dto.dish_id,
            setmeal_id: dto.setmeal_id,
            dish_flavor: dto.dish_flavor.clone(),
            name: product.name,
            image: product.image,
            amount: product.price,
            number: 1,
            create_time: self.clock.now(),
        };
        self.cart.insert(&item).await?;
        info!(user_id = caller.user_id, name = %item.name, "cart row created");

        Ok(())
    }

    /// All rows in the caller's cart.
    pub async fn list(&self, caller: &UserContext) -> Result<Vec<CartItem>> {
        self.cart.list(&CartProbe::for_user(caller)).await
    }

    /// Empty the caller's cart.
    pub async fn clean(&self, caller: &UserContext) -> Result<()> {
        self.cart.clear(caller.user_id).await
    }
}
