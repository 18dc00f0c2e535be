use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result, UserContext};

/// Persisted shopping-cart row.
///
/// Exactly one of `dish_id` / `setmeal_id` is set. At most one row exists
/// per `(user_id, product, dish_flavor)` triple; re-adding the same product
/// bumps `number` instead of inserting.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub dish_id: Option<i64>,
    pub setmeal_id: Option<i64>,
    pub dish_flavor: Option<String>,
    pub name: String,
    pub image: String,
    pub amount: Decimal,
    pub number: i32,
    pub create_time: NaiveDateTime,
}

/// Cart row before it has a database id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub user_id: i64,
    pub dish_id: Option<i64>,
    pub setmeal_id: Option<i64>,
    pub dish_flavor: Option<String>,
    pub name: String,
    pub image: String,
    pub amount: Decimal,
    pub number: i32,
    pub create_time: NaiveDateTime,
}

/// Request body for adding a product to the cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartDto {
    pub dish_id: Option<i64>,
    pub setmeal_id: Option<i64>,
    pub dish_flavor: Option<String>,
}

impl AddToCartDto {
    /// Enforce the exclusive product reference before any store access.
    pub fn validate(&self) -> Result<()> {
        match (self.dish_id, self.setmeal_id) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(AppError::validation(
                "exactly one of dishId or setmealId must be set",
            )),
        }
    }
}

/// Lookup key identifying a cart row within one user's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartProbe {
    pub user_id: i64,
    pub dish_id: Option<i64>,
    pub setmeal_id: Option<i64>,
    pub dish_flavor: Option<String>,
}

impl CartProbe {
    /// Probe matching every row of the caller's cart.
    pub fn for_user(caller: &UserContext) -> Self {
        Self {
            user_id: caller.user_id,
            dish_id: None,
            setmeal_id: None,
            dish_flavor: None,
        }
    }

    pub fn from_dto(caller: &UserContext, dto: &AddToCartDto) -> Self {
        Self {
            user_id: caller.user_id,
            dish_id: dto.dish_id,
            setmeal_id: dto.setmeal_id,
            dish_flavor: dto.dish_flavor.clone(),
        }
    }
}
