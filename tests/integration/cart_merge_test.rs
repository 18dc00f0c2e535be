//! Shopping-cart merge tests: lookup-or-create semantics and the
//! one-row-per-triple invariant.

#[path = "../helpers/fakes.rs"]
mod fakes;

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;

use fakes::{FakeCartRepository, FakeCatalogRepository, FixedClock};
use mealdesk::core::{AppError, UserContext};
use mealdesk::modules::cart::models::AddToCartDto;
use mealdesk::modules::cart::services::CartService;
use mealdesk::modules::catalog::models::Product;

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 7, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

fn dish_dto(dish_id: i64, flavor: Option<&str>) -> AddToCartDto {
    AddToCartDto {
        dish_id: Some(dish_id),
        setmeal_id: None,
        dish_flavor: flavor.map(str::to_string),
    }
}

struct Fixture {
    cart: Arc<FakeCartRepository>,
    clock: Arc<FixedClock>,
    service: CartService,
}

fn fixture() -> Fixture {
    let cart = Arc::new(FakeCartRepository::new());
    let catalog = Arc::new(FakeCatalogRepository::new());
    let clock = Arc::new(FixedClock::at(at(12, 0)));

    catalog.put_dish(
        7,
        Product {
            name: "麻婆豆腐".to_string(),
            image: "mapo.png".to_string(),
            price: dec!(18.50),
        },
    );
    catalog.put_setmeal(
        3,
        Product {
            name: "工作日套餐".to_string(),
            image: "setmeal.png".to_string(),
            price: dec!(32.00),
        },
    );

    let service = CartService::new(cart.clone(), catalog, clock.clone());
    Fixture {
        cart,
        clock,
        service,
    }
}

#[tokio::test]
async fn repeated_adds_merge_into_one_row() {
    let fx = fixture();
    let caller = UserContext::new(3);
    let dto = dish_dto(7, Some("辣"));

    fx.service.add_item(&caller, &dto).await.unwrap();
    let first_add_time = fx.cart.all_rows()[0].create_time;

    // Later adds must bump the count and keep the original create_time
    fx.clock.set(at(12, 5));
    fx.service.add_item(&caller, &dto).await.unwrap();
    fx.clock.set(at(12, 10));
    fx.service.add_item(&caller, &dto).await.unwrap();

    let rows = fx.cart.all_rows();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.number, 3);
    assert_eq!(row.name, "麻婆豆腐");
    assert_eq!(row.image, "mapo.png");
    assert_eq!(row.amount, dec!(18.50));
    assert_eq!(row.create_time, first_add_time);
    assert_eq!(row.create_time, at(12, 0));
}

#[tokio::test]
async fn different_flavors_create_separate_rows() {
    let fx = fixture();
    let caller = UserContext::new(3);

    fx.service.add_item(&caller, &dish_dto(7, Some("辣"))).await.unwrap();
    fx.service.add_item(&caller, &dish_dto(7, Some("不辣"))).await.unwrap();

    let rows = fx.cart.all_rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.number == 1));
}

#[tokio::test]
async fn setmeal_adds_hydrate_from_the_setmeal_gateway() {
    let fx = fixture();
    let caller = UserContext::new(9);
    let dto = AddToCartDto {
        dish_id: None,
        setmeal_id: Some(3),
        dish_flavor: None,
    };

    fx.service.add_item(&caller, &dto).await.unwrap();

    let rows = fx.service.list(&caller).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "工作日套餐");
    assert_eq!(rows[0].amount, dec!(32.00));
    assert_eq!(rows[0].setmeal_id, Some(3));
    assert_eq!(rows[0].dish_id, None);
}

#[tokio::test]
async fn carts_are_isolated_per_user() {
    let fx = fixture();
    let dto = dish_dto(7, None);

    fx.service.add_item(&UserContext::new(1), &dto).await.unwrap();
    fx.service.add_item(&UserContext::new(2), &dto).await.unwrap();
    fx.service.add_item(&UserContext::new(2), &dto).await.unwrap();

    assert_eq!(fx.service.list(&UserContext::new(1)).await.unwrap().len(), 1);
    let user2 = fx.service.list(&UserContext::new(2)).await.unwrap();
    assert_eq!(user2.len(), 1);
    assert_eq!(user2[0].number, 2);
}

#[tokio::test]
async fn unknown_dish_is_rejected_and_nothing_is_inserted() {
    let fx = fixture();
    let caller = UserContext::new(3);

    let err = fx
        .service
        .add_item(&caller, &dish_dto(404, None))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(fx.cart.all_rows().is_empty());
}

#[tokio::test]
async fn product_reference_must_be_exclusive() {
    let fx = fixture();
    let caller = UserContext::new(3);

    let both = AddToCartDto {
        dish_id: Some(7),
        setmeal_id: Some(3),
        dish_flavor: None,
    };
    let err = fx.service.add_item(&caller, &both).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let neither = AddToCartDto {
        dish_id: None,
        setmeal_id: None,
        dish_flavor: None,
    };
    let err = fx.service.add_item(&caller, &neither).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(fx.cart.all_rows().is_empty());
}

#[tokio::test]
async fn clean_empties_only_the_callers_cart() {
    let fx = fixture();
    let dto = dish_dto(7, None);

    fx.service.add_item(&UserContext::new(1), &dto).await.unwrap();
    fx.service.add_item(&UserContext::new(2), &dto).await.unwrap();

    fx.service.clean(&UserContext::new(1)).await.unwrap();

    assert!(fx.service.list(&UserContext::new(1)).await.unwrap().is_empty());
    assert_eq!(fx.service.list(&UserContext::new(2)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn number_tracks_the_count_of_adds() {
    let fx = fixture();
    let caller = UserContext::new(5);
    let dto = dish_dto(7, Some("微辣"));

    for i in 1..=6 {
        fx.clock.set(at(12, 0) + Duration::minutes(i));
        fx.service.add_item(&caller, &dto).await.unwrap();
        let rows = fx.cart.all_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, i as i32);
    }
}
