//! Behaviour every ProductRepository must share, run against each backend

#![allow(dead_code)]

use domain_products::*;
use test_utils::assertions::*;
use test_utils::TestDataBuilder;

fn new_product(builder: &TestDataBuilder, suffix: &str) -> NewProduct {
    NewProduct {
        title: builder.title("product", suffix),
        price: builder.price(),
        user_id: builder.user_id(),
    }
}

/// Create then fetch by the returned id
pub async fn create_then_get<R: ProductRepository>(repo: &R) {
    let builder = TestDataBuilder::from_test_name("create_then_get");
    let input = new_product(&builder, "main");

    let created = repo.create_product(input.clone()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.title, input.title);
    assert_eq!(created.price, input.price);
    assert_eq!(created.user_id, input.user_id);

    let fetched = repo.get_product_by_id(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, created.title);
    assert_eq!(fetched.price, created.price);
}

/// Unknown id is NotFound, never an internal error
pub async fn missing_id_is_not_found<R: ProductRepository>(repo: &R) {
    let err = assert_err(repo.get_product_by_id(999_999).await, "unknown id");

    assert!(err.is_not_found());
    assert_eq!(err.status().as_u16(), 404);
    assert_eq!(err.to_string(), "NOT_FOUND");
    assert_eq!(err.message(), PRODUCT_NOT_FOUND);
}

/// Expects an empty store
pub async fn empty_store_lists_nothing<R: ProductRepository>(repo: &R) {
    let products = repo.get_products().await.unwrap();
    assert!(products.is_empty());
}

pub async fn list_is_ordered_by_id<R: ProductRepository>(repo: &R) {
    let builder = TestDataBuilder::from_test_name("list_is_ordered_by_id");
    for suffix in ["a", "b", "c"] {
        repo.create_product(new_product(&builder, suffix))
            .await
            .unwrap();
    }

    let ids: Vec<i32> = repo
        .get_products()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();

    assert!(ids.len() >= 3);
    assert_ascending(&ids, "get_products");
}

/// Only title and price change; the store bumps updated_at
pub async fn update_changes_title_and_price<R: ProductRepository>(repo: &R) {
    let builder = TestDataBuilder::from_test_name("update_changes_title_and_price");
    let created = repo
        .create_product(new_product(&builder, "before"))
        .await
        .unwrap();

    repo.update_product_by_id(UpdateProduct {
        id: created.id,
        title: builder.title("product", "after"),
        price: created.price + 1,
    })
    .await
    .unwrap();

    let updated = repo.get_product_by_id(created.id).await.unwrap();
    assert_eq!(updated.title, builder.title("product", "after"));
    assert_eq!(updated.price, created.price + 1);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, created.user_id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

pub async fn update_missing_is_not_found<R: ProductRepository>(repo: &R) {
    let err = assert_err(
        repo.update_product_by_id(UpdateProduct {
            id: 999_999,
            title: "nobody".to_string(),
            price: 1,
        })
        .await,
        "update unknown id",
    );
    assert!(err.is_not_found());
}

/// Delete confirms, the product is gone, and deleting it again still confirms
pub async fn delete_then_get_is_not_found<R: ProductRepository>(repo: &R) {
    let builder = TestDataBuilder::from_test_name("delete_then_get_is_not_found");
    let created = repo
        .create_product(new_product(&builder, "doomed"))
        .await
        .unwrap();

    let confirmation = repo.delete_product(created.id).await.unwrap();
    assert_eq!(confirmation, DeleteConfirmation::default());

    assert!(repo
        .get_product_by_id(created.id)
        .await
        .unwrap_err()
        .is_not_found());
    assert_eq!(
        repo.delete_product(created.id).await.unwrap(),
        DeleteConfirmation::default()
    );
}

pub async fn delete_missing_id_confirms<R: ProductRepository>(repo: &R) {
    let confirmation = repo.delete_product(999_999).await.unwrap();

    assert_eq!(confirmation.status_code, 200);
    assert_eq!(confirmation.message, PRODUCT_DELETED);
}

pub async fn ids_are_not_reused<R: ProductRepository>(repo: &R) {
    let builder = TestDataBuilder::from_test_name("ids_are_not_reused");
    let first = repo
        .create_product(new_product(&builder, "first"))
        .await
        .unwrap();
    repo.delete_product(first.id).await.unwrap();

    let second = repo
        .create_product(new_product(&builder, "second"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}
