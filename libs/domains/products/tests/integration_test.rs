//! Integration tests for the Products domain
//!
//! These run against a real PostgreSQL started through testcontainers, with
//! the schema from `manifests/migrations/mydatabase/` applied. They need a
//! Docker daemon: `cargo test -p domain_products -- --ignored`.

mod common;

use core_config::Environment;
use database::common::RetryConfig;
use database::postgres::{check_health, check_health_detailed, connect_with_retry};
use domain_products::*;
use test_utils::TestDatabase;

async fn setup() -> (TestDatabase, PgProductRepository) {
    core_config::tracing::init_tracing(&Environment::Development);

    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());
    (db, repo)
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_create_then_get() {
    let (_db, repo) = setup().await;
    common::create_then_get(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_missing_id_is_not_found() {
    let (_db, repo) = setup().await;
    common::missing_id_is_not_found(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_empty_store_lists_nothing() {
    let (_db, repo) = setup().await;
    common::empty_store_lists_nothing(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_list_is_ordered_by_id() {
    let (_db, repo) = setup().await;
    common::list_is_ordered_by_id(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_update_changes_title_and_price() {
    let (_db, repo) = setup().await;
    common::update_changes_title_and_price(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_update_missing_is_not_found() {
    let (_db, repo) = setup().await;
    common::update_missing_is_not_found(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_delete_then_get_is_not_found() {
    let (_db, repo) = setup().await;
    common::delete_then_get_is_not_found(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_delete_missing_id_confirms() {
    let (_db, repo) = setup().await;
    common::delete_missing_id_confirms(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_ids_are_not_reused() {
    let (_db, repo) = setup().await;
    common::ids_are_not_reused(&repo).await;
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_reset_products_empties_table() {
    let (db, repo) = setup().await;
    common::create_then_get(&repo).await;

    db.reset_products().await;

    common::empty_store_lists_nothing(&repo).await;
}

// ============================================================================
// Failure Translation
// ============================================================================

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_missing_table_is_internal_server_error() {
    let (db, repo) = setup().await;
    db.execute("DROP TABLE products").await;

    let err = repo.get_products().await.unwrap_err();

    assert_eq!(err, MessageErr::internal_server_error(STORE_FAILURE));
    assert_eq!(err.status().as_u16(), 500);
}

// ============================================================================
// Service over PostgreSQL
// ============================================================================

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_service_lifecycle_over_pool_with_retry() {
    let db = TestDatabase::new().await;

    let pool = connect_with_retry(
        &db.connection_string,
        Some(RetryConfig::new().with_max_retries(3).with_initial_delay(50)),
    )
    .await
    .unwrap();
    check_health(&pool).await.unwrap();
    assert!(check_health_detailed(&pool).await.healthy);

    let service = ProductService::new(PgProductRepository::new(pool));

    let created = service
        .create_product(NewProduct {
            title: "Test product".to_string(),
            price: 2000,
            user_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(created.status_code, 201);

    let updated = service
        .update_product_by_id(UpdateProduct {
            id: created.data.id,
            title: "Renamed product".to_string(),
            price: 2500,
        })
        .await
        .unwrap();
    assert_eq!(updated.data.title, "Renamed product");
    assert_eq!(updated.data.created_at, created.data.created_at);

    let deleted = service.delete_product(created.data.id).await.unwrap();
    assert_eq!(deleted.status_code, 200);

    let err = service
        .get_product_by_id(created.data.id)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "NOT_FOUND");
}

#[tokio::test]
#[ignore = "needs a Docker daemon"]
async fn test_service_stores_payload_as_given() {
    let (_db, repo) = setup().await;
    let service = ProductService::new(repo.clone());

    let created = service
        .create_product(NewProduct {
            title: "Clearance".to_string(),
            price: -5,
            user_id: 1,
        })
        .await
        .unwrap();

    let stored = repo.get_product_by_id(created.data.id).await.unwrap();
    assert_eq!(stored.price, -5);
}
