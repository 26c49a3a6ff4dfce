use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{MessageErr, MessageResult, PRODUCT_NOT_FOUND, STORE_FAILURE};
use crate::models::{DeleteConfirmation, NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Every implementation reports a missing product as
/// [`MessageErr::NotFound`] and any store fault as
/// [`MessageErr::InternalServerError`]; nothing is retried.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the returned entity carries the store-assigned id
    async fn create_product(&self, input: NewProduct) -> MessageResult<Product>;

    /// Fetch exactly one product
    async fn get_product_by_id(&self, id: i32) -> MessageResult<Product>;

    /// All products, ascending by id. An empty store is not an error.
    async fn get_products(&self) -> MessageResult<Vec<Product>>;

    /// Replace title and price. Fails with NotFound when no row matches.
    async fn update_product_by_id(&self, input: UpdateProduct) -> MessageResult<()>;

    /// Hard delete. Confirms even when no row matched; only store faults fail.
    async fn delete_product(&self, id: i32) -> MessageResult<DeleteConfirmation>;
}

/// Lets a service hold `Arc<dyn ProductRepository>` chosen at runtime
#[async_trait]
impl<T: ProductRepository + ?Sized> ProductRepository for Arc<T> {
    async fn create_product(&self, input: NewProduct) -> MessageResult<Product> {
        (**self).create_product(input).await
    }

    async fn get_product_by_id(&self, id: i32) -> MessageResult<Product> {
        (**self).get_product_by_id(id).await
    }

    async fn get_products(&self) -> MessageResult<Vec<Product>> {
        (**self).get_products().await
    }

    async fn update_product_by_id(&self, input: UpdateProduct) -> MessageResult<()> {
        (**self).update_product_by_id(input).await
    }

    async fn delete_product(&self, id: i32) -> MessageResult<DeleteConfirmation> {
        (**self).delete_product(id).await
    }
}

#[derive(Debug, Default)]
struct InMemoryState {
    products: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids come from a counter that only grows, so deleted ids are never handed
/// out again. Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create_product(&self, input: NewProduct) -> MessageResult<Product> {
        let mut state = self.state.write().await;

        let id = state.last_id.checked_add(1).ok_or_else(|| {
            tracing::error!(last_id = state.last_id, "Product id space exhausted");
            MessageErr::internal_server_error(STORE_FAILURE)
        })?;
        state.last_id = id;
        let now = Utc::now();
        let product = Product {
            id,
            title: input.title,
            price: input.price,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };
        state.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_product_by_id(&self, id: i32) -> MessageResult<Product> {
        let state = self.state.read().await;
        state
            .products
            .get(&id)
            .cloned()
            .ok_or_else(|| MessageErr::not_found(PRODUCT_NOT_FOUND))
    }

    async fn get_products(&self) -> MessageResult<Vec<Product>> {
        let state = self.state.read().await;
        Ok(state.products.values().cloned().collect())
    }

    async fn update_product_by_id(&self, input: UpdateProduct) -> MessageResult<()> {
        let mut state = self.state.write().await;
        let product = state
            .products
            .get_mut(&input.id)
            .ok_or_else(|| MessageErr::not_found(PRODUCT_NOT_FOUND))?;

        product.title = input.title;
        product.price = input.price;
        product.updated_at = Utc::now();

        tracing::info!(product_id = input.id, "Updated product");
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> MessageResult<DeleteConfirmation> {
        let mut state = self.state.write().await;
        let removed = state.products.remove(&id).is_some();

        tracing::info!(product_id = id, removed, "Deleted product");
        Ok(DeleteConfirmation::default())
    }
}
