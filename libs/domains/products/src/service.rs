//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::MessageResult;
use crate::models::{DataResponse, DeleteConfirmation, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Translates repository outcomes into caller-facing results.
///
/// Payloads are passed through as given; request validation belongs to the
/// caller (the DTOs derive `Validate` for that). Errors from the repository
/// are forwarded unchanged and successful payloads are wrapped in a
/// [`DataResponse`]. The service keeps no state besides the repository handed
/// to [`ProductService::new`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Insert a product; the envelope carries status 201
    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn create_product(&self, input: NewProduct) -> MessageResult<DataResponse<Product>> {
        let product = self.repository.create_product(input).await?;

        Ok(DataResponse::created(
            "product has been successfully created",
            product,
        ))
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i32) -> MessageResult<DataResponse<Product>> {
        let product = self.repository.get_product_by_id(id).await?;

        Ok(DataResponse::ok("product data fetched", product))
    }

    /// All products; an empty list is still a success
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> MessageResult<DataResponse<Vec<Product>>> {
        let products = self.repository.get_products().await?;

        tracing::debug!(count = products.len(), "Fetched products");
        Ok(DataResponse::ok("products data fetched", products))
    }

    /// Update title and price, then return the stored product
    #[instrument(skip(self, input), fields(product_id = input.id))]
    pub async fn update_product_by_id(
        &self,
        input: UpdateProduct,
    ) -> MessageResult<DataResponse<Product>> {
        let id = input.id;
        self.repository.update_product_by_id(input).await?;
        let product = self.repository.get_product_by_id(id).await?;

        Ok(DataResponse::ok(
            "product has been successfully updated",
            product,
        ))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> MessageResult<DeleteConfirmation> {
        self.repository.delete_product(id).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
