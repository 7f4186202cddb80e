//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::error::{
    INVALID_PRODUCT_DATA, MISSING_PRODUCT_ID, ProductError, ProductResult,
};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;

/// Validates requests before they reach the repository.
///
/// Absent input is rejected here without touching storage; storage
/// failures pass through unchanged.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product from a possibly missing payload
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: Option<CreateProduct>) -> ProductResult<Product> {
        info!("create_product invoked");

        let Some(input) = input else {
            warn!("Missing product data");
            return Err(ProductError::Validation(INVALID_PRODUCT_DATA.to_string()));
        };

        if let Err(e) = input.validate() {
            warn!(errors = %e, "Invalid product data");
            return Err(ProductError::Validation(INVALID_PRODUCT_DATA.to_string()));
        }

        let product = self.repository.create(input).await?;

        info!(product_id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Option<i32>) -> ProductResult<Product> {
        info!("get_product invoked");

        let Some(id) = id else {
            warn!("Missing product id");
            return Err(ProductError::Validation(MISSING_PRODUCT_ID.to_string()));
        };

        let product = self.repository.get_by_id(id).await?.ok_or_else(|| {
            warn!(product_id = id, "Product not found");
            ProductError::NotFound(id)
        })?;

        info!(product_id = id, "Product retrieved");
        Ok(product)
    }

    /// Every product, in storage order
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ProductResult<Vec<Product>> {
        info!("get_products invoked");

        let products = self.repository.list().await?;

        info!(count = products.len(), "Products retrieved");
        Ok(products)
    }
}
