//! Category Service - Business logic layer

use domain_products::{Product, ProductRepository, UpdateProduct};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::error::{
    CategoryError, CategoryResult, INVALID_CATEGORY_DATA,
    INVALID_PRODUCT_MAPPING, MISSING_CATEGORY_ID,
};
use crate::models::{AddProductsResult, AddProductsToCategory, Category, CreateCategory};
use crate::repository::CategoryRepository;

pub const PRODUCTS_ADDED: &str = "Products added to category successfully";

/// Category operations, including attaching products in bulk.
///
/// The bulk path writes every product concurrently and fails as a whole on
/// the first error. Writes that already landed stay; writes still running
/// are left to finish.
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    categories: Arc<C>,
    products: Arc<P>,
}

impl<C, P> CategoryService<C, P>
where
    C: CategoryRepository,
    P: ProductRepository + 'static,
{
    pub fn new(categories: C, products: P) -> Self {
        Self {
            categories: Arc::new(categories),
            products: Arc::new(products),
        }
    }

    #[instrument(skip(self, input))]
    pub async fn create_category(&self, input: Option<CreateCategory>) -> CategoryResult<Category> {
        info!("create_category invoked");

        let Some(input) = input else {
            warn!("Missing category data");
            return Err(CategoryError::Validation(INVALID_CATEGORY_DATA.to_string()));
        };

        if let Err(e) = input.validate() {
            warn!(errors = %e, "Invalid category data");
            return Err(CategoryError::Validation(INVALID_CATEGORY_DATA.to_string()));
        }

        let category = self.categories.create(input).await?;

        info!(
            category_id = category.id,
            products = category.products.len(),
            "Category created"
        );
        Ok(category)
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: Option<i32>) -> CategoryResult<Category> {
        info!("get_category invoked");

        let Some(id) = id else {
            warn!("Missing category id");
            return Err(CategoryError::Validation(MISSING_CATEGORY_ID.to_string()));
        };

        let category = self.categories.get_by_id(id).await?.ok_or_else(|| {
            warn!(category_id = id, "Category not found");
            CategoryError::NotFound(id)
        })?;

        info!(category_id = id, "Category retrieved");
        Ok(category)
    }

    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> CategoryResult<Vec<Category>> {
        info!("get_categories invoked");

        let categories = self.categories.list().await?;

        info!(count = categories.len(), "Categories retrieved");
        Ok(categories)
    }

    /// Point every existing product in the request at the category.
    ///
    /// Unknown product ids are dropped. Each update runs in its own task.
    #[instrument(skip(self, input))]
    pub async fn add_products_to_category(
        &self,
        input: Option<AddProductsToCategory>,
    ) -> CategoryResult<AddProductsResult> {
        info!("add_products_to_category invoked");

        let (category_id, product_ids) = match input {
            Some(AddProductsToCategory {
                category: Some(category),
                products: Some(products),
            }) if !products.is_empty() => (category, products),
            _ => {
                warn!("Missing category id or product ids");
                return Err(CategoryError::Validation(INVALID_PRODUCT_MAPPING.to_string()));
            }
        };

        if self.categories.get_by_id(category_id).await?.is_none() {
            warn!(category_id, "Category not found");
            return Err(CategoryError::NotFound(category_id));
        }

        let matched = self.products.get_by_ids(&product_ids).await?;
        info!(
            category_id,
            requested = product_ids.len(),
            matched = matched.len(),
            "Updating products"
        );

        let updated_products = self.assign_all(matched, category_id).await?;

        info!(
            category_id,
            updated = updated_products.len(),
            "Products added to category"
        );
        Ok(AddProductsResult {
            message: PRODUCTS_ADDED.to_string(),
            updated_products,
        })
    }

    async fn assign_all(
        &self,
        products: Vec<Product>,
        category_id: i32,
    ) -> CategoryResult<Vec<Product>> {
        // Dropping a JoinHandle detaches the task, so an early failure
        // leaves the remaining updates running.
        let handles: Vec<_> = products
            .into_iter()
            .map(|product| {
                let repository = Arc::clone(&self.products);
                tokio::spawn(async move {
                    repository
                        .update(
                            product.id,
                            UpdateProduct {
                                category_id: Some(category_id),
                            },
                        )
                        .await
                })
            })
            .collect();

        let updates = handles.into_iter().map(|handle| async move {
            match handle.await {
                Ok(result) => result.map_err(CategoryError::from),
                Err(e) => Err(CategoryError::Internal(format!("update task failed: {e}"))),
            }
        });

        try_join_all(updates).await
    }
}
