use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Persistence gateway for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; storage assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Products whose id is in `ids`. Unknown ids are skipped.
    async fn get_by_ids(&self, ids: &[i32]) -> ProductResult<Vec<Product>>;

    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Apply `input` to an existing product; `NotFound` if it does not exist
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Clones share the same store.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Products referencing any of `category_ids`, in id order
    pub async fn list_by_categories(&self, category_ids: &[i32]) -> Vec<Product> {
        self.products
            .read()
            .await
            .values()
            .filter(|p| p.category_id.is_some_and(|id| category_ids.contains(&id)))
            .cloned()
            .collect()
    }

    /// Point every existing product in `ids` at `category_id`; returns how many changed
    pub async fn assign_category(&self, ids: &[i32], category_id: i32) -> u64 {
        let mut products = self.products.write().await;
        let mut updated = 0;
        for id in ids {
            if let Some(product) = products.get_mut(id) {
                product.category_id = Some(category_id);
                updated += 1;
            }
        }
        updated
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            description: input.description,
            price: input.price,
            stock_count: input.stock_count,
            image: input.image,
            category_id: input.category,
        };

        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn get_by_ids(&self, ids: &[i32]) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.category_id = input.category_id;
        Ok(product.clone())
    }
}
