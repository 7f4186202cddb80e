use async_trait::async_trait;
use domain_products::InMemoryProductRepository;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::CategoryResult;
use crate::models::{Category, CreateCategory};

/// Persistence gateway for categories.
///
/// Returned categories always carry the products referencing them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category and attach the listed existing products to it
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category>;

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>>;

    async fn list(&self) -> CategoryResult<Vec<Category>>;
}

#[derive(Debug, Clone)]
struct CategoryRecord {
    id: i32,
    name: String,
    description: String,
}

/// In-memory implementation of CategoryRepository (for development/testing)
///
/// Product membership is read from and written to the shared product store.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i32, CategoryRecord>>>,
    next_id: Arc<AtomicI32>,
    products: InMemoryProductRepository,
}

impl InMemoryCategoryRepository {
    pub fn new(products: InMemoryProductRepository) -> Self {
        Self {
            categories: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            products,
        }
    }

    async fn hydrate(&self, record: CategoryRecord) -> Category {
        let products = self.products.list_by_categories(&[record.id]).await;
        Category {
            id: record.id,
            name: record.name,
            description: record.description,
            products,
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let record = CategoryRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            description: input.description,
        };

        self.categories
            .write()
            .await
            .insert(record.id, record.clone());
        self.products.assign_category(&input.products, record.id).await;

        Ok(self.hydrate(record).await)
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let record = self.categories.read().await.get(&id).cloned();
        match record {
            Some(record) => Ok(Some(self.hydrate(record).await)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let records: Vec<CategoryRecord> =
            self.categories.read().await.values().cloned().collect();

        let mut categories = Vec::with_capacity(records.len());
        for record in records {
            categories.push(self.hydrate(record).await);
        }
        Ok(categories)
    }
}
