use async_trait::async_trait;
use domain_products::postgres::assign_category;
use domain_products::{PgProductRepository, Product};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    entity,
    error::{CategoryError, CategoryResult},
    models::{Category, CreateCategory},
    repository::CategoryRepository,
};

#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
    products: PgProductRepository,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            products: PgProductRepository::new(db.clone()),
            db,
        }
    }

    async fn hydrate(&self, models: Vec<entity::Model>) -> CategoryResult<Vec<Category>> {
        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut by_category: HashMap<i32, Vec<Product>> = HashMap::new();
        for product in self.products.list_by_categories(&ids).await? {
            if let Some(category_id) = product.category_id {
                by_category.entry(category_id).or_default().push(product);
            }
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let products = by_category.remove(&model.id).unwrap_or_default();
                model.with_products(products)
            })
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CreateCategory) -> CategoryResult<Category> {
        let txn = self.db.begin().await?;

        let active_model: entity::ActiveModel = (&input).into();
        let model = active_model.insert(&txn).await?;
        let attached = assign_category(&txn, &input.products, model.id).await?;

        txn.commit().await?;
        tracing::debug!(category_id = model.id, attached, "Inserted category");

        let mut created = self.hydrate(vec![model]).await?;
        created
            .pop()
            .ok_or_else(|| CategoryError::Internal("category vanished".into()))
    }

    async fn get_by_id(&self, id: i32) -> CategoryResult<Option<Category>> {
        let Some(model) = entity::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.hydrate(vec![model]).await?.pop())
    }

    async fn list(&self) -> CategoryResult<Vec<Category>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        self.hydrate(models).await
    }
}
