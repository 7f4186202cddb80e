use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Products referencing any of `category_ids`, in id order
    pub async fn list_by_categories(&self, category_ids: &[i32]) -> ProductResult<Vec<Product>> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::CategoryId.is_in(category_ids.iter().copied()))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}

/// Point every existing product in `ids` at `category_id` in one statement.
///
/// Takes any connection so callers can run it inside their own transaction.
pub async fn assign_category<C: ConnectionTrait>(
    conn: &C,
    ids: &[i32],
    category_id: i32,
) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }

    let result = entity::Entity::update_many()
        .set(entity::ActiveModel {
            category_id: Set(Some(category_id)),
            ..Default::default()
        })
        .filter(entity::Column::Id.is_in(ids.iter().copied()))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::debug!(product_id = model.id, "Inserted product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn get_by_ids(&self, ids: &[i32]) -> ProductResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = entity::Entity::find()
            .filter(entity::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            category_id: Set(input.category_id),
            ..Default::default()
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(ProductError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i32, category_id: Option<i32>) -> entity::Model {
        entity::Model {
            id,
            name: format!("product-{id}"),
            description: "mock".into(),
            price: 5.0,
            stock_count: 1,
            image: "mock.png".into(),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, Some(1))]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.get_by_id(3).await.unwrap().unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.category_id, Some(1));
    }

    #[tokio::test]
    async fn test_get_by_ids_with_no_ids_skips_query() {
        // No results are queued: a query would fail the test
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assign_category_with_no_ids_skips_statement() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        assert_eq!(assign_category(&db, &[], 1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".into())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(ref msg) if msg.contains("boom")));
    }
}
