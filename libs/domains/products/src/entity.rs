use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product};

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock_count: i32,
    pub image: String,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "products";
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            stock_count: model.stock_count,
            image: model.image,
            category_id: model.category_id,
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            stock_count: Set(input.stock_count),
            image: Set(input.image),
            category_id: Set(input.category),
        }
    }
}
