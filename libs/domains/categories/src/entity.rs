use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Category, CreateCategory};
use domain_products::Product;

/// Sea-ORM entity for the `categories` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "categories";

    pub fn with_products(self, products: Vec<Product>) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            products,
        }
    }
}

impl From<&CreateCategory> for ActiveModel {
    fn from(input: &CreateCategory) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            description: Set(input.description.clone()),
        }
    }
}
