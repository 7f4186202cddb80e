use domain_products::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Category with the products that currently reference it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub products: Vec<Product>,
}

/// Payload for creating a category.
///
/// `products` lists existing product ids to attach; unknown ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    pub products: Vec<i32>,
}

/// Payload for attaching existing products to a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductsToCategory {
    /// Target category id
    pub category: Option<i32>,
    /// Product ids to attach
    pub products: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductsResult {
    pub message: String,
    /// Products after the update, in the order they were fetched
    pub updated_products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryResponse {
    pub data: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetCategoryResponse {
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddProductsResponse {
    pub result: AddProductsResult,
}
