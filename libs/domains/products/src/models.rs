use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_count: i32,
    /// Image URL or storage key
    pub image: String,
    /// Owning category, if any
    pub category_id: Option<i32>,
}

/// Payload for creating a product.
///
/// Missing fields take their empty value, so `{}` is accepted by the
/// extractor and rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock_count: i32,
    pub image: String,
    /// Category id to attach the product to
    pub category: Option<i32>,
}

/// Partial update; only the category reference can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProductResponse {
    pub data: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetProductResponse {
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: 1,
            name: "Runner".into(),
            description: "Trail shoe".into(),
            price: 89.5,
            stock_count: 12,
            image: "runner.png".into(),
            category_id: None,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["stockCount"], 12);
        assert_eq!(value["categoryId"], serde_json::Value::Null);
    }

    #[test]
    fn test_create_product_defaults_missing_fields() {
        let input: CreateProduct = serde_json::from_value(json!({ "name": "Cap" })).unwrap();
        assert_eq!(input.name, "Cap");
        assert_eq!(input.stock_count, 0);
        assert_eq!(input.category, None);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_validation() {
        assert!(CreateProduct::default().validate().is_err());

        let negative_price = CreateProduct {
            name: "Cap".into(),
            price: -1.0,
            ..Default::default()
        };
        assert!(negative_price.validate().is_err());

        let negative_stock = CreateProduct {
            name: "Cap".into(),
            stock_count: -3,
            ..Default::default()
        };
        assert!(negative_stock.validate().is_err());
    }
}
