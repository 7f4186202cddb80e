//! Integration tests for the Categories domain
//!
//! Run against a real PostgreSQL container with the catalog migrations
//! applied. They need Docker:
//! `cargo test -p domain_categories -- --ignored`

use domain_categories::{
    AddProductsToCategory, CategoryError, CategoryRepository, CategoryService, CreateCategory,
    PgCategoryRepository,
};
use domain_products::{CreateProduct, PgProductRepository, Product, ProductRepository};
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

async fn seed_product(repo: &PgProductRepository, builder: &TestDataBuilder, suffix: &str) -> Product {
    repo.create(CreateProduct {
        name: builder.name("product", suffix),
        price: builder.price(suffix.len() as u64),
        stock_count: 1,
        ..Default::default()
    })
    .await
    .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_category() {
    let db = TestDatabase::new().await;
    let repo = PgCategoryRepository::new(db.connection());

    let created = repo
        .create(CreateCategory {
            name: "Shoes".into(),
            description: "Footwear".into(),
            products: Vec::new(),
        })
        .await
        .unwrap();
    assert!(created.id > 0);

    let retrieved = assert_some(repo.get_by_id(created.id).await.unwrap(), "category");
    assert_eq!(retrieved.name, "Shoes");
    assert_eq!(retrieved.description, "Footwear");
    assert!(retrieved.products.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_attaches_products_in_transaction() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let repo = PgCategoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_attaches");

    let a = seed_product(&products, &builder, "a").await;
    let b = seed_product(&products, &builder, "b").await;

    let created = repo
        .create(CreateCategory {
            name: builder.name("category", "main"),
            description: String::new(),
            products: vec![a.id, b.id, 888_888],
        })
        .await
        .unwrap();

    assert_same_ids(
        created.products.iter().map(|p| p.id).collect(),
        vec![a.id, b.id],
        "attached products",
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_add_products_to_category() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let service = CategoryService::new(PgCategoryRepository::new(db.connection()), products.clone());
    let builder = TestDataBuilder::from_test_name("add_products");

    let category = service
        .create_category(Some(CreateCategory {
            name: builder.name("category", "sale"),
            ..Default::default()
        }))
        .await
        .unwrap();
    let a = seed_product(&products, &builder, "a").await;
    let b = seed_product(&products, &builder, "b").await;
    let c = seed_product(&products, &builder, "c").await;

    let result = service
        .add_products_to_category(Some(AddProductsToCategory {
            category: Some(category.id),
            products: Some(vec![a.id, c.id, 777_777]),
        }))
        .await
        .unwrap();
    assert_same_ids(
        result.updated_products.iter().map(|p| p.id).collect(),
        vec![a.id, c.id],
        "updated products",
    );

    let untouched = assert_some(products.get_by_id(b.id).await.unwrap(), "product b");
    assert_eq!(untouched.category_id, None);

    let reloaded = service.get_category(Some(category.id)).await.unwrap();
    assert_eq!(reloaded.products.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_add_products_unknown_category() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let service = CategoryService::new(PgCategoryRepository::new(db.connection()), products.clone());
    let builder = TestDataBuilder::from_test_name("unknown_category");
    let a = seed_product(&products, &builder, "a").await;

    let err = service
        .add_products_to_category(Some(AddProductsToCategory {
            category: Some(565_656),
            products: Some(vec![a.id]),
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, CategoryError::NotFound(565_656)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_categories_includes_products() {
    let db = TestDatabase::new().await;
    let products = PgProductRepository::new(db.connection());
    let repo = PgCategoryRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_categories");
    let a = seed_product(&products, &builder, "a").await;

    repo.create(CreateCategory {
        name: builder.name("category", "first"),
        description: String::new(),
        products: vec![a.id],
    })
    .await
    .unwrap();
    repo.create(CreateCategory {
        name: builder.name("category", "second"),
        ..Default::default()
    })
    .await
    .unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].products.len(), 1);
    assert!(all[1].products.is_empty());
}
