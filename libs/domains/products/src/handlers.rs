use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    IdQuery, OptionalJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::models::{
    CreateProduct, CreateProductResponse, GetProductResponse, ListProductsResponse, Product,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, get_product, list_products),
    components(
        schemas(
            Product,
            CreateProduct,
            CreateProductResponse,
            GetProductResponse,
            ListProductsResponse
        ),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, to be nested under `/product`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_product).post(create_product))
        .route("/all", get(list_products))
        .with_state(shared_service)
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = CreateProductResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OptionalJson(input): OptionalJson<CreateProduct>,
) -> ProductResult<Json<CreateProductResponse>> {
    let product = service.create_product(input).await?;
    Ok(Json(CreateProductResponse { data: product }))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(
        ("id" = Option<i32>, Query, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = GetProductResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdQuery(id): IdQuery,
) -> ProductResult<Json<GetProductResponse>> {
    let product = service.get_product(id).await?;
    Ok(Json(GetProductResponse { product }))
}

/// List every product
#[utoipa::path(
    get,
    path = "/all",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products", body = ListProductsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ListProductsResponse>> {
    let products = service.get_products().await?;
    Ok(Json(ListProductsResponse { products }))
}
