use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    IdQuery, OptionalJson,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use domain_products::ProductRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::CategoryResult;
use crate::models::{
    AddProductsResponse, AddProductsResult, AddProductsToCategory, Category, CreateCategory,
    CreateCategoryResponse, GetCategoryResponse, ListCategoriesResponse,
};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

type SharedService<C, P> = Arc<CategoryService<C, P>>;

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(create_category, get_category, list_categories, add_products),
    components(
        schemas(
            Category,
            CreateCategory,
            AddProductsToCategory,
            AddProductsResult,
            CreateCategoryResponse,
            GetCategoryResponse,
            ListCategoriesResponse,
            AddProductsResponse
        ),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = entity::Model::TAG, description = "Category endpoints")
    )
)]
pub struct ApiDoc;

/// Category routes, to be nested under `/category`
pub fn router<C, P>(service: CategoryService<C, P>) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_category).post(create_category))
        .route("/all", get(list_categories))
        .route("/addProduct", post(add_products))
        .with_state(shared_service)
}

/// Create a category, optionally attaching existing products
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateCategory,
    responses(
        (status = 200, description = "Category created", body = CreateCategoryResponse),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_category<C, P>(
    State(service): State<SharedService<C, P>>,
    OptionalJson(input): OptionalJson<CreateCategory>,
) -> CategoryResult<Json<CreateCategoryResponse>>
where
    C: CategoryRepository,
    P: ProductRepository + 'static,
{
    let category = service.create_category(input).await?;
    Ok(Json(CreateCategoryResponse { data: category }))
}

/// Get a category and its products
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    params(
        ("id" = Option<i32>, Query, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = GetCategoryResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<C, P>(
    State(service): State<SharedService<C, P>>,
    IdQuery(id): IdQuery,
) -> CategoryResult<Json<GetCategoryResponse>>
where
    C: CategoryRepository,
    P: ProductRepository + 'static,
{
    let category = service.get_category(id).await?;
    Ok(Json(GetCategoryResponse { category }))
}

#[utoipa::path(
    get,
    path = "/all",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All categories", body = ListCategoriesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<C, P>(
    State(service): State<SharedService<C, P>>,
) -> CategoryResult<Json<ListCategoriesResponse>>
where
    C: CategoryRepository,
    P: ProductRepository + 'static,
{
    let categories = service.get_categories().await?;
    Ok(Json(ListCategoriesResponse { categories }))
}

/// Attach existing products to a category
///
/// Unknown product ids are ignored. If any update fails the request fails,
/// but updates that already succeeded are kept.
#[utoipa::path(
    post,
    path = "/addProduct",
    tag = entity::Model::TAG,
    request_body = AddProductsToCategory,
    responses(
        (status = 200, description = "Products attached", body = AddProductsResponse),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_products<C, P>(
    State(service): State<SharedService<C, P>>,
    OptionalJson(input): OptionalJson<AddProductsToCategory>,
) -> CategoryResult<Json<AddProductsResponse>>
where
    C: CategoryRepository,
    P: ProductRepository + 'static,
{
    let result = service.add_products_to_category(input).await?;
    Ok(Json(AddProductsResponse { result }))
}
