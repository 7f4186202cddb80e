//! API routes module

pub mod health;

use axum::{Router, routing::get};
use domain_categories::{CategoryService, PgCategoryRepository};
use domain_products::{PgProductRepository, ProductService};

use crate::state::AppState;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Repositories share the state's connection pool.
pub fn routes(state: &AppState) -> Router {
    let products = PgProductRepository::new(state.db.clone());
    let categories = PgCategoryRepository::new(state.db.clone());

    Router::new()
        .nest(
            "/category",
            domain_categories::handlers::router(CategoryService::new(categories, products.clone())),
        )
        .nest(
            "/product",
            domain_products::handlers::router(ProductService::new(products)),
        )
}

/// `/ready` router with the database check; merged next to the stateless app router.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
