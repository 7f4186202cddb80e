use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_products::ProductError;
use sea_orm::DbErr;
use thiserror::Error;

pub const INVALID_CATEGORY_DATA: &str =
    "Unable to create category. Please provide valid category data";
pub const MISSING_CATEGORY_ID: &str =
    "Unable to retrieve category. Please provide a valid category id";
pub const CATEGORY_NOT_FOUND: &str = "Category not found. Please provide a valid category id";
pub const INVALID_PRODUCT_MAPPING: &str =
    "Unable to map products. Please provide a valid category id or product ids";

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(CATEGORY_NOT_FOUND.to_string()),
            CategoryError::Validation(msg) => AppError::BadRequest(msg),
            CategoryError::Database(msg) => AppError::InternalServerError(msg),
            CategoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for CategoryError {
    fn from(err: DbErr) -> Self {
        CategoryError::Database(err.to_string())
    }
}

/// Failures from the product repository are never user errors here:
/// storage failures stay `Database`, anything else becomes `Internal`.
impl From<ProductError> for CategoryError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Database(msg) => CategoryError::Database(msg),
            other => CategoryError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_category_not_found_message() {
        let app: AppError = CategoryError::NotFound(3).into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert!(matches!(app, AppError::NotFound(ref msg) if msg == CATEGORY_NOT_FOUND));
    }

    #[test]
    fn test_product_repository_errors_surface_as_server_errors() {
        let cases = [
            ProductError::NotFound(9),
            ProductError::Validation("bad".into()),
            ProductError::Database("down".into()),
            ProductError::Internal("boom".into()),
        ];
        for err in cases {
            let app = AppError::from(CategoryError::from(err));
            assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }

        assert!(matches!(
            CategoryError::from(ProductError::Database("down".into())),
            CategoryError::Database(_)
        ));
        assert!(matches!(
            CategoryError::from(ProductError::NotFound(9)),
            CategoryError::Internal(_)
        ));
    }

    #[test]
    fn test_failure_statuses() {
        let cases = [
            (CategoryError::Validation(INVALID_PRODUCT_MAPPING.into()), StatusCode::BAD_REQUEST),
            (CategoryError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CategoryError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }
}
