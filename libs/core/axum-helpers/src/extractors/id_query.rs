//! `?id=` query extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::{Uri, request::Parts},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IdParams {
    id: Option<String>,
}

/// Optional integer `id` taken from the query string.
///
/// `?id=` and a missing parameter both yield `None`; a value that is not an
/// integer is rejected with [`AppError::InvalidQuery`]. Other query
/// parameters are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdQuery(pub Option<i32>);

impl IdQuery {
    fn from_uri(uri: &Uri) -> Result<Self, AppError> {
        let Query(params) = Query::<IdParams>::try_from_uri(uri)
            .map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

        match params.id.as_deref().map(str::trim) {
            None | Some("") => Ok(IdQuery(None)),
            Some(value) => value
                .parse::<i32>()
                .map(|id| IdQuery(Some(id)))
                .map_err(|_| AppError::InvalidQuery(format!("Invalid id: {value}"))),
        }
    }
}

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_uri(&parts.uri)
    }
}
