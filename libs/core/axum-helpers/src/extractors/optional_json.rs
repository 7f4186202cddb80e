//! JSON body extractor that tolerates an absent body.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body that may be missing.
///
/// An empty (or whitespace-only) body and a literal `null` both extract as
/// `None`. A body that is present but does not deserialize into `T` is
/// rejected with [`AppError::InvalidJson`].
///
/// # Example
/// ```ignore
/// async fn create(OptionalJson(input): OptionalJson<CreateProduct>) -> impl IntoResponse {
///     service.create_product(input).await
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidJson(rejection.body_text()))?;

        Self::from_bytes(&bytes)
    }
}

impl<T: DeserializeOwned> OptionalJson<T> {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalJson(None));
        }

        serde_json::from_slice::<Option<T>>(bytes)
            .map(OptionalJson)
            .map_err(|e| AppError::InvalidJson(e.to_string()))
    }
}
