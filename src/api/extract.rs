//! JSON extraction with the API's own rejection shape.

use crate::errors::{Error, FieldError};
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use axum::{Json, async_trait};
use serde::de::DeserializeOwned;

/// `Json<T>` wrapper whose rejection is the structured 400 validation body
/// instead of axum's plain-text default, so malformed bodies and schema
/// violations look the same to clients.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::Validation {
                errors: vec![FieldError::new("body", rejection.body_text())],
            }),
        }
    }
}
