//! Unified error types and result handling.
//!
//! A single error enum covers every failure the server can surface. The HTTP
//! mapping lives here too: validation errors become structured 400 responses,
//! missing records become 404, authentication failures become 401, and
//! everything else collapses to a generic 500 with the detail logged
//! server-side only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// A single field-level validation failure, reported to the client in the
/// `errors` array of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path of the offending field (e.g. `"amount"`, `"recipients[2].amount"`)
    pub field: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl FieldError {
    /// Creates a field error from anything string-like.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error")]
    Validation { errors: Vec<FieldError> },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("RPC transport error: {0}")]
    Rpc(#[from] reqwest::Error),

    #[error("Solana RPC error: {message}")]
    Solana { message: String },
}

impl Error {
    /// Shorthand for a 404 on the named resource.
    #[must_use]
    pub const fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Shorthand for a 401 with the given client-visible message.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Wraps a single field failure as a validation error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![FieldError::new(field, message)],
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Validation error", "errors": errors })),
            )
                .into_response(),
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("{resource} not found") })),
            )
                .into_response(),
            Self::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message })),
            )
                .into_response(),
            other => {
                // Internal detail stays in the server log; the client only
                // ever sees the generic message.
                tracing::error!(error = %other, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Something went wrong!" })),
                )
                    .into_response()
            }
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400() {
        let response = Error::invalid_field("amount", "amount must be positive").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = Error::not_found("Budget").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unauthorized_maps_to_401() {
        let response = Error::unauthorized("Invalid token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_collapse_to_500() {
        let response = Error::Solana {
            message: "node unreachable".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
