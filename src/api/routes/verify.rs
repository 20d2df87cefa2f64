//! Wallet-signature login: `POST /api/verify`.

use crate::api::AppState;
use crate::api::extract::ApiJson;
use crate::auth::{signature, token};
use crate::models::{VerifyRequest, VerifyResponse};
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

/// Verifies a signed login message and exchanges it for a bearer token.
///
/// This route keeps the dashboard's `{success, message|error, token?}` body
/// shape rather than the shared error format, and echoes the token in the
/// `Authorization` response header.
pub async fn verify(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VerifyRequest>,
) -> Response {
    let (Some(signature_b58), Some(message), Some(wallet_address)) =
        (request.signature, request.message, request.wallet_address)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(VerifyResponse {
                success: false,
                message: None,
                error: Some("Missing required fields".to_string()),
                token: None,
            }),
        )
            .into_response();
    };

    if !signature::verify_wallet_signature(&signature_b58, &message, &wallet_address) {
        debug!(wallet = %wallet_address, "signature verification failed");
        return (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                success: false,
                message: None,
                error: Some("Signature verification failed".to_string()),
                token: None,
            }),
        )
            .into_response();
    }

    match token::issue_token(&wallet_address, &state.config.jwt_secret) {
        Ok(token) => (
            StatusCode::OK,
            [(header::AUTHORIZATION, token.clone())],
            Json(VerifyResponse {
                success: true,
                message: Some("Signature verified!".to_string()),
                error: None,
                token: Some(token),
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
