//! Bearer-token middleware for protected routes.

use crate::api::AppState;
use crate::auth::token;
use crate::errors::{Error, Result};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

/// Identity attached to the request after a successful token check.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub wallet_address: String,
}

/// Verifies the `Authorization` header and attaches the decoded identity to
/// the request. A missing header is 401 "Authentication required"; anything
/// that fails verification is 401 "Invalid token".
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(raw) = header_value else {
        return Err(Error::unauthorized("Authentication required"));
    };

    // Accept both "Bearer <token>" and a bare token
    let bearer = raw.strip_prefix("Bearer ").unwrap_or(raw);

    let claims = token::verify_token(bearer, &state.config.jwt_secret)
        .map_err(|_| Error::unauthorized("Invalid token"))?;

    request.extensions_mut().insert(AuthUser {
        id: claims.id,
        wallet_address: claims.wallet_address,
    });

    Ok(next.run(request).await)
}
