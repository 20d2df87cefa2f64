//! HTTP interface - axum router, shared state, and route handlers.
//!
//! Control flow per request: rate limiter (layered in `main`) → auth
//! middleware on protected routes → payload validation → persistence
//! operation → JSON response. Budgets, recipients, and analytics require a
//! bearer token; verification and workflows are public, matching the
//! dashboard's login flow.

/// JSON extractor mapping body rejections onto the validation error shape
pub mod extract;
/// Per-resource route handlers
pub mod routes;

use crate::auth::middleware::require_auth;
use crate::config::AppConfig;
use crate::solana::SolanaClient;
use axum::Router;
use axum::http::header;
use axum::middleware;
use axum::routing::post;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state injected into every handler: the connection pool, the
/// startup configuration, and the Solana RPC client.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub solana: Arc<SolanaClient>,
}

/// Builds the full `/api` router. The rate limiter is layered on top by the
/// caller since it needs connection info from the listener.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/budgets", routes::budgets::router())
        .nest("/recipients", routes::recipients::router())
        .nest("/analytics", routes::analytics::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api = Router::new()
        .route("/verify", post(routes::verify::verify))
        .nest("/workflows", routes::workflows::router())
        .merge(protected);

    Router::new()
        .nest("/api", api)
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS for the dashboard, exposing the `Authorization` response
/// header the login flow reads the token from.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::AUTHORIZATION])
}
