//! Shared test utilities for `StreamFlow`.
//!
//! This module provides common helper functions for setting up test databases
//! and routers, and for creating test entities with sensible defaults.

use crate::api::AppState;
use crate::auth::token;
use crate::config::AppConfig;
use crate::entities::{budget, recipient, workflow};
use crate::errors::Result;
use crate::models::{
    CreateBudgetRequest, CreateRecipientRequest, CreateWorkflowRequest, Frequency, ScheduleInput,
    WorkflowKind, WorkflowRecipientInput,
};
use crate::solana::SolanaClient;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Arc;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a router plus its state over a fresh in-memory database and a
/// known JWT secret.
pub async fn setup_test_app() -> Result<(Router, AppState)> {
    let db = setup_test_db().await?;
    let config = Arc::new(AppConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        port: 0,
        solana_rpc_url: "http://localhost:8899".to_string(),
    });
    let state = AppState {
        db,
        solana: Arc::new(SolanaClient::new(&config.solana_rpc_url)),
        config,
    };
    Ok((crate::api::router(state.clone()), state))
}

/// A valid `Authorization` header value for the test app's secret.
pub fn auth_header(config: &AppConfig) -> String {
    let token = token::issue_token(
        "9aE476sH92Vz7DMPyq5WLPkrKWivxeuTKEFKd2sZZcde",
        &config.jwt_secret,
    )
    .unwrap();
    format!("Bearer {token}")
}

/// Builds a JSON request for driving the router directly.
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Same as [`json_request`] with an `Authorization` header attached.
pub fn authed_json_request(method: &str, uri: &str, body: Value, auth: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, auth)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Reads a response body to completion and parses it as JSON.
pub async fn response_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A valid budget payload with sensible defaults.
///
/// # Defaults
/// * `amount`: 500.0
/// * `currency`: "USDC"
/// * `category`: "operations"
/// * `status`: None (server default `active`)
pub fn budget_request(name: &str) -> CreateBudgetRequest {
    CreateBudgetRequest {
        name: name.to_string(),
        amount: 500.0,
        currency: "USDC".to_string(),
        start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        end_date: None,
        category: "operations".to_string(),
        status: None,
        metadata: None,
    }
}

/// Creates a test budget with the default payload.
pub async fn create_test_budget(db: &DatabaseConnection, name: &str) -> Result<budget::Model> {
    crate::core::budget::create_budget(db, budget_request(name)).await
}

/// A valid recipient payload for the given wallet address.
pub fn recipient_request(name: &str, wallet_address: &str) -> CreateRecipientRequest {
    CreateRecipientRequest {
        name: name.to_string(),
        wallet_address: wallet_address.to_string(),
        email: None,
        metadata: None,
    }
}

/// Creates a test recipient with a fixed 40-character wallet address.
pub async fn create_test_recipient(
    db: &DatabaseConnection,
    name: &str,
) -> Result<recipient::Model> {
    create_test_recipient_with_wallet(db, name, &"r".repeat(40)).await
}

/// Creates a test recipient bound to a specific wallet address.
pub async fn create_test_recipient_with_wallet(
    db: &DatabaseConnection,
    name: &str,
    wallet_address: &str,
) -> Result<recipient::Model> {
    crate::core::recipient::create_recipient(db, recipient_request(name, wallet_address)).await
}

/// A valid workflow payload with sensible defaults.
///
/// # Defaults
/// * `type`: "fixed"
/// * one recipient paid 25.0
/// * monthly schedule starting 2025-06-01
pub fn workflow_request(name: &str) -> CreateWorkflowRequest {
    CreateWorkflowRequest {
        name: name.to_string(),
        kind: WorkflowKind::Fixed,
        recipients: vec![WorkflowRecipientInput {
            wallet_address: "a".repeat(40),
            amount: 25.0,
        }],
        schedule: ScheduleInput {
            frequency: Frequency::Monthly,
            start_date: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        },
    }
}

/// Creates a test workflow with the default payload.
pub async fn create_test_workflow(db: &DatabaseConnection, name: &str) -> Result<workflow::Model> {
    crate::core::workflow::create_workflow(db, workflow_request(name)).await
}
