//! Recipient routes: plain CRUD behind the auth middleware.

use crate::api::AppState;
use crate::api::extract::ApiJson;
use crate::core::recipient;
use crate::errors::{Error, Result};
use crate::models::{
    CreateRecipientRequest, MessageResponse, RecipientResponse, UpdateRecipientRequest,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Routes under `/api/recipients`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipients).post(create_recipient))
        .route(
            "/:id",
            get(get_recipient)
                .put(update_recipient)
                .delete(delete_recipient),
        )
}

async fn list_recipients(State(state): State<AppState>) -> Result<Json<Vec<RecipientResponse>>> {
    let recipients = recipient::list_recipients(&state.db).await?;
    Ok(Json(
        recipients.into_iter().map(RecipientResponse::from).collect(),
    ))
}

async fn get_recipient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipientResponse>> {
    let model = recipient::get_recipient(&state.db, id)
        .await?
        .ok_or(Error::not_found("Recipient"))?;
    Ok(Json(model.into()))
}

async fn create_recipient(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateRecipientRequest>,
) -> Result<(StatusCode, Json<RecipientResponse>)> {
    let model = recipient::create_recipient(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(model.into())))
}

async fn update_recipient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateRecipientRequest>,
) -> Result<Json<RecipientResponse>> {
    let model = recipient::update_recipient(&state.db, id, request)
        .await?
        .ok_or(Error::not_found("Recipient"))?;
    Ok(Json(model.into()))
}

async fn delete_recipient(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !recipient::delete_recipient(&state.db, id).await? {
        return Err(Error::not_found("Recipient"));
    }
    Ok(Json(MessageResponse {
        message: "Recipient deleted successfully",
    }))
}
