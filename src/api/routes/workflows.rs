//! Workflow routes: CRUD plus the status toggle.

use crate::api::AppState;
use crate::api::extract::ApiJson;
use crate::core::workflow;
use crate::errors::{Error, Result};
use crate::models::{
    CreateWorkflowRequest, MessageResponse, UpdateWorkflowRequest, WorkflowResponse,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::Utc;

/// Routes under `/api/workflows`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workflows).post(create_workflow))
        .route(
            "/:id",
            get(get_workflow).put(update_workflow).delete(delete_workflow),
        )
        .route("/:id/toggle-status", patch(toggle_workflow_status))
}

async fn list_workflows(State(state): State<AppState>) -> Result<Json<Vec<WorkflowResponse>>> {
    let workflows = workflow::list_workflows(&state.db).await?;

    // One clock reading for the whole page; each record's next execution is
    // still computed independently from it.
    let now = Utc::now();
    let responses = workflows
        .into_iter()
        .map(|model| WorkflowResponse::from_model(model, now))
        .collect();

    Ok(Json(responses))
}

async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WorkflowResponse>> {
    let model = workflow::get_workflow(&state.db, id)
        .await?
        .ok_or(Error::not_found("Workflow"))?;
    Ok(Json(WorkflowResponse::from_model(model, Utc::now())))
}

async fn create_workflow(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateWorkflowRequest>,
) -> Result<(StatusCode, Json<WorkflowResponse>)> {
    let model = workflow::create_workflow(&state.db, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(WorkflowResponse::from_model(model, Utc::now())),
    ))
}

async fn update_workflow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateWorkflowRequest>,
) -> Result<Json<WorkflowResponse>> {
    let model = workflow::update_workflow(&state.db, id, request)
        .await?
        .ok_or(Error::not_found("Workflow"))?;
    Ok(Json(WorkflowResponse::from_model(model, Utc::now())))
}

async fn toggle_workflow_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<WorkflowResponse>> {
    let model = workflow::toggle_workflow_status(&state.db, id)
        .await?
        .ok_or(Error::not_found("Workflow"))?;
    Ok(Json(WorkflowResponse::from_model(model, Utc::now())))
}

async fn delete_workflow(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !workflow::delete_workflow(&state.db, id).await? {
        return Err(Error::not_found("Workflow"));
    }
    Ok(Json(MessageResponse {
        message: "Workflow deleted successfully",
    }))
}
