//! Budget routes: CRUD plus the status patch. All behind the auth middleware.

use crate::api::AppState;
use crate::api::extract::ApiJson;
use crate::core::budget;
use crate::errors::{Error, Result};
use crate::models::{
    BudgetResponse, BudgetStatusPatch, CreateBudgetRequest, MessageResponse, UpdateBudgetRequest,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};

/// Routes under `/api/budgets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_budgets).post(create_budget))
        .route(
            "/:id",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        .route("/:id/status", patch(set_budget_status))
}

async fn list_budgets(State(state): State<AppState>) -> Result<Json<Vec<BudgetResponse>>> {
    let budgets = budget::list_budgets(&state.db).await?;
    Ok(Json(budgets.into_iter().map(BudgetResponse::from).collect()))
}

async fn get_budget(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BudgetResponse>> {
    let model = budget::get_budget(&state.db, id)
        .await?
        .ok_or(Error::not_found("Budget"))?;
    Ok(Json(model.into()))
}

async fn create_budget(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateBudgetRequest>,
) -> Result<(StatusCode, Json<BudgetResponse>)> {
    let model = budget::create_budget(&state.db, request).await?;
    Ok((StatusCode::CREATED, Json(model.into())))
}

async fn update_budget(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<UpdateBudgetRequest>,
) -> Result<Json<BudgetResponse>> {
    let model = budget::update_budget(&state.db, id, request)
        .await?
        .ok_or(Error::not_found("Budget"))?;
    Ok(Json(model.into()))
}

async fn set_budget_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ApiJson(request): ApiJson<BudgetStatusPatch>,
) -> Result<Json<BudgetResponse>> {
    let model = budget::set_budget_status(&state.db, id, request.status)
        .await?
        .ok_or(Error::not_found("Budget"))?;
    Ok(Json(model.into()))
}

async fn delete_budget(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    if !budget::delete_budget(&state.db, id).await? {
        return Err(Error::not_found("Budget"));
    }
    Ok(Json(MessageResponse {
        message: "Budget deleted successfully",
    }))
}
