//! Analytics routes: three read-only aggregation endpoints, all behind the
//! auth middleware.

use crate::api::AppState;
use crate::core::analytics::{self, BudgetStats, RecipientStats, WorkflowStats};
use crate::errors::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

/// Routes under `/api/analytics`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workflow-stats", get(workflow_stats))
        .route("/budget-stats", get(budget_stats))
        .route("/recipient-stats", get(recipient_stats))
}

async fn workflow_stats(State(state): State<AppState>) -> Result<Json<WorkflowStats>> {
    Ok(Json(analytics::workflow_stats(&state.db).await?))
}

async fn budget_stats(State(state): State<AppState>) -> Result<Json<BudgetStats>> {
    Ok(Json(analytics::budget_stats(&state.db).await?))
}

async fn recipient_stats(State(state): State<AppState>) -> Result<Json<RecipientStats>> {
    Ok(Json(analytics::recipient_stats(&state.db).await?))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::core::workflow::toggle_workflow_status;
    use crate::errors::Result;
    use crate::test_utils::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_analytics_require_token() -> Result<()> {
        let (app, _) = setup_test_app().await?;

        for uri in [
            "/api/analytics/workflow-stats",
            "/api/analytics/budget-stats",
            "/api/analytics/recipient-stats",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_workflow_stats_endpoint() -> Result<()> {
        let (app, state) = setup_test_app().await?;
        let auth = auth_header(&state.config);

        let first = create_test_workflow(&state.db, "First").await?;
        create_test_workflow(&state.db, "Second").await?;
        toggle_workflow_status(&state.db, first.id).await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/analytics/workflow-stats")
                    .header("authorization", &auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["active"], 1);
        assert_eq!(body["paused"], 1);
        assert!(body["statusBreakdown"].is_array());

        Ok(())
    }

    #[tokio::test]
    async fn test_budget_stats_endpoint_zeroes_on_empty_data() -> Result<()> {
        let (app, state) = setup_test_app().await?;
        let auth = auth_header(&state.config);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/analytics/budget-stats")
                    .header("authorization", &auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_json(response).await;
        assert_eq!(body["totalBudget"], 0.0);
        assert_eq!(body["averagePayment"], 0.0);
        assert_eq!(body["totalRecipients"], 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_recipient_stats_endpoint() -> Result<()> {
        let (app, state) = setup_test_app().await?;
        let auth = auth_header(&state.config);

        create_test_recipient(&state.db, "Alice").await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/analytics/recipient-stats")
                    .header("authorization", &auth)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = response_json(response).await;
        assert_eq!(body["totalRecipients"], 1);
        assert_eq!(body["uniqueWallets"], 1);
        assert_eq!(body["recipientsWithEmail"], 0);

        Ok(())
    }
}
