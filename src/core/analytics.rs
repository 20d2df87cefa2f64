//! Read-only analytics over the workflow and recipient collections.
//!
//! Every statistic is recomputed from the database on each call - no caching,
//! no incremental maintenance. The result structs are serialized to the wire
//! as-is.

use crate::entities::{Recipient, Workflow, recipient, workflow};
use crate::errors::Result;
use crate::models::WorkflowStatus;
use sea_orm::{PaginatorTrait, QuerySelect, prelude::*};
use serde::Serialize;

/// Count of workflows in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Status value (`"active"` or `"paused"`)
    pub status: String,
    /// Number of workflows currently in that status
    pub count: i64,
}

/// Workflow counts grouped by status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStats {
    pub total: u64,
    pub active: u64,
    pub paused: u64,
    pub status_breakdown: Vec<StatusCount>,
}

/// Sum and average of the payout amounts embedded across all workflows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStats {
    pub total_budget: f64,
    pub average_payment: f64,
    pub total_recipients: u64,
}

/// Counts over the standalone recipient collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientStats {
    pub total_recipients: u64,
    pub unique_wallets: u64,
    pub recipients_with_email: u64,
}

/// Computes workflow counts: total, per fixed status, and a grouped
/// breakdown.
pub async fn workflow_stats(db: &DatabaseConnection) -> Result<WorkflowStats> {
    let total = Workflow::find().count(db).await?;
    let active = Workflow::find()
        .filter(workflow::Column::Status.eq(WorkflowStatus::Active.as_str()))
        .count(db)
        .await?;
    let paused = Workflow::find()
        .filter(workflow::Column::Status.eq(WorkflowStatus::Paused.as_str()))
        .count(db)
        .await?;

    let status_breakdown = Workflow::find()
        .select_only()
        .column(workflow::Column::Status)
        .column_as(workflow::Column::Id.count(), "count")
        .group_by(workflow::Column::Status)
        .into_tuple::<(String, i64)>()
        .all(db)
        .await?
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();

    Ok(WorkflowStats {
        total,
        active,
        paused,
        status_breakdown,
    })
}

/// Sums and averages the embedded recipient amounts across all workflows.
/// Empty data yields zeros rather than an error.
pub async fn budget_stats(db: &DatabaseConnection) -> Result<BudgetStats> {
    let workflows = Workflow::find().all(db).await?;
    let amounts: Vec<f64> = workflows
        .iter()
        .flat_map(|w| w.recipients.0.iter().map(|entry| entry.amount))
        .collect();

    let total_budget: f64 = amounts.iter().sum();
    // Cast safety: embedded recipient counts are far below 2^52.
    #[allow(clippy::cast_precision_loss)]
    let average_payment = if amounts.is_empty() {
        0.0
    } else {
        total_budget / amounts.len() as f64
    };

    Ok(BudgetStats {
        total_budget,
        average_payment,
        total_recipients: amounts.len() as u64,
    })
}

/// Counts recipients, distinct wallet addresses, and entries carrying an
/// email.
pub async fn recipient_stats(db: &DatabaseConnection) -> Result<RecipientStats> {
    let total_recipients = Recipient::find().count(db).await?;

    let wallets: Vec<String> = Recipient::find()
        .select_only()
        .column(recipient::Column::WalletAddress)
        .distinct()
        .into_tuple()
        .all(db)
        .await?;

    let recipients_with_email = Recipient::find()
        .filter(recipient::Column::Email.is_not_null())
        .count(db)
        .await?;

    Ok(RecipientStats {
        total_recipients,
        unique_wallets: wallets.len() as u64,
        recipients_with_email,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::workflow::{create_workflow, toggle_workflow_status};
    use crate::models::{CreateRecipientRequest, WorkflowRecipientInput};
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_workflow_stats_counts_by_status() -> Result<()> {
        let db = setup_test_db().await?;

        let first = create_test_workflow(&db, "First").await?;
        create_test_workflow(&db, "Second").await?;
        toggle_workflow_status(&db, first.id).await?;

        let stats = workflow_stats(&db).await?;
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.paused, 1);

        let mut breakdown = stats.status_breakdown;
        breakdown.sort_by(|a, b| a.status.cmp(&b.status));
        assert_eq!(
            breakdown,
            vec![
                StatusCount {
                    status: "active".to_string(),
                    count: 1
                },
                StatusCount {
                    status: "paused".to_string(),
                    count: 1
                },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_budget_stats_sums_embedded_amounts() -> Result<()> {
        let db = setup_test_db().await?;

        let mut request = workflow_request("Payroll");
        request.recipients = vec![
            WorkflowRecipientInput {
                wallet_address: "a".repeat(40),
                amount: 100.0,
            },
            WorkflowRecipientInput {
                wallet_address: "b".repeat(40),
                amount: 50.0,
            },
        ];
        create_workflow(&db, request).await?;

        let mut other = workflow_request("Grants");
        other.recipients = vec![WorkflowRecipientInput {
            wallet_address: "c".repeat(40),
            amount: 30.0,
        }];
        create_workflow(&db, other).await?;

        let stats = budget_stats(&db).await?;
        assert_eq!(stats.total_budget, 180.0);
        assert_eq!(stats.average_payment, 60.0);
        assert_eq!(stats.total_recipients, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_budget_stats_empty_collection_is_zeros() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = budget_stats(&db).await?;
        assert_eq!(stats.total_budget, 0.0);
        assert_eq!(stats.average_payment, 0.0);
        assert_eq!(stats.total_recipients, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_recipient_stats() -> Result<()> {
        let db = setup_test_db().await?;

        let shared_wallet = "d".repeat(40);
        create_test_recipient_with_wallet(&db, "Alice", &shared_wallet).await?;
        create_test_recipient_with_wallet(&db, "Alias", &shared_wallet).await?;

        let request = CreateRecipientRequest {
            name: "Bob".to_string(),
            wallet_address: "e".repeat(40),
            email: Some("bob@example.com".to_string()),
            metadata: None,
        };
        crate::core::recipient::create_recipient(&db, request).await?;

        let stats = recipient_stats(&db).await?;
        assert_eq!(
            stats,
            RecipientStats {
                total_recipients: 3,
                unique_wallets: 2,
                recipients_with_email: 1,
            }
        );

        Ok(())
    }
}
