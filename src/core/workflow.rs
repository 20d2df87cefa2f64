//! Workflow business logic - CRUD, status toggling, and the next-execution
//! display date.
//!
//! Workflows are created `active` regardless of the payload and only change
//! state through the toggle operation. The next-execution date is a pure
//! function of a single record and a clock reading; nothing about the
//! computation is shared across records.

use crate::entities::{Workflow, workflow};
use crate::errors::Result;
use crate::models::{CreateWorkflowRequest, Frequency, UpdateWorkflowRequest, WorkflowStatus};
use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all workflows, newest first.
pub async fn list_workflows(db: &DatabaseConnection) -> Result<Vec<workflow::Model>> {
    Workflow::find()
        .order_by_desc(workflow::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a workflow by its unique ID, returning None if absent.
pub async fn get_workflow(db: &DatabaseConnection, id: i64) -> Result<Option<workflow::Model>> {
    Workflow::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new workflow after validating the payload. Status is forced to
/// `active`; the client cannot create a paused workflow.
pub async fn create_workflow(
    db: &DatabaseConnection,
    input: CreateWorkflowRequest,
) -> Result<workflow::Model> {
    input.validate()?;

    let now = Utc::now();
    let workflow = workflow::ActiveModel {
        name: Set(input.name.clone()),
        kind: Set(input.kind.as_str().to_string()),
        frequency: Set(input.schedule.frequency.as_str().to_string()),
        start_date: Set(input.schedule.start_date),
        recipients: Set(input.into_recipient_list()),
        status: Set(WorkflowStatus::Active.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    workflow.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a workflow, returning None if absent.
///
/// A present schedule replaces both frequency and start date; the status is
/// not updatable here (only via the toggle).
pub async fn update_workflow(
    db: &DatabaseConnection,
    id: i64,
    input: UpdateWorkflowRequest,
) -> Result<Option<workflow::Model>> {
    input.validate()?;

    let Some(existing) = Workflow::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: workflow::ActiveModel = existing.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(kind) = input.kind {
        active.kind = Set(kind.as_str().to_string());
    }
    if let Some(recipients) = input.recipients {
        active.recipients = Set(crate::entities::workflow::RecipientList(
            recipients
                .into_iter()
                .map(|entry| crate::entities::workflow::EmbeddedRecipient {
                    wallet_address: entry.wallet_address,
                    amount: entry.amount,
                })
                .collect(),
        ));
    }
    if let Some(schedule) = input.schedule {
        active.frequency = Set(schedule.frequency.as_str().to_string());
        active.start_date = Set(schedule.start_date);
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some).map_err(Into::into)
}

/// Flips a workflow between `active` and `paused`, returning None if absent.
/// No other side effects; flipping twice restores the original status.
pub async fn toggle_workflow_status(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<workflow::Model>> {
    let Some(existing) = Workflow::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let next_status = if existing.status == WorkflowStatus::Active.as_str() {
        WorkflowStatus::Paused
    } else {
        WorkflowStatus::Active
    };

    let mut active: workflow::ActiveModel = existing.into();
    active.status = Set(next_status.as_str().to_string());
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some).map_err(Into::into)
}

/// Deletes a workflow, returning whether a row was removed.
pub async fn delete_workflow(db: &DatabaseConnection, id: i64) -> Result<bool> {
    let result = Workflow::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Computes the next execution date for a schedule as shown in the dashboard.
///
/// Pure per record: the result depends only on the arguments, and `now` is
/// never advanced in place. A schedule that has not started yet executes next
/// on its start date; otherwise the next execution is one period after `now`.
#[must_use]
pub fn next_execution(
    frequency: Frequency,
    start_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> NaiveDate {
    if now <= start_date {
        return start_date.date_naive();
    }

    let next = match frequency {
        Frequency::Daily => now + Duration::days(1),
        Frequency::Weekly => now + Duration::days(7),
        Frequency::Monthly => now + Months::new(1),
        Frequency::Yearly => now + Months::new(12),
    };
    next.date_naive()
}

/// Next execution date for a stored workflow. The frequency column only ever
/// holds validated values; an unparseable one falls back to the start date.
#[must_use]
pub fn next_execution_for(model: &workflow::Model, now: DateTime<Utc>) -> NaiveDate {
    Frequency::parse(&model.frequency).map_or_else(
        || model.start_date.date_naive(),
        |frequency| next_execution(frequency, model.start_date, now),
    )
}
