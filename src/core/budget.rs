//! Budget business logic - Handles all budget-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting
//! budgets. Payloads are validated against the budget schema before any write;
//! the status field only ever holds values from the closed
//! `active`/`inactive`/`depleted` set.

use crate::entities::{Budget, budget};
use crate::errors::Result;
use crate::models::{BudgetStatus, CreateBudgetRequest, UpdateBudgetRequest};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Retrieves all budgets. No filtering or pagination.
pub async fn list_budgets(db: &DatabaseConnection) -> Result<Vec<budget::Model>> {
    Budget::find().all(db).await.map_err(Into::into)
}

/// Finds a budget by its unique ID, returning None if absent.
pub async fn get_budget(db: &DatabaseConnection, id: i64) -> Result<Option<budget::Model>> {
    Budget::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new budget after validating the payload.
///
/// A missing status defaults to `active`. Timestamps are server-assigned.
pub async fn create_budget(
    db: &DatabaseConnection,
    input: CreateBudgetRequest,
) -> Result<budget::Model> {
    input.validate()?;

    let now = Utc::now();
    let status = input.status.unwrap_or(BudgetStatus::Active);
    let budget = budget::ActiveModel {
        name: Set(input.name),
        amount: Set(input.amount),
        currency: Set(input.currency),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        category: Set(input.category),
        status: Set(status.as_str().to_string()),
        metadata: Set(input.metadata),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    budget.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a budget, returning None if absent.
///
/// Only the fields present in the payload are touched; `updated_at` is always
/// refreshed.
pub async fn update_budget(
    db: &DatabaseConnection,
    id: i64,
    input: UpdateBudgetRequest,
) -> Result<Option<budget::Model>> {
    input.validate()?;

    let Some(existing) = Budget::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: budget::ActiveModel = existing.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(amount) = input.amount {
        active.amount = Set(amount);
    }
    if let Some(currency) = input.currency {
        active.currency = Set(currency);
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(Some(end_date));
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(status) = input.status {
        active.status = Set(status.as_str().to_string());
    }
    if let Some(metadata) = input.metadata {
        active.metadata = Set(Some(metadata));
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some).map_err(Into::into)
}

/// Sets the status of a budget to a value from the closed set, returning
/// None if absent.
pub async fn set_budget_status(
    db: &DatabaseConnection,
    id: i64,
    status: BudgetStatus,
) -> Result<Option<budget::Model>> {
    let Some(existing) = Budget::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: budget::ActiveModel = existing.into();
    active.status = Set(status.as_str().to_string());
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some).map_err(Into::into)
}

/// Deletes a budget, returning whether a row was removed.
pub async fn delete_budget(db: &DatabaseConnection, id: i64) -> Result<bool> {
    let result = Budget::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
