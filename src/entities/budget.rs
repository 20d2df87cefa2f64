//! Budget entity - Represents a named monetary allowance record.
//!
//! Each budget has a name, amount, currency, date range, category, and a
//! status drawn from a closed set (`active`, `inactive`, `depleted`).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the budget (e.g., "Q3 Marketing")
    pub name: String,
    /// Allowance amount, always positive
    pub amount: f64,
    /// Currency code the amount is denominated in (e.g., "USDC", "SOL")
    pub currency: String,
    /// When the budget period starts
    pub start_date: DateTimeUtc,
    /// Optional end of the budget period
    pub end_date: Option<DateTimeUtc>,
    /// Category for organization (e.g., "operations", "grants")
    pub category: String,
    /// Budget status: `"active"`, `"inactive"`, or `"depleted"`
    pub status: String,
    /// Free-form metadata object attached by the client
    pub metadata: Option<Json>,
    /// When the budget was created
    pub created_at: DateTimeUtc,
    /// When the budget was last modified
    pub updated_at: DateTimeUtc,
}

/// Budgets have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
