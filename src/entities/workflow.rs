//! Workflow entity - A named, recurring payment-distribution record.
//!
//! Each workflow carries an embedded recipient list (stored as a JSON column,
//! with no foreign key to the standalone `recipients` table), a schedule made
//! of a frequency and a start date, and a two-state `active`/`paused` status.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A payout entry embedded inside a workflow.
///
/// Duplicates identity data held in the `recipients` table; nothing keeps the
/// two in sync.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedRecipient {
    /// Base58 wallet address receiving the payout
    pub wallet_address: String,
    /// Payout amount, always positive
    pub amount: f64,
}

/// The embedded recipient list, persisted as a single JSON column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct RecipientList(pub Vec<EmbeddedRecipient>);

/// Workflow database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workflows")]
pub struct Model {
    /// Unique identifier for the workflow
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the workflow
    pub name: String,
    /// Distribution kind: `"fixed"`, `"percentage"`, or `"milestone"`
    /// (serialized as `type` on the wire)
    pub kind: String,
    /// Embedded payout list, one entry per destination wallet
    #[sea_orm(column_type = "Json")]
    pub recipients: RecipientList,
    /// Schedule frequency: `"daily"`, `"weekly"`, `"monthly"`, or `"yearly"`
    pub frequency: String,
    /// First scheduled execution date
    pub start_date: DateTimeUtc,
    /// Workflow status: `"active"` or `"paused"`
    pub status: String,
    /// When the workflow was created
    pub created_at: DateTimeUtc,
    /// When the workflow was last modified
    pub updated_at: DateTimeUtc,
}

/// Workflows embed their recipients; no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
