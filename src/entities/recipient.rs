//! Recipient entity - A standalone address-book entry for a payout destination.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recipient database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipients")]
pub struct Model {
    /// Unique identifier for the recipient
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the recipient
    pub name: String,
    /// Base58 Solana wallet address, 32-44 characters
    pub wallet_address: String,
    /// Optional contact email
    pub email: Option<String>,
    /// Free-form metadata object attached by the client
    pub metadata: Option<Json>,
    /// When the recipient was created
    pub created_at: DateTimeUtc,
    /// When the recipient was last modified
    pub updated_at: DateTimeUtc,
}

/// Recipients stand alone; workflows embed their own recipient copies
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
