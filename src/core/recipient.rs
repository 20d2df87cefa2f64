//! Recipient business logic - address-book CRUD.
//!
//! Recipients are standalone records; deleting one does not touch any
//! workflow that embeds a copy of the same wallet address.

use crate::entities::{Recipient, recipient};
use crate::errors::Result;
use crate::models::{CreateRecipientRequest, UpdateRecipientRequest};
use chrono::Utc;
use sea_orm::{Set, prelude::*};

/// Retrieves all recipients. No filtering or pagination.
pub async fn list_recipients(db: &DatabaseConnection) -> Result<Vec<recipient::Model>> {
    Recipient::find().all(db).await.map_err(Into::into)
}

/// Finds a recipient by its unique ID, returning None if absent.
pub async fn get_recipient(db: &DatabaseConnection, id: i64) -> Result<Option<recipient::Model>> {
    Recipient::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Creates a new recipient after validating the payload.
pub async fn create_recipient(
    db: &DatabaseConnection,
    input: CreateRecipientRequest,
) -> Result<recipient::Model> {
    input.validate()?;

    let now = Utc::now();
    let recipient = recipient::ActiveModel {
        name: Set(input.name),
        wallet_address: Set(input.wallet_address),
        email: Set(input.email),
        metadata: Set(input.metadata),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    recipient.insert(db).await.map_err(Into::into)
}

/// Applies a partial update to a recipient, returning None if absent.
pub async fn update_recipient(
    db: &DatabaseConnection,
    id: i64,
    input: UpdateRecipientRequest,
) -> Result<Option<recipient::Model>> {
    input.validate()?;

    let Some(existing) = Recipient::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let mut active: recipient::ActiveModel = existing.into();
    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(wallet_address) = input.wallet_address {
        active.wallet_address = Set(wallet_address);
    }
    if let Some(email) = input.email {
        active.email = Set(Some(email));
    }
    if let Some(metadata) = input.metadata {
        active.metadata = Set(Some(metadata));
    }
    active.updated_at = Set(Utc::now());

    active.update(db).await.map(Some).map_err(Into::into)
}

/// Deletes a recipient, returning whether a row was removed. Hard delete;
/// there is no soft-delete flag on recipients.
pub async fn delete_recipient(db: &DatabaseConnection, id: i64) -> Result<bool> {
    let result = Recipient::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
