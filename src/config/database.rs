//! Database connection and table creation using `SeaORM`.
//!
//! Tables are generated from the entity definitions via
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without manual SQL.

use crate::entities::{Budget, Recipient, Workflow};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the database at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `budgets`, `recipients`, and `workflows` tables from the
/// entity definitions. Intended for first boot against an empty database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut budget_table = schema.create_table_from_entity(Budget);
    let mut recipient_table = schema.create_table_from_entity(Recipient);
    let mut workflow_table = schema.create_table_from_entity(Workflow);

    db.execute(builder.build(budget_table.if_not_exists())).await?;
    db.execute(builder.build(recipient_table.if_not_exists()))
        .await?;
    db.execute(builder.build(workflow_table.if_not_exists()))
        .await?;

    Ok(())
}
