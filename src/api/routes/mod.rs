//! Route handlers, one module per resource.

/// Read-only aggregation endpoints
pub mod analytics;
/// Budget CRUD and status patch
pub mod budgets;
/// Recipient CRUD
pub mod recipients;
/// Wallet-signature login
pub mod verify;
/// Workflow CRUD and status toggle
pub mod workflows;
