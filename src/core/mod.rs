//! Core business logic - framework-agnostic operations over the database.
//!
//! Every function takes a `&DatabaseConnection` and returns a crate `Result`;
//! nothing in here knows about HTTP. Request payloads are validated before any
//! write reaches the database.

/// Read-only aggregation over workflows and recipients
pub mod analytics;
/// Budget CRUD operations
pub mod budget;
/// Recipient CRUD operations
pub mod recipient;
/// Workflow CRUD, status toggling, and next-execution calculation
pub mod workflow;
