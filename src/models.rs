//! Request and response schemas for the REST surface.
//!
//! Request bodies mirror the persistence schemas and are validated here before
//! any write reaches the database. Field names follow the dashboard's wire
//! format (camelCase, with the workflow distribution kind spelled `type`).
//! Validation is explicit: every check pushes a [`FieldError`] and the caller
//! gets all failures at once in a structured 400.

use crate::entities::workflow::{EmbeddedRecipient, RecipientList};
use crate::entities::{budget, recipient, workflow};
use crate::errors::{Error, FieldError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Budget status closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Active,
    Inactive,
    Depleted,
}

impl BudgetStatus {
    /// Stored string form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Depleted => "depleted",
        }
    }
}

/// Workflow status closed set. Workflows are created `active` and only ever
/// flip between the two states via the toggle endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Paused,
}

impl WorkflowStatus {
    /// Stored string form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

/// Workflow distribution kind closed set (`type` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowKind {
    Fixed,
    Percentage,
    Milestone,
}

impl WorkflowKind {
    /// Stored string form of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
            Self::Milestone => "milestone",
        }
    }
}

/// Schedule frequency closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Stored string form of the frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Parses the stored string form back into the enum.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
}

fn check_metadata(metadata: Option<&Value>, errors: &mut Vec<FieldError>) {
    if let Some(value) = metadata {
        if !value.is_object() {
            errors.push(FieldError::new("metadata", "metadata must be an object"));
        }
    }
}

fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation { errors })
    }
}

// ---------------------------------------------------------------------------
// Verify
// ---------------------------------------------------------------------------

/// Body of `POST /api/verify`. All fields are checked for presence by the
/// handler so a missing field yields the route's own error shape rather than
/// a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub signature: Option<String>,
    pub message: Option<String>,
    pub wallet_address: Option<String>,
}

/// Response of `POST /api/verify`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

/// Body of `POST /api/budgets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: String,
    pub status: Option<BudgetStatus>,
    pub metadata: Option<Value>,
}

impl CreateBudgetRequest {
    /// Checks every field against the budget schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name cannot be empty"));
        }
        if self.amount <= 0.0 {
            errors.push(FieldError::new("amount", "amount must be positive"));
        }
        if self.currency.trim().is_empty() {
            errors.push(FieldError::new("currency", "currency cannot be empty"));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "category cannot be empty"));
        }
        check_metadata(self.metadata.as_ref(), &mut errors);
        finish(errors)
    }
}

/// Body of `PUT /api/budgets/:id` - every field optional, present fields are
/// validated with the same rules as on create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub status: Option<BudgetStatus>,
    pub metadata: Option<Value>,
}

impl UpdateBudgetRequest {
    /// Checks the fields that are present against the budget schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "name cannot be empty"));
            }
        }
        if let Some(amount) = self.amount {
            if amount <= 0.0 {
                errors.push(FieldError::new("amount", "amount must be positive"));
            }
        }
        if let Some(currency) = &self.currency {
            if currency.trim().is_empty() {
                errors.push(FieldError::new("currency", "currency cannot be empty"));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                errors.push(FieldError::new("category", "category cannot be empty"));
            }
        }
        check_metadata(self.metadata.as_ref(), &mut errors);
        finish(errors)
    }
}

/// Body of `PATCH /api/budgets/:id/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetStatusPatch {
    pub status: BudgetStatus,
}

/// Wire form of a budget record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub currency: String,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub category: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<budget::Model> for BudgetResponse {
    fn from(model: budget::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            amount: model.amount,
            currency: model.currency,
            start_date: model.start_date,
            end_date: model.end_date,
            category: model.category,
            status: model.status,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Recipients
// ---------------------------------------------------------------------------

/// Body of `POST /api/recipients`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipientRequest {
    pub name: String,
    pub wallet_address: String,
    pub email: Option<String>,
    pub metadata: Option<Value>,
}

impl CreateRecipientRequest {
    /// Checks every field against the recipient schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name cannot be empty"));
        }
        check_wallet_address(&self.wallet_address, &mut errors);
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                errors.push(FieldError::new("email", "email is not valid"));
            }
        }
        check_metadata(self.metadata.as_ref(), &mut errors);
        finish(errors)
    }
}

/// Body of `PUT /api/recipients/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipientRequest {
    pub name: Option<String>,
    pub wallet_address: Option<String>,
    pub email: Option<String>,
    pub metadata: Option<Value>,
}

impl UpdateRecipientRequest {
    /// Checks the fields that are present against the recipient schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "name cannot be empty"));
            }
        }
        if let Some(wallet_address) = &self.wallet_address {
            check_wallet_address(wallet_address, &mut errors);
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                errors.push(FieldError::new("email", "email is not valid"));
            }
        }
        check_metadata(self.metadata.as_ref(), &mut errors);
        finish(errors)
    }
}

fn check_wallet_address(wallet_address: &str, errors: &mut Vec<FieldError>) {
    if !(32..=44).contains(&wallet_address.len()) {
        errors.push(FieldError::new(
            "walletAddress",
            "walletAddress must be between 32 and 44 characters",
        ));
    }
}

/// Wire form of a recipient record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResponse {
    pub id: i64,
    pub name: String,
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<recipient::Model> for RecipientResponse {
    fn from(model: recipient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            wallet_address: model.wallet_address,
            email: model.email,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

/// A payout entry as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecipientInput {
    pub wallet_address: String,
    pub amount: f64,
}

impl WorkflowRecipientInput {
    fn into_embedded(self) -> EmbeddedRecipient {
        EmbeddedRecipient {
            wallet_address: self.wallet_address,
            amount: self.amount,
        }
    }
}

/// The schedule object of a workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    pub frequency: Frequency,
    pub start_date: DateTime<Utc>,
}

/// Body of `POST /api/workflows`. Status is not accepted from the client;
/// workflows are always created `active`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WorkflowKind,
    pub recipients: Vec<WorkflowRecipientInput>,
    pub schedule: ScheduleInput,
}

impl CreateWorkflowRequest {
    /// Checks every field against the workflow schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name cannot be empty"));
        }
        check_workflow_recipients(&self.recipients, &mut errors);
        finish(errors)
    }

    /// Consumes the request into the embedded recipient list.
    #[must_use]
    pub fn into_recipient_list(self) -> RecipientList {
        RecipientList(
            self.recipients
                .into_iter()
                .map(WorkflowRecipientInput::into_embedded)
                .collect(),
        )
    }
}

/// Body of `PUT /api/workflows/:id` - top-level fields optional; when the
/// schedule is present it must be the complete schedule object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<WorkflowKind>,
    pub recipients: Option<Vec<WorkflowRecipientInput>>,
    pub schedule: Option<ScheduleInput>,
}

impl UpdateWorkflowRequest {
    /// Checks the fields that are present against the workflow schema.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                errors.push(FieldError::new("name", "name cannot be empty"));
            }
        }
        if let Some(recipients) = &self.recipients {
            check_workflow_recipients(recipients, &mut errors);
        }
        finish(errors)
    }
}

fn check_workflow_recipients(recipients: &[WorkflowRecipientInput], errors: &mut Vec<FieldError>) {
    for (index, entry) in recipients.iter().enumerate() {
        if entry.amount <= 0.0 {
            errors.push(FieldError::new(
                format!("recipients[{index}].amount"),
                "amount must be positive",
            ));
        }
    }
}

/// Wire form of an embedded payout entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecipientDto {
    pub wallet_address: String,
    pub amount: f64,
}

/// Wire form of the schedule object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub frequency: String,
    pub start_date: DateTime<Utc>,
}

/// Wire form of a workflow record, including the computed `nextExecution`
/// display date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub recipients: Vec<WorkflowRecipientDto>,
    pub schedule: ScheduleDto,
    pub status: String,
    pub next_execution: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkflowResponse {
    /// Builds the wire form of a workflow, computing its next execution date
    /// from the given clock reading. The computation is pure per record:
    /// passing the same `now` for many workflows cannot let one record's
    /// result leak into another's.
    #[must_use]
    pub fn from_model(model: workflow::Model, now: DateTime<Utc>) -> Self {
        let next_execution = crate::core::workflow::next_execution_for(&model, now)
            .format("%Y-%m-%d")
            .to_string();
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            recipients: model
                .recipients
                .0
                .into_iter()
                .map(|entry| WorkflowRecipientDto {
                    wallet_address: entry.wallet_address,
                    amount: entry.amount,
                })
                .collect(),
            schedule: ScheduleDto {
                frequency: model.frequency,
                start_date: model.start_date,
            },
            status: model.status,
            next_execution,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Generic `{message}` acknowledgement body (deletes and the like).
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
