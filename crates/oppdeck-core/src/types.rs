//! Domain types shared across oppdeck crates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal operation - the event loop is running
    #[default]
    Running,
    /// Quit requested - the event loop drains and exits
    Quitting,
}

/// A persisted urgent-opportunity record, owned by the remote service.
///
/// The client only ever holds read copies of these; mutation happens through
/// the create operation with a [`NewOpportunity`] payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    /// Service-assigned record identifier
    pub id: String,
    pub name: String,
    pub stage_name: String,
    pub amount: f64,
    pub close_date: NaiveDate,
    /// Owning account identifier
    pub account_id: String,
    /// Records in this table are always flagged urgent by the service
    #[serde(default)]
    pub urgent: bool,
}

/// The validated output of the creation form.
///
/// Built only after every field passes validation; discarded on cancel or
/// after a successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDraft {
    pub name: String,
    pub stage_name: String,
    pub amount: f64,
    pub close_date: NaiveDate,
}

/// A draft enriched with the owning account and the urgent flag - the
/// payload of the create operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOpportunity {
    pub name: String,
    pub stage_name: String,
    pub amount: f64,
    pub close_date: NaiveDate,
    pub account_id: String,
    pub urgent: bool,
}

impl NewOpportunity {
    /// Attach ownership to a validated draft.
    pub fn from_draft(draft: OpportunityDraft, account_id: impl Into<String>) -> Self {
        Self {
            name: draft.name,
            stage_name: draft.stage_name,
            amount: draft.amount,
            close_date: draft.close_date,
            account_id: account_id.into(),
            urgent: true,
        }
    }

    /// Presence re-check before the create request (defense in depth).
    ///
    /// The form already validated the draft, but the create path re-checks
    /// required fields the way the table component does before calling the
    /// service.
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.stage_name.trim().is_empty()
            && self.amount > 0.0
            && !self.account_id.trim().is_empty()
    }
}

/// One entry of the remote stage picklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOption {
    /// Human-readable label shown in the selector
    pub label: String,
    /// The value persisted as `stage_name`
    pub value: String,
}

impl StageOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Severity/appearance of a [`Toast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient user notification rendered as an overlay and auto-dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        variant: ToastVariant,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastVariant::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastVariant::Error)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastVariant::Warning)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastVariant::Info)
    }
}
