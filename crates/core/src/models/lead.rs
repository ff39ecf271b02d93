use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A data room access request from the lead-capture form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub first_name: String,
    pub last_name: String,

    /// Work email
    pub email: String,

    /// Firm / organization
    pub firm: String,

    /// Optional free-text message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LeadRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        firm: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            firm: firm.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Acknowledgement of an accepted (simulated) request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub request: LeadRequest,
}

/// Lifecycle of the lead-capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    /// Fields are editable
    Editing,
    /// Request sent, waiting out the simulated delay
    Submitting,
    /// Confirmation card is shown
    Submitted,
}

impl std::fmt::Display for FormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormStatus::Editing => write!(f, "editing"),
            FormStatus::Submitting => write!(f, "submitting"),
            FormStatus::Submitted => write!(f, "submitted"),
        }
    }
}
