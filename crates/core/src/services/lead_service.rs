use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::lead::{FormStatus, LeadReceipt, LeadRequest};

/// Toast shown once a request is accepted.
pub const SUCCESS_MESSAGE: &str = "Request sent successfully! We'll be in touch shortly.";

/// State machine behind the "Request Data Room Access" form.
///
/// Submission is simulated: nothing leaves the client. The caller drives
/// the two steps and waits out the configured delay in between:
///
/// `begin_submit` → (delay) → `complete_submit` → … → `reset`
#[derive(Debug, Clone)]
pub struct LeadForm {
    status: FormStatus,
    pending: Option<LeadRequest>,
    last_receipt: Option<LeadReceipt>,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            status: FormStatus::Editing,
            pending: None,
            last_receipt: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Inputs and the submit button are disabled while a request is in flight.
    #[must_use]
    pub fn inputs_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            FormStatus::Submitting => "Sending Request...",
            _ => "Request Access",
        }
    }

    /// Receipt of the most recent accepted request, kept after `reset`.
    #[must_use]
    pub fn last_receipt(&self) -> Option<&LeadReceipt> {
        self.last_receipt.as_ref()
    }

    /// Validate the request and start the simulated send.
    pub fn begin_submit(&mut self, request: LeadRequest) -> Result<(), CoreError> {
        if self.status != FormStatus::Editing {
            return Err(self.transition_error("submit"));
        }
        validate_request(&request)?;
        self.status = FormStatus::Submitting;
        self.pending = Some(request);
        Ok(())
    }

    /// Finish the simulated send and show the confirmation.
    pub fn complete_submit(&mut self) -> Result<LeadReceipt, CoreError> {
        let request = match (self.status, self.pending.take()) {
            (FormStatus::Submitting, Some(request)) => request,
            _ => return Err(self.transition_error("complete a submission")),
        };
        let receipt = LeadReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            request,
        };
        info!(id = %receipt.id, firm = %receipt.request.firm, "Data room request received");
        self.status = FormStatus::Submitted;
        self.last_receipt = Some(receipt.clone());
        Ok(receipt)
    }

    /// Return to an empty form ("Submit Another Request").
    pub fn reset(&mut self) -> Result<(), CoreError> {
        if self.status == FormStatus::Submitting {
            return Err(self.transition_error("reset"));
        }
        self.status = FormStatus::Editing;
        Ok(())
    }

    fn transition_error(&self, action: &str) -> CoreError {
        CoreError::InvalidTransition {
            action: action.to_string(),
            state: self.status.to_string(),
        }
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Required fields must be non-blank and the email must look like
/// `local@domain`.
pub fn validate_request(request: &LeadRequest) -> Result<(), CoreError> {
    let required = [
        ("first name", &request.first_name),
        ("last name", &request.last_name),
        ("email", &request.email),
        ("firm", &request.firm),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CoreError::ValidationError(format!("{field} is required")));
        }
    }

    let email = request.email.trim();
    let valid_email = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid_email {
        return Err(CoreError::ValidationError(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}
