//! Contact and booking submissions: one owner notification, one auto-reply.
//!
//! A submission only counts as delivered when both calls answer `200`.
//! The owner notification goes first; if it fails the auto-reply is not sent.
//! No retries, no timeout.

use std::fmt;

use log::{info, warn};

use crate::core::state::{BookingRequest, ContactDraft};
use crate::mail::{EmailError, EmailProvider, EmailRequest, TemplateParams};

/// Template ids for the two outbound emails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Templates {
    pub owner_notification: String,
    pub auto_reply: String,
}

/// Failure handed back to the page. `message` and `code` are for logs; the
/// user only ever sees a generic explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionError {
    pub message: String,
    pub code: String,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed [{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for SubmissionError {}

impl From<EmailError> for SubmissionError {
    fn from(err: EmailError) -> Self {
        let code = match &err {
            EmailError::Config(_) => "config".to_string(),
            EmailError::Network(_) => "network".to_string(),
            EmailError::Api { status, .. } => status.to_string(),
            EmailError::Parse(_) => "parse".to_string(),
        };
        SubmissionError {
            message: err.to_string(),
            code,
        }
    }
}

impl TemplateParams {
    /// Parameters for a contact message. The phone number, when given, is
    /// appended to the message body since the templates have no phone field.
    pub fn contact(draft: &ContactDraft) -> Self {
        let message = if draft.phone_number.is_empty() {
            draft.message.clone()
        } else {
            format!("{}\n\nPhone: {}", draft.message, draft.phone_number)
        };
        TemplateParams {
            name: draft.name.clone(),
            email: draft.email.clone(),
            title: format!("New contact message from {}", draft.name),
            message,
        }
    }

    /// Parameters for a booking request. The chosen service and the day the
    /// visitor was looking at go in the message body.
    pub fn booking(request: &BookingRequest) -> Self {
        let mut message = format!("Service: {}", request.service);
        if let Some(day) = request.day {
            message.push_str(&format!("\nPreferred day: {}", day.format("%A, %B %-d")));
        }
        TemplateParams {
            name: request.name.clone(),
            email: request.email.clone(),
            title: format!("New booking request from {}", request.name),
            message,
        }
    }
}

async fn send_expecting_ok(
    provider: &dyn EmailProvider,
    template_id: &str,
    params: &TemplateParams,
) -> Result<(), SubmissionError> {
    let status = provider
        .send(EmailRequest {
            template_id,
            params,
        })
        .await?;
    if status != 200 {
        return Err(SubmissionError {
            message: format!("unexpected status {status} from {}", provider.name()),
            code: status.to_string(),
        });
    }
    Ok(())
}

async fn send_pair(
    provider: &dyn EmailProvider,
    templates: &Templates,
    params: &TemplateParams,
) -> Result<(), SubmissionError> {
    if let Err(e) = send_expecting_ok(provider, &templates.owner_notification, params).await {
        warn!("Owner notification failed: {}", e);
        return Err(e);
    }
    if let Err(e) = send_expecting_ok(provider, &templates.auto_reply, params).await {
        warn!("Auto-reply failed: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Sends an already validated and sanitized draft.
pub async fn submit_contact(
    provider: &dyn EmailProvider,
    templates: &Templates,
    draft: &ContactDraft,
) -> Result<(), SubmissionError> {
    send_pair(provider, templates, &TemplateParams::contact(draft)).await?;
    info!("Contact submission delivered via {}", provider.name());
    Ok(())
}

/// Sends an already validated and sanitized booking request through the
/// same two templates as the contact form.
pub async fn submit_booking(
    provider: &dyn EmailProvider,
    templates: &Templates,
    request: &BookingRequest,
) -> Result<(), SubmissionError> {
    send_pair(provider, templates, &TemplateParams::booking(request)).await?;
    info!(
        "Booking request for {} delivered via {}",
        request.service,
        provider.name()
    );
    Ok(())
}
