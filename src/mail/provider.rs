use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

/// Errors that can occur while handing a message to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Missing service id, template id or public key.
    Config(String),
    /// Timeout, DNS, connection refused.
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// Response body could not be read.
    Parse(String),
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Config(msg) => write!(f, "config error: {msg}"),
            EmailError::Network(msg) => write!(f, "network error: {msg}"),
            EmailError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            EmailError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for EmailError {}

/// Template variables shared by the owner notification and the auto-reply.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

/// One outbound email: which template, filled with which values.
pub struct EmailRequest<'a> {
    pub template_id: &'a str,
    pub params: &'a TemplateParams,
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Sends one templated email and returns the HTTP status the service answered with.
    async fn send(&self, request: EmailRequest<'_>) -> Result<u16, EmailError>;
}
