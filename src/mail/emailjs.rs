//! EmailJS provider using the REST send endpoint.
//!
//! `POST {base_url}/api/v1.0/email/send` with the service id, a template id,
//! the public key (`user_id`) and the template parameters. EmailJS answers
//! `200 OK` with a plain-text body on success.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;

use crate::mail::{EmailError, EmailProvider, EmailRequest, TemplateParams};

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
const SEND_PATH: &str = "/api/v1.0/email/send";

// ============================================================================
// EmailJS API Types
// ============================================================================

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

// ============================================================================
// Provider Implementation
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub public_key: String,
    /// Only needed when the EmailJS account enforces private-key auth.
    pub private_key: Option<String>,
    pub base_url: Option<String>,
}

pub struct EmailJsProvider {
    config: EmailJsConfig,
    base_url: String,
    client: reqwest::Client,
}

impl EmailJsProvider {
    pub fn new(config: EmailJsConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAILJS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            config,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn check_config(&self, template_id: &str) -> Result<(), EmailError> {
        let missing = [
            ("service id", self.config.service_id.as_str()),
            ("public key", self.config.public_key.as_str()),
            ("template id", template_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        match missing {
            Some((what, _)) => Err(EmailError::Config(format!("EmailJS {what} is not set"))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmailProvider for EmailJsProvider {
    fn name(&self) -> &str {
        "emailjs"
    }

    async fn send(&self, request: EmailRequest<'_>) -> Result<u16, EmailError> {
        self.check_config(request.template_id)?;

        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: request.template_id,
            user_id: &self.config.public_key,
            template_params: request.params,
            access_token: self.config.private_key.as_deref(),
        };

        info!(
            "EmailJS send: service={}, template={}",
            self.config.service_id, request.template_id
        );

        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEND_PATH))
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        debug!("EmailJS response status: {}", status);

        if !response.status().is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("EmailJS API error: {} - {}", status, err_body);
            return Err(EmailError::Api {
                status,
                message: err_body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| EmailError::Parse(e.to_string()))?;
        debug!("EmailJS response body: {}", text);
        Ok(status)
    }
}
