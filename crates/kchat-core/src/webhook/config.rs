//! Webhook transport configuration.

use crate::transport::TransportError;

/// Environment variable holding the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "KCHAT_WEBHOOK_URL";

/// Webhook transport configuration.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create config from the environment (`KCHAT_WEBHOOK_URL`).
    pub fn from_env() -> Result<Self, TransportError> {
        match std::env::var(WEBHOOK_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            _ => Err(TransportError::NotConfigured(format!(
                "set {WEBHOOK_URL_ENV} or configure webhook.url"
            ))),
        }
    }
}
