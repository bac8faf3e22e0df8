//! Transport implementation posting turns to the webhook endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::normalize::RawReply;
use crate::transport::{Transport, TransportError, TurnRequest};

use super::config::WebhookConfig;

/// HTTP client for the conversational webhook.
pub struct WebhookClient {
    config: WebhookConfig,
    http: reqwest::Client,
}

impl WebhookClient {
    /// Build a client. No request timeout: a turn runs to completion
    /// and the session waits for it.
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The wire body the webhook expects: the new message under
    /// `chatInput`, the prior transcript under `chatHistory`.
    pub(crate) fn build_request_body(&self, request: &TurnRequest) -> serde_json::Value {
        serde_json::json!({
            "chatInput": request.message,
            "chatHistory": request.history,
        })
    }
}

#[async_trait]
impl Transport for WebhookClient {
    async fn send(&self, request: &TurnRequest) -> Result<RawReply, TransportError> {
        let body = self.build_request_body(request);

        debug!(url = %self.config.url, history_len = request.history.len(), "webhook request");

        let response = self
            .http
            .post(&self.config.url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(RawReply::HttpStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!(bytes = text.len(), "raw webhook response");
        Ok(RawReply::Body(text))
    }
}
