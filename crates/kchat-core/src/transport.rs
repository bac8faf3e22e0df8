//! The narrow seam between the session and whatever does the network call.

use async_trait::async_trait;
use serde::Serialize;

use kchat_common::Message;

use crate::normalize::RawReply;

/// One outbound turn: the new message plus the transcript as it stood
/// before that message was appended.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRequest {
    pub message: String,
    pub history: Vec<Message>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("webhook not configured: {0}")]
    NotConfigured(String),
}

/// Performs one network request per turn. Resolving with
/// `RawReply::HttpStatus` is a resolution, not an error; `Err` is
/// reserved for transport-level failure (connection refused, DNS, ...).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &TurnRequest) -> Result<RawReply, TransportError>;
}
