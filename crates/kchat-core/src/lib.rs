//! Conversation core for kchat.
//!
//! Provides:
//! - Reply normalization: arbitrary webhook payloads reduced to display
//!   text or a failure reason
//! - Session management with one-turn-at-a-time execution
//! - A narrow `Transport` trait plus the reqwest webhook client

pub mod normalize;
pub mod session;
pub mod transport;
pub mod webhook;

pub use normalize::{normalize, NormalizedReply, RawReply};
pub use session::{ChatSession, SessionState, SubmitOutcome};
pub use transport::{Transport, TransportError, TurnRequest};
pub use webhook::{WebhookClient, WebhookConfig};
