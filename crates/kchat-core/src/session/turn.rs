//! One conversational turn: submit, await the webhook, settle.

use tracing::{debug, warn};

use kchat_common::{Message, SessionEvent};

use crate::normalize::{normalize, NormalizedReply};
use crate::transport::{Transport, TurnRequest};

use super::manager::ChatSession;
use super::state::PendingGuard;

/// The single user-visible failure text. Diagnostics go to the log.
pub const TURN_FAILED_MESSAGE: &str = "Error: Failed to get response from the server.";

/// What happened to a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The turn ran to settlement: a reply or the uniform error was
    /// appended and the session is idle again.
    Completed,
    /// Trimmed input was empty; nothing changed.
    EmptyInput,
    /// Another turn is in flight; this submit was dropped, not queued.
    Busy,
}

impl ChatSession {
    /// Run one turn. Appends the user message, issues exactly one
    /// transport call, and appends the normalized reply (or the
    /// uniform error). The session returns to idle on every path.
    pub async fn submit(&self, transport: &dyn Transport, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::EmptyInput;
        }

        let Some(guard) = PendingGuard::acquire(&self.pending) else {
            debug!(session = %self.id, "submit dropped, turn already in flight");
            return SubmitOutcome::Busy;
        };
        self.events.publish(SessionEvent::PendingChanged(true));

        // The request carries the transcript as it stood before this
        // entry; the new message travels only in the top-level field.
        let request = {
            let mut transcript = self.transcript.lock().await;
            let prior = transcript.history.clone();
            let user = Message::user(trimmed);
            transcript.history.push(user.clone());
            transcript.draft.clear();
            self.events.publish(SessionEvent::MessageAppended(user));
            TurnRequest {
                message: trimmed.to_string(),
                history: prior,
            }
        };

        let reply = self.run_turn(transport, &request).await;

        {
            let mut transcript = self.transcript.lock().await;
            transcript.history.push(reply.clone());
            self.events.publish(SessionEvent::MessageAppended(reply));
        }

        // Clear pending before observers hear the turn settled.
        drop(guard);
        self.events.publish(SessionEvent::PendingChanged(false));

        SubmitOutcome::Completed
    }

    async fn run_turn(&self, transport: &dyn Transport, request: &TurnRequest) -> Message {
        match transport.send(request).await {
            Ok(raw) => match normalize(&raw) {
                NormalizedReply::Text(text) => Message::assistant(text),
                NormalizedReply::Failure(reason) => {
                    warn!(session = %self.id, %reason, "webhook turn failed");
                    Message::assistant(TURN_FAILED_MESSAGE)
                }
            },
            Err(e) => {
                warn!(session = %self.id, error = %e, "transport error");
                Message::assistant(TURN_FAILED_MESSAGE)
            }
        }
    }
}
