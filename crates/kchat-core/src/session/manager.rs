//! ChatSession struct and snapshot/draft accessors.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{broadcast, Mutex};

use kchat_common::{EventBus, Message, SessionEvent, SessionId};

use super::state::SessionState;

pub(super) struct Transcript {
    pub(super) history: Vec<Message>,
    pub(super) draft: String,
}

/// A single conversation: transcript, draft, and one-at-a-time turn
/// execution. History is append-only and mutated only here; renderers
/// read snapshots and subscribe to events.
pub struct ChatSession {
    pub(super) transcript: Mutex<Transcript>,
    pub(super) pending: AtomicBool,
    pub(super) events: EventBus,
    pub(super) id: SessionId,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Mutex::new(Transcript {
                history: Vec::new(),
                draft: String::new(),
            }),
            pending: AtomicBool::new(false),
            events: EventBus::new(64),
            id: SessionId::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Subscribe to change notifications (new messages, pending flips).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Snapshot the session for rendering.
    pub async fn state(&self) -> SessionState {
        let transcript = self.transcript.lock().await;
        SessionState {
            history: transcript.history.clone(),
            pending: self.pending.load(Ordering::Acquire),
            draft: transcript.draft.clone(),
        }
    }

    pub async fn set_draft(&self, draft: impl Into<String>) {
        self.transcript.lock().await.draft = draft.into();
    }

    pub async fn draft(&self) -> String {
        self.transcript.lock().await.draft.clone()
    }

    pub async fn history_len(&self) -> usize {
        self.transcript.lock().await.history.len()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
