use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Message;

/// Change notifications emitted by a chat session so renderers can
/// redraw without polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    MessageAppended(Message),
    PendingChanged(bool),
}

pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
