//! Conversation session management.
//!
//! A `ChatSession` owns the transcript and the unsent draft, runs one
//! turn at a time, and publishes change events for renderers.

mod manager;
mod state;
mod turn;

pub use manager::ChatSession;
pub use state::SessionState;
pub use turn::{SubmitOutcome, TURN_FAILED_MESSAGE};
