pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, KchatError};
pub use events::{EventBus, SessionEvent};
pub use id::SessionId;
pub use types::{Message, Role};

pub type Result<T> = std::result::Result<T, KchatError>;
