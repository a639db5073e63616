//! Conversation state: thread ids, messages, and the per-thread store.

pub mod errors;
pub mod ids;
pub mod message;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use ids::{DEFAULT_THREAD_ID, ThreadId};
pub use message::{Message, Role};
pub use store::{Conversation, ConversationHandle, ConversationStore};
