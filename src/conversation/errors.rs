//! Error types for the conversation store.

use thiserror::Error;

use crate::conversation::message::Role;

/// Conversation store error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Stored messages must carry text.
    #[error("refusing to store an empty {0} message")]
    EmptyContent(Role),
    /// System instructions are injected per call and never persisted.
    #[error("system messages are not stored per conversation")]
    SystemMessage,
}

/// Convenience result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
