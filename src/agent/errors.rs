//! Error types for turn processing.

use thiserror::Error;

use crate::conversation::errors::StoreError;
use crate::llm::errors::LlmError;

/// Why a turn produced no reply.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The user message was empty after trimming.
    #[error("message must not be empty")]
    EmptyMessage,
    /// The completion call failed.
    #[error("completion failed: {0}")]
    Completion(#[from] LlmError),
    /// The store refused a message.
    #[error("conversation store error: {0}")]
    Store(#[from] StoreError),
}

/// Convenience result alias for turn processing.
pub type AgentResult<T> = Result<T, AgentError>;
