//! Completion model abstraction.

use std::future::Future;
use std::pin::Pin;

use crate::conversation::message::Message;
use crate::llm::errors::LlmResult;

/// Boxed future type for completion operations.
pub type CompletionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Single-shot text completion over an ordered, role-tagged message list.
pub trait CompletionModel: Send + Sync {
    /// Produce one assistant reply for `messages`.
    ///
    /// # Errors
    /// Returns an error on timeout, connectivity, quota or protocol failures.
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a, LlmResult<String>>;

    /// Model name reported in logs and health output.
    fn model_name(&self) -> &str;
}
