//! Completion-call collaborator: the model abstraction and the Gemini client.

pub mod completion;
pub mod errors;
pub mod gemini;

#[cfg(test)]
pub(crate) mod testing;

pub use completion::{CompletionFuture, CompletionModel};
pub use errors::{LlmError, LlmResult};
pub use gemini::GeminiClient;
