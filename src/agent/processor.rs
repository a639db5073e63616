//! Turn processing for the insurance assistant.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::agent::errors::{AgentError, AgentResult};
use crate::conversation::ids::ThreadId;
use crate::conversation::message::Message;
use crate::conversation::store::ConversationStore;
use crate::llm::completion::CompletionModel;
use crate::llm::errors::LlmError;

/// Reply produced by a successful turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReply {
    /// Assistant text.
    pub response: String,
    /// Thread the turn ran on.
    pub thread_id: ThreadId,
}

/// Conversational agent: one completion call per turn over the full thread history.
///
/// A failed turn keeps the user message in history and records no assistant
/// reply.
pub struct InsuranceAgent {
    store: Arc<ConversationStore>,
    model: Arc<dyn CompletionModel>,
    system_prompt: Message,
}

impl InsuranceAgent {
    /// Create an agent over an injected store and model.
    #[must_use]
    pub fn new(
        store: Arc<ConversationStore>,
        model: Arc<dyn CompletionModel>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            store,
            model,
            system_prompt: Message::system(system_prompt),
        }
    }

    /// Run one turn on `thread_id`.
    ///
    /// The per-thread lock is held from reading the history until both
    /// messages are appended, so concurrent turns on one thread never
    /// interleave.
    ///
    /// # Errors
    /// Returns [`AgentError::EmptyMessage`] for blank input (nothing stored,
    /// no call made) and [`AgentError::Completion`] when the model call fails.
    pub async fn handle_turn(
        &self,
        thread_id: &ThreadId,
        user_text: &str,
    ) -> AgentResult<TurnReply> {
        if user_text.trim().is_empty() {
            return Err(AgentError::EmptyMessage);
        }

        let handle = self.store.get_or_create(thread_id);
        let mut conversation = handle.lock().await;

        let user_message = Message::user(user_text);
        let context = build_context(&self.system_prompt, conversation.messages(), &user_message);

        let started = Instant::now();
        let outcome = self.model.complete(&context).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        conversation.push(user_message)?;

        match outcome {
            Ok(reply) if !reply.trim().is_empty() => {
                conversation.push(Message::assistant(reply.clone()))?;
                info!(
                    thread_id = %thread_id,
                    model = self.model.model_name(),
                    history_len = conversation.len(),
                    elapsed_ms,
                    "turn completed"
                );
                Ok(TurnReply {
                    response: reply,
                    thread_id: thread_id.clone(),
                })
            }
            Ok(_) => {
                warn!(thread_id = %thread_id, elapsed_ms, "model returned a blank reply");
                Err(AgentError::Completion(LlmError::EmptyResponse))
            }
            Err(err) => {
                warn!(
                    thread_id = %thread_id,
                    transient = err.is_transient(),
                    elapsed_ms,
                    "turn failed: {err}"
                );
                Err(AgentError::Completion(err))
            }
        }
    }

    /// Stored history for `thread_id`, empty if the thread is unknown.
    pub async fn get_history(&self, thread_id: &ThreadId) -> Vec<Message> {
        self.store.read(thread_id).await
    }

    /// Name of the underlying model.
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Number of conversations seen so far.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.store.thread_count()
    }
}

/// Invocation context: system instructions, full history, then the new message.
#[must_use]
pub fn build_context(system: &Message, history: &[Message], user: &Message) -> Vec<Message> {
    let mut context = Vec::with_capacity(history.len() + 2);
    context.push(system.clone());
    context.extend_from_slice(history);
    context.push(user.clone());
    context
}
