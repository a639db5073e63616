//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::agent::{INSURANCE_AGENT_SYSTEM_PROMPT, InsuranceAgent};
use crate::config::AppConfig;
use crate::conversation::ConversationStore;
use crate::llm::{CompletionModel, GeminiClient, LlmError};

/// Service name reported by `/` and `/health`.
pub const SERVICE_NAME: &str = "SegurosVida+ Insurance Agent API";

/// Shared application state.
pub struct AppState {
    /// Turn processor.
    pub agent: Arc<InsuranceAgent>,
}

impl AppState {
    /// Build state around an already constructed agent.
    #[must_use]
    pub fn with_agent(agent: InsuranceAgent) -> Arc<Self> {
        Arc::new(Self {
            agent: Arc::new(agent),
        })
    }

    /// Build state around any completion model with a fresh store.
    #[must_use]
    pub fn with_model(model: Arc<dyn CompletionModel>) -> Arc<Self> {
        let store = Arc::new(ConversationStore::new());
        Self::with_agent(InsuranceAgent::new(
            store,
            model,
            INSURANCE_AGENT_SYSTEM_PROMPT,
        ))
    }

    /// Create the production state backed by Gemini.
    ///
    /// # Errors
    /// Returns an error if the Gemini client cannot be created.
    pub fn new(config: &AppConfig) -> Result<Arc<Self>, LlmError> {
        let model = GeminiClient::new(&config.llm)?;
        Ok(Self::with_model(Arc::new(model)))
    }

    /// Whether the agent can take turns. State only exists once the agent
    /// has been built, so a constructed state is always ready.
    #[must_use]
    pub const fn agent_ready(&self) -> bool {
        true
    }
}
