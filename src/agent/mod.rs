//! Turn processor for the SegurosVida+ assistant.

pub mod errors;
pub mod processor;
pub mod prompts;

pub use errors::{AgentError, AgentResult};
pub use processor::{InsuranceAgent, TurnReply, build_context};
pub use prompts::INSURANCE_AGENT_SYSTEM_PROMPT;
