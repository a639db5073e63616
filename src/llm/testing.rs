//! Scripted completion model for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::conversation::message::Message;
use crate::llm::completion::{CompletionFuture, CompletionModel};
use crate::llm::errors::{LlmError, LlmResult};

/// One scripted outcome.
pub enum Scripted {
    Reply(String),
    Fail(LlmError),
}

/// Replays scripted outcomes; once the script is exhausted it echoes the
/// last user message back.
#[derive(Default)]
pub struct ScriptedModel {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<Vec<Message>>>,
    delay: Duration,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn then_reply(self, text: &str) -> Self {
        self.push(Scripted::Reply(text.to_string()))
    }

    pub fn then_fail(self, err: LlmError) -> Self {
        self.push(Scripted::Fail(err))
    }

    fn push(self, outcome: Scripted) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Message lists received, one entry per call.
    pub fn seen(&self) -> Vec<Vec<Message>> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

impl CompletionModel for ScriptedModel {
    fn complete<'a>(&'a self, messages: &'a [Message]) -> CompletionFuture<'a, LlmResult<String>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(messages.to_vec());
            }
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
            match next {
                Some(Scripted::Reply(text)) => Ok(text),
                Some(Scripted::Fail(err)) => Err(err),
                None => Ok(format!(
                    "re: {}",
                    messages.last().map_or("", |m| m.content.as_str())
                )),
            }
        })
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
