//! In-memory conversation store keyed by thread id.
//!
//! Each thread owns its own mutex, so writers on one thread never block
//! readers or writers on another. The map itself is a `DashMap`, which
//! shards its locks and keeps lookups for different threads independent.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::conversation::errors::{StoreError, StoreResult};
use crate::conversation::ids::ThreadId;
use crate::conversation::message::{Message, Role};

/// Shared, lockable handle to one conversation.
pub type ConversationHandle = Arc<Mutex<Conversation>>;

/// Ordered, append-only history of one thread.
#[derive(Clone, Debug)]
pub struct Conversation {
    thread_id: ThreadId,
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    #[must_use]
    pub fn new(thread_id: ThreadId) -> Self {
        Self {
            thread_id,
            messages: Vec::new(),
        }
    }

    /// Append one message at the end of the history.
    ///
    /// # Errors
    /// Returns an error for system messages or blank content.
    pub fn push(&mut self, message: Message) -> StoreResult<()> {
        if message.role == Role::System {
            return Err(StoreError::SystemMessage);
        }
        if message.is_blank() {
            return Err(StoreError::EmptyContent(message.role));
        }
        self.messages.push(message);
        Ok(())
    }

    /// Thread this conversation belongs to.
    #[must_use]
    pub const fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Messages in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of stored messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Process-lifetime mapping from thread id to conversation.
#[derive(Default)]
pub struct ConversationStore {
    threads: DashMap<ThreadId, ConversationHandle>,
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the conversation for `thread_id`, creating it on first use.
    ///
    /// Callers that need read-modify-append atomicity lock the returned
    /// handle for the whole sequence.
    #[must_use]
    pub fn get_or_create(&self, thread_id: &ThreadId) -> ConversationHandle {
        if let Some(existing) = self.threads.get(thread_id) {
            return Arc::clone(existing.value());
        }

        let entry = self.threads.entry(thread_id.clone()).or_insert_with(|| {
            debug!(thread_id = %thread_id, "creating conversation");
            Arc::new(Mutex::new(Conversation::new(thread_id.clone())))
        });
        Arc::clone(entry.value())
    }

    /// Append one message to the named conversation.
    ///
    /// # Errors
    /// Returns an error for system messages or blank content.
    pub async fn append(&self, thread_id: &ThreadId, message: Message) -> StoreResult<()> {
        let handle = self.get_or_create(thread_id);
        let mut conversation = handle.lock().await;
        conversation.push(message)
    }

    /// Snapshot of the stored history, empty for unknown threads.
    ///
    /// Never creates a conversation.
    pub async fn read(&self, thread_id: &ThreadId) -> Vec<Message> {
        let Some(handle) = self.threads.get(thread_id).map(|entry| Arc::clone(entry.value()))
        else {
            return Vec::new();
        };
        let conversation = handle.lock().await;
        conversation.messages().to_vec()
    }

    /// True when the thread has been referenced at least once.
    #[must_use]
    pub fn contains(&self, thread_id: &ThreadId) -> bool {
        self.threads.contains_key(thread_id)
    }

    /// Number of known threads.
    #[must_use]
    pub fn thread_count(&self) -> usize {
        self.threads.len()
    }
}
