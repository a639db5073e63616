//! Thread identifiers.
//!
//! A thread id is chosen by the caller and never interpreted: any non-blank
//! string scopes one independent conversation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Thread id used when the caller does not supply one.
pub const DEFAULT_THREAD_ID: &str = "default";

/// Opaque identifier scoping one conversation's history.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wrap a caller-supplied identifier.
    ///
    /// Blank identifiers fall back to [`DEFAULT_THREAD_ID`].
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.trim().is_empty() {
            Self::default()
        } else {
            Self(raw)
        }
    }

    /// Borrow the raw identifier.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the raw identifier.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self(DEFAULT_THREAD_ID.to_string())
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThreadId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ThreadId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for ThreadId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_falls_back_to_default() {
        assert_eq!(ThreadId::new("   ").as_str(), DEFAULT_THREAD_ID);
        assert_eq!(ThreadId::new("").as_str(), DEFAULT_THREAD_ID);
    }

    #[test]
    fn test_id_is_kept_verbatim() {
        let id = ThreadId::from(" nextjs_1700000000_ab12 ");
        assert_eq!(id.as_str(), " nextjs_1700000000_ab12 ");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: ThreadId = serde_json::from_str("\"t1\"").unwrap_or_default();
        assert_eq!(id.as_str(), "t1");
        assert_eq!(serde_json::to_string(&id).unwrap_or_default(), "\"t1\"");
    }
}
