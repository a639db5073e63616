//! Error types for completion calls.

use thiserror::Error;

/// Failure of a single completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The call did not finish within the configured timeout.
    #[error("completion call timed out")]
    Timeout,
    /// The provider could not be reached.
    #[error("connection to completion provider failed: {0}")]
    Connection(String),
    /// The provider refused the call for quota or rate reasons.
    #[error("completion provider quota exhausted: {0}")]
    RateLimited(String),
    /// Non-success HTTP status from the provider.
    #[error("completion provider returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },
    /// The provider answered without any text.
    #[error("completion provider returned an empty reply")]
    EmptyResponse,
    /// Other HTTP client error.
    #[error("http client error: {0}")]
    Http(reqwest::Error),
    /// The response body could not be decoded.
    #[error("could not decode completion response: {0}")]
    Decode(String),
}

impl LlmError {
    /// True for timeout, connectivity and quota failures.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connection(_) | Self::RateLimited(_)
        )
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else if value.is_connect() {
            Self::Connection(value.to_string())
        } else if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Http(value)
        }
    }
}

/// Convenience result alias for completion calls.
pub type LlmResult<T> = Result<T, LlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(LlmError::Timeout.is_transient());
        assert!(LlmError::Connection("refused".to_string()).is_transient());
        assert!(LlmError::RateLimited("429".to_string()).is_transient());
        assert!(!LlmError::EmptyResponse.is_transient());
        assert!(
            !LlmError::Status {
                status: 400,
                body: "bad".to_string()
            }
            .is_transient()
        );
    }
}
