//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::agent::AgentError;
use crate::llm::LlmError;

/// Error returned by API handlers.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description.
    pub detail: String,
    /// Same text, for clients that read `error`.
    pub error: String,
}

impl ApiError {
    /// Build an error with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 500 with the given detail.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    /// Status code of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        let status = match &err {
            AgentError::EmptyMessage => StatusCode::BAD_REQUEST,
            AgentError::Completion(LlmError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            AgentError::Completion(LlmError::RateLimited(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AgentError::Completion(_) => StatusCode::BAD_GATEWAY,
            AgentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, format!("Error al procesar mensaje: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.detail.clone(),
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AgentError::EmptyMessage, StatusCode::BAD_REQUEST),
            (
                AgentError::Completion(LlmError::Timeout),
                StatusCode::GATEWAY_TIMEOUT,
            ),
            (
                AgentError::Completion(LlmError::RateLimited("quota".to_string())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AgentError::Completion(LlmError::Connection("refused".to_string())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AgentError::Completion(LlmError::EmptyResponse),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
