/*
[INPUT]:  Error sources (HTTP, API, URL parsing, configuration)
[OUTPUT]: Structured error types with server-provided messages
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiErrorBody;

/// Main error type for the tugas adapter
#[derive(Error, Debug)]
pub enum TugasError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response
    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TugasError {
    /// Create an API error from status code and optional message
    pub fn api_error(status: StatusCode, message: Option<String>) -> Self {
        TugasError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Create an API error from a raw response body.
    ///
    /// Bodies that are not JSON, lack `message`, or carry an empty one
    /// yield `message: None`.
    pub fn from_error_body(status: StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => parsed.message_text(),
            Err(err) => {
                tracing::debug!(status = status.as_u16(), error = %err, "error body is not valid JSON");
                None
            }
        };
        Self::api_error(status, message)
    }

    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TugasError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            TugasError::Api { status, .. } => Some(*status),
            TugasError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Check if the request never reached the server
    pub fn is_transport(&self) -> bool {
        matches!(self, TugasError::Http(_))
    }
}

/// Result type alias for tugas operations
pub type Result<T> = std::result::Result<T, TugasError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_api_error_creation() {
        let err = TugasError::api_error(StatusCode::BAD_REQUEST, Some("Duplicate task".into()));
        match err {
            TugasError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Duplicate task"));
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[rstest]
    #[case(br#"{"message":"Duplicate task"}"#.as_slice(), Some("Duplicate task"))]
    #[case(br#"{"message":""}"#.as_slice(), None)]
    #[case(br#"{"error":"boom"}"#.as_slice(), None)]
    #[case(br#"{"message":null}"#.as_slice(), None)]
    #[case(br#"{"message":42}"#.as_slice(), Some("42"))]
    #[case(br#"{"message":0}"#.as_slice(), None)]
    #[case(br#"{"message":true}"#.as_slice(), Some("true"))]
    #[case(br#"{"message":false}"#.as_slice(), None)]
    #[case(br#"{"message":{"code":"DUP"}}"#.as_slice(), None)]
    #[case(b"<html>Internal Server Error</html>".as_slice(), None)]
    #[case(b"".as_slice(), None)]
    fn test_from_error_body(#[case] body: &[u8], #[case] expected: Option<&str>) {
        let err = TugasError::from_error_body(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.server_message(), expected);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_display_without_message() {
        let err = TugasError::api_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert_eq!(err.to_string(), "API error (status 500): no message");
        assert!(!err.is_transport());
    }
}
