//! Error types for the console controller
//!
//! The `Display` output of these errors is the exact text shown to the user.

use serde_json::Value;
use thiserror::Error;

/// Failures reported by a transport while talking to the remote service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// No response was received (connect failure, timeout, aborted fetch)
    #[error("{0}")]
    NoResponse(String),

    /// Anything else, including a reply the client cannot interpret
    #[error("{0}")]
    Other(String),
}

/// Errors that terminate a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input text is not valid JSON
    #[error("Invalid JSON input. Please check your input format.")]
    InvalidJson,

    /// Input parsed, but `data` is missing or not an array
    #[error("Invalid input: \"data\" must be an array.")]
    DataNotArray,

    /// Server replied with an error status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Request went out but nothing came back
    #[error("Network error: No response received from the server. Error: {0}")]
    Network(String),

    /// Unexpected failure
    #[error("Error: {0}")]
    Other(String),
}

impl From<TransportError> for SubmitError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Status { status, body } => SubmitError::Api {
                status,
                message: describe_error_body(&body),
            },
            TransportError::NoResponse(text) => SubmitError::Network(text),
            TransportError::Other(text) => SubmitError::Other(text),
        }
    }
}

/// Extracts the user-facing message from an error response body.
///
/// Uses the body's `message` field when it is present and truthy, otherwise
/// the whole body as compact JSON, or the raw text when the body is not JSON.
pub fn describe_error_body(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(message) if is_truthy(message) => message.to_string(),
        _ => value.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
