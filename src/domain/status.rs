use std::fmt;

use serde_json::Value;

use super::error::TransportError;

/// Body of a successful health check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReply {
    pub message: Option<String>,
}

impl HealthReply {
    /// Lenient parse: a non-JSON body or one without `message` is still healthy.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| match value.get("message") {
                Some(Value::String(message)) => Some(message.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            });
        Self { message }
    }
}

/// Availability of the remote service, as last observed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServerStatus {
    #[default]
    Checking,
    Running {
        message: Option<String>,
    },
    Unreachable {
        error: String,
    },
}

impl ServerStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, ServerStatus::Running { .. })
    }
}

impl From<Result<HealthReply, TransportError>> for ServerStatus {
    fn from(result: Result<HealthReply, TransportError>) -> Self {
        match result {
            Ok(reply) => ServerStatus::Running {
                message: reply.message,
            },
            Err(err) => ServerStatus::Unreachable {
                error: err.to_string(),
            },
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerStatus::Checking => f.write_str("Checking..."),
            ServerStatus::Running { message: Some(message) } if !message.is_empty() => {
                write!(f, "Server is running. {}", message)
            }
            ServerStatus::Running { .. } => f.write_str("Server is running."),
            ServerStatus::Unreachable { error } if error.is_empty() => {
                f.write_str("Server is not responding. Error: Unknown error")
            }
            ServerStatus::Unreachable { error } => {
                write!(f, "Server is not responding. Error: {}", error)
            }
        }
    }
}
