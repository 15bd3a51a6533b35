use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::SubmitError;

/// A validated submission body.
///
/// Wraps the complete parsed object so unknown fields and key order are
/// forwarded untouched. `data` is always an array; `file_b64` is passed
/// through as-is and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RequestPayload(Map<String, Value>);

impl RequestPayload {
    pub fn new(data: Vec<Value>) -> Self {
        let mut body = Map::new();
        body.insert("data".to_string(), Value::Array(data));
        Self(body)
    }

    /// Parse raw user input into a payload.
    ///
    /// Text that is not JSON yields [`SubmitError::InvalidJson`]; JSON without
    /// an array-valued `data` field yields [`SubmitError::DataNotArray`].
    pub fn parse(input: &str) -> Result<Self, SubmitError> {
        let value = parse_json(input).map_err(|_| SubmitError::InvalidJson)?;
        Self::try_from(value)
    }

    pub fn data(&self) -> &[Value] {
        match self.0.get("data") {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    pub fn file_b64(&self) -> Option<&str> {
        self.0.get("file_b64").and_then(Value::as_str)
    }

    pub fn with_file_b64(mut self, encoded: impl Into<String>) -> Self {
        self.0
            .insert("file_b64".to_string(), Value::String(encoded.into()));
        self
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// Parse any JSON text: numbers keep their literal form and nesting depth is
/// not capped.
pub fn parse_json(input: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();

    #[cfg(not(target_arch = "wasm32"))]
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    #[cfg(target_arch = "wasm32")]
    let value = Value::deserialize(&mut deserializer)?;

    deserializer.end()?;
    Ok(value)
}

impl TryFrom<Value> for RequestPayload {
    type Error = SubmitError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(body) if body.get("data").is_some_and(Value::is_array) => Ok(Self(body)),
            _ => Err(SubmitError::DataNotArray),
        }
    }
}
