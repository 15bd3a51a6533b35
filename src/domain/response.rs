//! Reply from the BFHL service and its projection onto selected fields

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::selection::{FieldSelection, ResponseField};

/// Opaque mapping returned by a successful submission
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ResponseObject(Map<String, Value>);

impl ResponseObject {
    /// Returns `None` unless the value is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reduce the response to the selected fields, in selection order.
    ///
    /// A selected field missing from the response stays in the projection
    /// with no value.
    pub fn project(&self, selection: &FieldSelection) -> Projection {
        let entries = selection
            .iter()
            .map(|field| (field, self.0.get(field.key()).cloned()))
            .collect();
        Projection { entries }
    }
}

/// The response reduced to user-selected fields
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    entries: Vec<(ResponseField, Option<Value>)>,
}

impl Projection {
    pub fn get(&self, field: ResponseField) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(field, _)| field.key())
    }

    /// JSON rendering; absent values are omitted.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        for (field, value) in &self.entries {
            if let Some(value) = value {
                object.insert(field.key().to_string(), value.clone());
            }
        }
        Value::Object(object)
    }

    /// Two-space indented JSON for display
    pub fn to_pretty_json(&self) -> String {
        format!("{:#}", self.to_value())
    }
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.entries.iter().filter(|(_, v)| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (field, value) in &self.entries {
            if let Some(value) = value {
                map.serialize_entry(field.key(), value)?;
            }
        }
        map.end()
    }
}
