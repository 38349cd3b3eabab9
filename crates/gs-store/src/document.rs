use std::panic::Location;

use gs_core::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, StoreError};

/// A schemaless store document: the JSON object held under a document id.
/// The id itself lives outside the document, as the store keys it.
pub type Document = serde_json::Map<String, Value>;

/// Serialize a model into a document. Fails when the model does not
/// serialize to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument {
            message: format!("expected a JSON object, got {}", json_kind(&other)),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Deserialize a document back into a model.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
