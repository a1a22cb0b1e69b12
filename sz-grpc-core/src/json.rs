//! # JSON Arguments and Results
//!
//! Senzing carries every document (record definitions, search attributes, configurations)
//! as a JSON string. Callers may pass either an already serialized string or a structured
//! [`serde_json::Value`]; [`JsonInput`] keeps the two apart until the request is built.
//!
//! ```rust
//! use serde_json::json;
//! use sz_grpc_core::json::JsonInput;
//!
//! let text = JsonInput::from(r#"{"NAME_FULL": "Robert Smith"}"#);
//! let structured = JsonInput::from(json!({"NAME_FULL": "Robert Smith"}));
//!
//! assert_eq!(text.render("add_record", "record_definition").unwrap(), r#"{"NAME_FULL": "Robert Smith"}"#);
//! assert_eq!(structured.render("add_record", "record_definition").unwrap(), r#"{"NAME_FULL":"Robert Smith"}"#);
//! ```
use crate::error::{ConnectionFailure, SzError};
use serde::{Serialize, de::IgnoredAny};
use serde_json::{Value, json};

/// A JSON document argument.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonInput {
    /// Pre-serialized JSON, sent byte for byte once it has been checked to parse.
    Text(String),
    /// A JSON object or array, serialized compactly with sorted keys.
    Structured(Value),
}

impl JsonInput {
    /// Produces the wire form of this argument.
    ///
    /// Fails with a usage error when the text is not JSON, or when the structured value is
    /// neither an object nor an array.
    pub fn render(&self, operation: &'static str, argument: &'static str) -> Result<String, SzError> {
        match self {
            JsonInput::Text(text) => {
                serde_json::from_str::<IgnoredAny>(text)
                    .map_err(|e| SzError::usage(operation, argument, format!("not valid JSON: {e}")))?;
                Ok(text.clone())
            }
            JsonInput::Structured(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_string(value)
                    .map_err(|e| SzError::usage(operation, argument, e.to_string()))
            }
            JsonInput::Structured(other) => Err(SzError::usage(
                operation,
                argument,
                format!("expected a JSON object or array, got {}", value_kind(other)),
            )),
        }
    }
}

impl From<&str> for JsonInput {
    fn from(text: &str) -> Self {
        JsonInput::Text(text.to_string())
    }
}

impl From<String> for JsonInput {
    fn from(text: String) -> Self {
        JsonInput::Text(text)
    }
}

impl From<Value> for JsonInput {
    fn from(value: Value) -> Self {
        JsonInput::Structured(value)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string value",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Identifies a record by the data source it was loaded from and its id within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecordKey {
    #[serde(rename = "DATA_SOURCE")]
    pub data_source_code: String,
    #[serde(rename = "RECORD_ID")]
    pub record_id: String,
}

impl RecordKey {
    pub fn new(data_source_code: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            data_source_code: data_source_code.into(),
            record_id: record_id.into(),
        }
    }
}

/// `{"ENTITIES":[{"ENTITY_ID":1},...]}`, or an empty string when `ids` is empty.
pub fn entity_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return String::new();
    }
    let entities: Vec<Value> = ids.iter().map(|id| json!({ "ENTITY_ID": id })).collect();
    json!({ "ENTITIES": entities }).to_string()
}

/// `{"RECORDS":[{"DATA_SOURCE":"..","RECORD_ID":".."},...]}`, or an empty string when
/// `keys` is empty.
pub fn record_keys(keys: &[RecordKey]) -> String {
    if keys.is_empty() {
        return String::new();
    }
    json!({ "RECORDS": keys }).to_string()
}

/// `{"DATA_SOURCES":["..",...]}`, or an empty string when `codes` is empty.
pub fn data_sources<S: AsRef<str>>(codes: &[S]) -> String {
    if codes.is_empty() {
        return String::new();
    }
    let codes: Vec<&str> = codes.iter().map(AsRef::as_ref).collect();
    json!({ "DATA_SOURCES": codes }).to_string()
}

/// `{"DSRC_CODE":".."}`, the definition accepted by the data source operations.
pub fn data_source_definition(code: &str) -> JsonInput {
    JsonInput::Structured(json!({ "DSRC_CODE": code }))
}

/// Parses a string result into a JSON value.
///
/// An unparseable payload means the remote side answered garbage and is reported as a
/// connection failure of `operation`.
pub fn parse_result(operation: &'static str, result: &str) -> Result<Value, SzError> {
    serde_json::from_str(result)
        .map_err(|e| SzError::connection(operation, ConnectionFailure::MalformedResponse(e)))
}
