//! Document payload and the generic "wrap state as document" utility
//!
//! A document is carried as the raw JSON object it arrived as. Known fields
//! are read through accessors, so whatever was parsed is written back
//! unchanged, including absent, `null` or unusually typed fields.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::kind::DocumentType;
use crate::Result;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Human-readable name, empty when absent or not a string
    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    /// Raw `documentType` discriminant, empty when absent or not a string
    pub fn document_type(&self) -> &str {
        self.str_field("documentType")
    }

    /// Number of operations applied, when present
    pub fn revision(&self) -> Option<u64> {
        self.fields.get("revision").and_then(Value::as_u64)
    }

    /// Model-specific state, `null` when absent
    pub fn state(&self) -> &Value {
        self.fields.get("state").unwrap_or(&NULL)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Set a top-level field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Parse the discriminant into a registered document type
    pub fn kind(&self) -> Result<DocumentType> {
        self.document_type().parse()
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// Output of a model's empty-state factory, before it becomes a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedState {
    pub name: String,
    pub document_type: String,
    pub state: Value,
}

impl ExtendedState {
    pub fn new(document_type: DocumentType, state: Value) -> Self {
        Self {
            name: String::new(),
            document_type: document_type.as_str().to_string(),
            state,
        }
    }
}

/// Wrap a state as a document at revision zero
pub fn create_document(initial: ExtendedState) -> Document {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut fields = Map::new();
    fields.insert("name".to_string(), Value::String(initial.name));
    fields.insert("documentType".to_string(), Value::String(initial.document_type));
    fields.insert("revision".to_string(), Value::from(0u64));
    fields.insert("created".to_string(), Value::String(now.clone()));
    fields.insert("lastModified".to_string(), Value::String(now));
    fields.insert("state".to_string(), initial.state);
    fields.insert("operations".to_string(), Value::Array(Vec::new()));

    Document::from_fields(fields)
}
