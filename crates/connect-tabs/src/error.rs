//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab type {0} was not handled")]
    UnhandledTabType(String),

    #[error("Document with type {0} was not handled")]
    UnhandledDocumentType(String),

    #[error("Document type mismatch: expected {expected}, found {found}")]
    DocumentTypeMismatch { expected: String, found: String },

    #[error("Editor disabled: {0}")]
    EditorDisabled(String),

    #[error("Failed to load {module}: {reason}")]
    ModuleLoad { module: String, reason: String },

    #[error("Failed to preload {} module(s): {}", .0.len(), .0.join("; "))]
    Preload(Vec<String>),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
