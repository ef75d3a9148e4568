//! Connect Documents
//!
//! The document-model contract consumed by the tab layer:
//! - every document carries a `documentType` discriminant
//! - every registered type exposes a factory for an empty state
//! - `create_document` wraps any state as a full document

mod document;
mod error;
mod kind;
mod models;

pub use document::{create_document, Document, ExtendedState};
pub use error::DocumentError;
pub use kind::DocumentType;
pub use models::{BudgetStatementModel, DocumentModel, DocumentModelModel, ScopeFrameworkModel};

pub type Result<T> = std::result::Result<T, DocumentError>;
