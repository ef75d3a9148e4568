//! Document type discriminants
//!
//! Every document names its model through a `documentType` string:
//! ```text
//! powerhouse/document-model
//! powerhouse/budget-statement
//! makerdao/scope-framework
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DocumentType {
    /// Specification of a document model itself
    DocumentModel,
    /// Monthly budget statement
    BudgetStatement,
    /// Scope framework article tree
    ScopeFramework,
}

impl DocumentType {
    /// All registered document types, in registration order
    pub const ALL: [DocumentType; 3] = [
        DocumentType::DocumentModel,
        DocumentType::BudgetStatement,
        DocumentType::ScopeFramework,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::DocumentModel => "powerhouse/document-model",
            DocumentType::BudgetStatement => "powerhouse/budget-statement",
            DocumentType::ScopeFramework => "makerdao/scope-framework",
        }
    }

    /// Name given to a tab opened on a fresh document of this type
    pub fn default_tab_name(&self) -> &'static str {
        match self {
            DocumentType::DocumentModel => "New document model",
            DocumentType::BudgetStatement => "New budget",
            DocumentType::ScopeFramework => "New scope",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for DocumentType {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentType> for String {
    fn from(kind: DocumentType) -> Self {
        kind.as_str().to_string()
    }
}
