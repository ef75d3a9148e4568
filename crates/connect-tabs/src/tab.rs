//! Tab data structure and its wire format
//!
//! A serialized tab is a flat JSON object:
//! ```text
//! { "type": "...", "id": "...", "name": "...", "document": { ... } }
//! ```
//! The editor component is not serialized; it is resolved again when the
//! tab is rebuilt.

use serde::{Deserialize, Serialize};

use connect_document::{Document, DocumentType};
use connect_editors::EditorComponent;

use crate::error::TabError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabType {
    /// Empty tab showing the document picker
    New,
    /// Tab editing a document of the given type
    Document(DocumentType),
}

impl TabType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::New => "new",
            TabType::Document(kind) => kind.as_str(),
        }
    }
}

impl From<DocumentType> for TabType {
    fn from(kind: DocumentType) -> Self {
        TabType::Document(kind)
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabType {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "new" {
            return Ok(TabType::New);
        }
        s.parse::<DocumentType>()
            .map(TabType::Document)
            .map_err(|_| TabError::UnhandledTabType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Kind of tab, equal to the document's type for document tabs
    pub tab_type: TabType,
    /// Unique identifier within the owning collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Editor rendering this tab
    pub content: EditorComponent,
    /// Document being edited, absent for new tabs
    pub document: Option<Document>,
}

/// Borrowed view written to the wire
#[derive(Serialize)]
struct TabRef<'a> {
    #[serde(rename = "type")]
    tab_type: &'a str,
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a Document>,
}

/// Parsed descriptor; `type` is kept raw so unknown kinds can be reported
#[derive(Debug, Deserialize)]
pub(crate) struct TabRecord {
    #[serde(rename = "type")]
    pub tab_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub document: Option<Document>,
}

impl Tab {
    pub fn new(
        tab_type: TabType,
        id: String,
        name: String,
        content: EditorComponent,
        document: Option<Document>,
    ) -> Self {
        Self {
            tab_type,
            id,
            name,
            content,
            document,
        }
    }

    /// Serialize to the flat JSON descriptor (editor omitted)
    pub fn serialize(&self) -> Result<String> {
        let value = TabRef {
            tab_type: self.tab_type.as_str(),
            id: &self.id,
            name: &self.name,
            document: self.document.as_ref(),
        };
        Ok(serde_json::to_string(&value)?)
    }
}

impl TabRecord {
    pub fn parse(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }
}
