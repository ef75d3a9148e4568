//! Editor contract and the shareable component handle

use std::sync::Arc;

use connect_document::{Document, DocumentType};

pub trait Editor: Send + Sync {
    /// Stable identifier, unique per editor
    fn id(&self) -> &'static str;

    /// Label shown in editor pickers
    fn title(&self) -> &'static str;

    /// Document type this editor renders, `None` for document-less editors
    fn document_type(&self) -> Option<DocumentType>;

    /// Whether this editor can render the given document
    fn supports(&self, document: Option<&Document>) -> bool {
        match (self.document_type(), document) {
            (None, None) => true,
            (Some(kind), Some(document)) => document.document_type() == kind.as_str(),
            _ => false,
        }
    }
}

/// Cheap, cloneable handle to a loaded editor
#[derive(Clone)]
pub struct EditorComponent {
    inner: Arc<dyn Editor>,
}

impl EditorComponent {
    pub fn new<E: Editor + 'static>(editor: E) -> Self {
        Self {
            inner: Arc::new(editor),
        }
    }

    pub fn id(&self) -> &'static str {
        self.inner.id()
    }

    pub fn title(&self) -> &'static str {
        self.inner.title()
    }

    pub fn document_type(&self) -> Option<DocumentType> {
        self.inner.document_type()
    }

    pub fn supports(&self, document: Option<&Document>) -> bool {
        self.inner.supports(document)
    }
}

impl PartialEq for EditorComponent {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for EditorComponent {}

impl std::fmt::Debug for EditorComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorComponent")
            .field("id", &self.id())
            .finish()
    }
}
