//! Built-in editors

use connect_document::DocumentType;

use crate::component::{Editor, EditorComponent};

/// Placeholder shown in a tab with no document
#[derive(Debug, Default, Clone, Copy)]
pub struct TabNewEditor;

impl Editor for TabNewEditor {
    fn id(&self) -> &'static str {
        "tab-new"
    }

    fn title(&self) -> &'static str {
        "New tab"
    }

    fn document_type(&self) -> Option<DocumentType> {
        None
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentModelEditor;

impl Editor for DocumentModelEditor {
    fn id(&self) -> &'static str {
        "document-model-editor"
    }

    fn title(&self) -> &'static str {
        "Document Model Editor"
    }

    fn document_type(&self) -> Option<DocumentType> {
        Some(DocumentType::DocumentModel)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BudgetStatementEditor;

impl Editor for BudgetStatementEditor {
    fn id(&self) -> &'static str {
        "budget-statement-editor"
    }

    fn title(&self) -> &'static str {
        "Budget Statement Editor"
    }

    fn document_type(&self) -> Option<DocumentType> {
        Some(DocumentType::BudgetStatement)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScopeFrameworkEditor;

impl Editor for ScopeFrameworkEditor {
    fn id(&self) -> &'static str {
        "scope-framework-editor"
    }

    fn title(&self) -> &'static str {
        "Scope Framework Editor"
    }

    fn document_type(&self) -> Option<DocumentType> {
        Some(DocumentType::ScopeFramework)
    }
}

pub fn tab_new() -> EditorComponent {
    EditorComponent::new(TabNewEditor)
}

pub fn editor_for(kind: DocumentType) -> EditorComponent {
    match kind {
        DocumentType::DocumentModel => EditorComponent::new(DocumentModelEditor),
        DocumentType::BudgetStatement => EditorComponent::new(BudgetStatementEditor),
        DocumentType::ScopeFramework => EditorComponent::new(ScopeFrameworkEditor),
    }
}
