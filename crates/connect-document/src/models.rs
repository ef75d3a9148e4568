//! Built-in document-model modules

use serde_json::json;

use crate::document::{create_document, Document, ExtendedState};
use crate::kind::DocumentType;

/// A document-model module: knows its type and how to build an empty state.
pub trait DocumentModel: Send + Sync + std::fmt::Debug {
    fn document_type(&self) -> DocumentType;

    fn create_empty_state(&self) -> ExtendedState;

    /// Fresh, empty document of this model's type
    fn create_document(&self) -> Document {
        create_document(self.create_empty_state())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentModelModel;

impl DocumentModel for DocumentModelModel {
    fn document_type(&self) -> DocumentType {
        DocumentType::DocumentModel
    }

    fn create_empty_state(&self) -> ExtendedState {
        ExtendedState::new(
            self.document_type(),
            json!({
                "id": "",
                "name": "",
                "extension": "",
                "description": "",
                "author": { "name": "", "website": null },
                "specifications": [{
                    "version": 1,
                    "changeLog": [],
                    "state": { "schema": "", "initialValue": "", "examples": [] },
                    "modules": []
                }]
            }),
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BudgetStatementModel;

impl DocumentModel for BudgetStatementModel {
    fn document_type(&self) -> DocumentType {
        DocumentType::BudgetStatement
    }

    fn create_empty_state(&self) -> ExtendedState {
        ExtendedState::new(
            self.document_type(),
            json!({
                "owner": { "ref": null, "id": null, "title": null },
                "month": null,
                "quoteCurrency": null,
                "vesting": [],
                "ftes": null,
                "accounts": [],
                "auditReports": [],
                "comments": []
            }),
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScopeFrameworkModel;

impl DocumentModel for ScopeFrameworkModel {
    fn document_type(&self) -> DocumentType {
        DocumentType::ScopeFramework
    }

    fn create_empty_state(&self) -> ExtendedState {
        ExtendedState::new(
            self.document_type(),
            json!({
                "rootPath": "A",
                "elements": [{
                    "id": "",
                    "path": "A.1",
                    "version": 1,
                    "name": "Scope Name",
                    "type": "Scope",
                    "components": { "content": "Scope description" }
                }]
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_create_documents_of_their_type() {
        let models: [&dyn DocumentModel; 3] =
            [&DocumentModelModel, &BudgetStatementModel, &ScopeFrameworkModel];

        for model in models {
            let document = model.create_document();
            assert_eq!(document.kind().unwrap(), model.document_type());
            assert!(document.state().is_object());
        }
    }

    #[test]
    fn test_scope_framework_has_root_element() {
        let state = ScopeFrameworkModel.create_empty_state().state;
        assert_eq!(state["rootPath"], "A");
        assert_eq!(state["elements"][0]["path"], "A.1");
    }
}
