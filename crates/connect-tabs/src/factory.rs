//! Tab Factory
//!
//! Builds tabs directly, from serialized descriptors, or from existing
//! documents. Every document tab goes through the same path: load the
//! model and editor for its type, create an empty document when none was
//! given, assemble the tab.

use std::sync::Arc;

use futures_util::future::try_join;

use connect_document::{Document, DocumentType};

use crate::error::TabError;
use crate::id::{IdGenerator, UuidGenerator};
use crate::loader::ModuleLoader;
use crate::tab::{Tab, TabRecord, TabType};
use crate::Result;

/// Name of a tab with no document
pub const NEW_TAB_NAME: &str = "New tab";

pub struct TabFactory {
    /// Cached models and editors
    loader: ModuleLoader,
    /// Source of ids for tabs created without one
    ids: Arc<dyn IdGenerator>,
}

impl TabFactory {
    pub fn new(loader: ModuleLoader, ids: Arc<dyn IdGenerator>) -> Self {
        Self { loader, ids }
    }

    /// Built-in modules, every type enabled, random UUIDs
    pub fn builtin() -> Self {
        Self::new(ModuleLoader::builtin(), Arc::new(UuidGenerator))
    }

    pub fn loader(&self) -> &ModuleLoader {
        &self.loader
    }

    /// Create an empty "new" tab showing the placeholder editor
    pub fn create_tab(&self, id: Option<String>, name: Option<String>) -> Tab {
        let tab = Tab::new(
            TabType::New,
            self.resolve_id(id),
            name.unwrap_or_else(|| NEW_TAB_NAME.to_string()),
            connect_editors::tab_new(),
            None,
        );

        tracing::debug!(tab_id = %tab.id, "Created new tab");

        tab
    }

    /// Create a tab for a document of type `kind`.
    ///
    /// A supplied document is used as is; otherwise an empty one is created
    /// from the type's model.
    pub async fn create_document_tab(
        &self,
        kind: DocumentType,
        document: Option<Document>,
        id: Option<String>,
        name: Option<String>,
    ) -> Result<Tab> {
        if let Some(document) = &document {
            if document.document_type() != kind.as_str() {
                return Err(TabError::DocumentTypeMismatch {
                    expected: kind.to_string(),
                    found: document.document_type().to_string(),
                });
            }
        }

        let (model, editor) = try_join(self.loader.model(kind), self.loader.editor(kind)).await?;
        let document = document.unwrap_or_else(|| model.create_document());

        let tab = Tab::new(
            TabType::Document(kind),
            self.resolve_id(id),
            name.unwrap_or_else(|| kind.default_tab_name().to_string()),
            editor,
            Some(document),
        );

        tracing::debug!(
            tab_id = %tab.id,
            document_type = %kind,
            "Created document tab"
        );

        Ok(tab)
    }

    pub async fn create_document_model_tab(
        &self,
        document: Option<Document>,
        id: Option<String>,
    ) -> Result<Tab> {
        self.create_document_tab(DocumentType::DocumentModel, document, id, None)
            .await
    }

    pub async fn create_budget_statement_tab(
        &self,
        document: Option<Document>,
        id: Option<String>,
    ) -> Result<Tab> {
        self.create_document_tab(DocumentType::BudgetStatement, document, id, None)
            .await
    }

    pub async fn create_scope_framework_tab(
        &self,
        document: Option<Document>,
        id: Option<String>,
    ) -> Result<Tab> {
        self.create_document_tab(DocumentType::ScopeFramework, document, id, None)
            .await
    }

    /// Open an existing document in a tab of its own type
    pub async fn from_document(&self, document: Document, id: Option<String>) -> Result<Tab> {
        let kind = document
            .kind()
            .map_err(|_| TabError::UnhandledDocumentType(document.document_type().to_string()))?;

        self.create_document_tab(kind, Some(document), id, None)
            .await
    }

    /// Rebuild a tab from its serialized descriptor
    pub async fn deserialize(&self, value: &str) -> Result<Tab> {
        let record = TabRecord::parse(value)?;

        match record.tab_type.parse::<TabType>()? {
            TabType::New => Ok(self.create_tab(record.id, record.name)),
            TabType::Document(kind) => {
                self.create_document_tab(kind, record.document, record.id, record.name)
                    .await
            }
        }
    }

    /// Warm the module cache for every enabled document type
    pub async fn preload_tabs(&self) -> Result<()> {
        self.loader.preload().await
    }

    fn resolve_id(&self, id: Option<String>) -> String {
        id.unwrap_or_else(|| self.ids.generate())
    }
}

impl Clone for TabFactory {
    fn clone(&self) -> Self {
        Self {
            loader: self.loader.clone(),
            ids: Arc::clone(&self.ids),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIdGenerator;
    use crate::loader::testing::CountingModules;
    use connect_document::{BudgetStatementModel, DocumentModel};
    use serde_json::{json, Value};

    fn factory() -> TabFactory {
        TabFactory::new(
            ModuleLoader::builtin(),
            Arc::new(SequentialIdGenerator::new("tab")),
        )
    }

    #[test]
    fn test_create_default_tab() {
        let tab = factory().create_tab(None, None);

        assert_eq!(tab.tab_type, TabType::New);
        assert_eq!(tab.id, "tab-1");
        assert_eq!(tab.name, "New tab");
        assert_eq!(tab.content, connect_editors::tab_new());
        assert!(tab.document.is_none());
    }

    #[test]
    fn test_create_default_tab_with_uuid() {
        let tab = TabFactory::builtin().create_tab(None, None);
        assert!(!tab.id.is_empty());
    }

    #[tokio::test]
    async fn test_empty_document_per_type() {
        let factory = factory();

        for kind in DocumentType::ALL {
            let tab = factory
                .create_document_tab(kind, None, None, None)
                .await
                .unwrap();

            assert_eq!(tab.tab_type, TabType::Document(kind));
            assert_eq!(tab.name, kind.default_tab_name());
            assert_eq!(tab.content, connect_editors::editor_for(kind));

            let document = tab.document.unwrap();
            assert_eq!(document.kind().unwrap(), kind);
            assert_eq!(document.revision(), Some(0));
        }
    }

    #[tokio::test]
    async fn test_type_specific_names() {
        let factory = factory();

        let scope = factory.create_scope_framework_tab(None, None).await.unwrap();
        let budget = factory.create_budget_statement_tab(None, None).await.unwrap();
        let model = factory.create_document_model_tab(None, None).await.unwrap();

        assert_eq!(scope.name, "New scope");
        assert_eq!(budget.name, "New budget");
        assert_eq!(model.name, "New document model");
    }

    #[tokio::test]
    async fn test_supplied_document_is_kept() {
        let mut document = BudgetStatementModel.create_document();
        document.insert("name", json!("March"));
        document.insert("revision", json!(12));
        let mut state = document.state().clone();
        state["month"] = json!("2023/03");
        document.insert("state", state);

        let tab = factory()
            .create_budget_statement_tab(Some(document.clone()), Some("budget-1".to_string()))
            .await
            .unwrap();

        assert_eq!(tab.id, "budget-1");
        assert_eq!(tab.document, Some(document));
    }

    #[tokio::test]
    async fn test_mismatched_document_is_rejected() {
        let document = BudgetStatementModel.create_document();

        let result = factory()
            .create_scope_framework_tab(Some(document), None)
            .await;

        assert!(matches!(
            result,
            Err(TabError::DocumentTypeMismatch { expected, found })
                if expected == "makerdao/scope-framework" && found == "powerhouse/budget-statement"
        ));
    }

    #[tokio::test]
    async fn test_from_document() {
        let document = BudgetStatementModel.create_document();

        let tab = factory()
            .from_document(document.clone(), None)
            .await
            .unwrap();

        assert_eq!(tab.tab_type, TabType::Document(DocumentType::BudgetStatement));
        assert_eq!(tab.content, connect_editors::editor_for(DocumentType::BudgetStatement));
        assert_eq!(tab.document, Some(document));
    }

    #[tokio::test]
    async fn test_from_unknown_document_fails() {
        let mut document = Document::default();
        document.insert("documentType", json!("unknown-type"));

        let result = factory().from_document(document, None).await;
        assert!(matches!(
            result,
            Err(TabError::UnhandledDocumentType(t)) if t == "unknown-type"
        ));
    }

    #[tokio::test]
    async fn test_round_trip() {
        let factory = factory();

        let mut original = factory
            .create_scope_framework_tab(None, Some("scope-1".to_string()))
            .await
            .unwrap();
        original.name = "Alignment scope".to_string();

        let restored = factory
            .deserialize(&original.serialize().unwrap())
            .await
            .unwrap();

        assert_eq!(restored.tab_type, original.tab_type);
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.document, original.document);
        assert_eq!(restored.content, original.content);
    }

    #[tokio::test]
    async fn test_round_trip_new_tab() {
        let factory = factory();
        let original = factory.create_tab(Some("blank".to_string()), None);

        let restored = factory
            .deserialize(&original.serialize().unwrap())
            .await
            .unwrap();

        assert_eq!(restored, original);
    }

    #[tokio::test]
    async fn test_irregular_document_survives_round_trip() {
        let input = json!({
            "type": "powerhouse/budget-statement",
            "id": "budget-7",
            "name": "Imported",
            "document": {
                "documentType": "powerhouse/budget-statement",
                "name": null,
                "revision": { "global": 3, "local": 0 },
                "state": { "x": 1 },
                "attachments": {}
            }
        });

        let tab = factory().deserialize(&input.to_string()).await.unwrap();
        let document = tab.document.as_ref().unwrap();
        assert_eq!(document.name(), "");
        assert_eq!(document.revision(), None);

        let output: Value = serde_json::from_str(&tab.serialize().unwrap()).unwrap();
        assert_eq!(output, input);
    }

    #[tokio::test]
    async fn test_minimal_document_gains_no_fields() {
        let input = json!({
            "type": "makerdao/scope-framework",
            "id": "scope-2",
            "name": "Scope",
            "document": { "documentType": "makerdao/scope-framework" }
        });

        let tab = factory().deserialize(&input.to_string()).await.unwrap();
        assert_eq!(tab.serialize().unwrap(), input.to_string());
    }

    #[tokio::test]
    async fn test_deserialize_without_document_creates_one() {
        let tab = factory()
            .deserialize(r#"{"type":"powerhouse/document-model","id":"dm-1"}"#)
            .await
            .unwrap();

        assert_eq!(tab.id, "dm-1");
        assert_eq!(tab.name, "New document model");
        assert!(tab.document.is_some());
    }

    #[tokio::test]
    async fn test_deserialize_unknown_type_fails() {
        let result = factory().deserialize(r#"{"type":"unknown-type"}"#).await;
        assert!(matches!(
            result,
            Err(TabError::UnhandledTabType(t)) if t == "unknown-type"
        ));
    }

    #[tokio::test]
    async fn test_deserialize_malformed_json_fails() {
        let result = factory().deserialize("{\"type\":").await;
        assert!(matches!(result, Err(TabError::Json(_))));
    }

    #[tokio::test]
    async fn test_preload_does_not_block_construction() {
        let source = Arc::new(CountingModules::default());
        let factory = TabFactory::new(
            ModuleLoader::new(source.clone(), DocumentType::ALL),
            Arc::new(SequentialIdGenerator::new("tab")),
        );

        let (preloaded, tab) = tokio::join!(
            factory.preload_tabs(),
            factory.create_budget_statement_tab(None, None)
        );

        preloaded.unwrap();
        assert!(tab.is_ok());
        // Construction and preload shared the cached loads
        assert_eq!(source.model_loads(), 3);
        assert_eq!(source.editor_loads(), 3);
    }

    #[tokio::test]
    async fn test_disabled_editor() {
        let factory = TabFactory::new(
            ModuleLoader::new(Arc::new(crate::BuiltinModules), [DocumentType::DocumentModel]),
            Arc::new(SequentialIdGenerator::new("tab")),
        );

        let result = factory.create_budget_statement_tab(None, None).await;
        assert!(matches!(result, Err(TabError::EditorDisabled(_))));
        assert!(factory.create_document_model_tab(None, None).await.is_ok());
    }
}
