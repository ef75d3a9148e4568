//! Lazy module loading
//!
//! Document models and editors are fetched from a [`ModuleSource`] the first
//! time a document type needs them, then cached for the loader's lifetime.
//! Concurrent first accesses share a single load. Failed loads are not
//! cached, so the next access tries again.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{join_all, BoxFuture};
use futures_util::FutureExt;
use tokio::sync::OnceCell;

use connect_document::{
    BudgetStatementModel, DocumentModel, DocumentModelModel, DocumentType, ScopeFrameworkModel,
};
use connect_editors::EditorComponent;

use crate::error::TabError;
use crate::Result;

/// Where document models and editors come from
#[async_trait]
pub trait ModuleSource: Send + Sync {
    async fn load_model(&self, kind: DocumentType) -> Result<Arc<dyn DocumentModel>>;

    async fn load_editor(&self, kind: DocumentType) -> Result<EditorComponent>;
}

/// Models and editors compiled into the application
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinModules;

#[async_trait]
impl ModuleSource for BuiltinModules {
    async fn load_model(&self, kind: DocumentType) -> Result<Arc<dyn DocumentModel>> {
        let model: Arc<dyn DocumentModel> = match kind {
            DocumentType::DocumentModel => Arc::new(DocumentModelModel),
            DocumentType::BudgetStatement => Arc::new(BudgetStatementModel),
            DocumentType::ScopeFramework => Arc::new(ScopeFrameworkModel),
        };
        Ok(model)
    }

    async fn load_editor(&self, kind: DocumentType) -> Result<EditorComponent> {
        Ok(connect_editors::editor_for(kind))
    }
}

#[derive(Default)]
struct ModuleSlot {
    model: OnceCell<Arc<dyn DocumentModel>>,
    editor: OnceCell<EditorComponent>,
}

pub struct ModuleLoader {
    source: Arc<dyn ModuleSource>,
    /// One slot per enabled document type
    slots: Arc<HashMap<DocumentType, ModuleSlot>>,
}

impl ModuleLoader {
    pub fn new(
        source: Arc<dyn ModuleSource>,
        enabled: impl IntoIterator<Item = DocumentType>,
    ) -> Self {
        let slots = enabled
            .into_iter()
            .map(|kind| (kind, ModuleSlot::default()))
            .collect();

        Self {
            source,
            slots: Arc::new(slots),
        }
    }

    /// Built-in modules with every document type enabled
    pub fn builtin() -> Self {
        Self::new(Arc::new(BuiltinModules), DocumentType::ALL)
    }

    pub fn is_enabled(&self, kind: DocumentType) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Enabled document types, in registration order
    pub fn enabled_types(&self) -> Vec<DocumentType> {
        DocumentType::ALL
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// Whether both the model and the editor for `kind` are cached
    pub fn is_loaded(&self, kind: DocumentType) -> bool {
        self.slots
            .get(&kind)
            .is_some_and(|slot| slot.model.initialized() && slot.editor.initialized())
    }

    pub async fn model(&self, kind: DocumentType) -> Result<Arc<dyn DocumentModel>> {
        let slot = self.slot(kind)?;
        let model = slot
            .model
            .get_or_try_init(|| async {
                tracing::debug!(document_type = %kind, "Loading document model");
                self.source.load_model(kind).await
            })
            .await?;
        Ok(Arc::clone(model))
    }

    pub async fn editor(&self, kind: DocumentType) -> Result<EditorComponent> {
        let slot = self.slot(kind)?;
        let editor = slot
            .editor
            .get_or_try_init(|| async {
                tracing::debug!(document_type = %kind, "Loading editor");
                self.source.load_editor(kind).await
            })
            .await?;
        Ok(editor.clone())
    }

    /// Load every enabled model and editor concurrently.
    ///
    /// All loads settle before this returns. Successful loads stay cached
    /// even when others fail; the failures are reported together.
    pub async fn preload(&self) -> Result<()> {
        let mut loads: Vec<BoxFuture<'_, Result<()>>> = Vec::new();
        for kind in self.enabled_types() {
            loads.push(async move { self.model(kind).await.map(|_| ()) }.boxed());
            loads.push(async move { self.editor(kind).await.map(|_| ()) }.boxed());
        }

        let total = loads.len();
        let failures: Vec<String> = join_all(loads)
            .await
            .into_iter()
            .filter_map(|result| result.err())
            .map(|e| {
                tracing::warn!(error = %e, "Failed to preload module");
                e.to_string()
            })
            .collect();

        if !failures.is_empty() {
            return Err(TabError::Preload(failures));
        }

        tracing::debug!(modules = total, "Preloaded tab modules");
        Ok(())
    }

    fn slot(&self, kind: DocumentType) -> Result<&ModuleSlot> {
        self.slots
            .get(&kind)
            .ok_or_else(|| TabError::EditorDisabled(kind.to_string()))
    }
}

impl Clone for ModuleLoader {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            slots: Arc::clone(&self.slots),
        }
    }
}
