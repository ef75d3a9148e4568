//! Connect Core
//!
//! Entry point for the document tab layer: reads which editors are enabled,
//! builds the module loader and tab factory over them, and preloads on start.

mod config;
mod connect;
mod error;

pub use config::{Config, DISABLED_EDITORS_VAR, ENABLED_EDITORS_VAR, PRELOAD_TABS_VAR};
pub use connect::Connect;
pub use error::CoreError;

// Re-export the tab layer
pub use connect_document::{create_document, Document, DocumentModel, DocumentType, ExtendedState};
pub use connect_editors::{Editor, EditorComponent};
pub use connect_tabs::{
    BuiltinModules, IdGenerator, ModuleLoader, ModuleSource, SequentialIdGenerator, Tab, TabError,
    TabFactory, TabType, UuidGenerator,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
