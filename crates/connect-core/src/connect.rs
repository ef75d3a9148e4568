//! Entry point wiring configuration, module loading and tab construction

use std::sync::Arc;

use connect_tabs::{
    BuiltinModules, IdGenerator, ModuleLoader, ModuleSource, TabFactory, UuidGenerator,
};

use crate::config::Config;
use crate::Result;

pub struct Connect {
    /// Configuration
    config: Config,
    /// Tab factory over the enabled editors
    tabs: TabFactory,
}

impl Connect {
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, Arc::new(BuiltinModules), Arc::new(UuidGenerator))
    }

    pub fn with_parts(
        config: Config,
        source: Arc<dyn ModuleSource>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let loader = ModuleLoader::new(source, config.enabled_document_types());
        let tabs = TabFactory::new(loader, ids);

        Self { config, tabs }
    }

    /// Preload editors when configured to
    pub async fn initialize(&self) -> Result<()> {
        let enabled = self.tabs.loader().enabled_types();

        if self.config.preload_on_start {
            if let Err(e) = self.tabs.preload_tabs().await {
                tracing::warn!(error = %e, "Tab preload failed");
                return Err(e.into());
            }
        }

        tracing::info!(
            editors = enabled.len(),
            preloaded = self.config.preload_on_start,
            "Initialized tabs"
        );

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabFactory {
        &self.tabs
    }
}
