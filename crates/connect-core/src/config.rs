//! Editor configuration
//!
//! Read from the environment:
//! - `CONNECT_ENABLED_EDITORS`: comma-separated document types, or `*`
//! - `CONNECT_DISABLED_EDITORS`: comma-separated document types
//! - `CONNECT_PRELOAD_TABS`: `true` / `false`

use serde::{Deserialize, Serialize};

use connect_document::DocumentType;

use crate::error::CoreError;
use crate::Result;

pub const ENABLED_EDITORS_VAR: &str = "CONNECT_ENABLED_EDITORS";
pub const DISABLED_EDITORS_VAR: &str = "CONNECT_DISABLED_EDITORS";
pub const PRELOAD_TABS_VAR: &str = "CONNECT_PRELOAD_TABS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Editors to enable; `None` enables all of them
    pub enabled_editors: Option<Vec<DocumentType>>,
    /// Editors to disable, applied after `enabled_editors`
    pub disabled_editors: Vec<DocumentType>,
    /// Warm the module cache during initialization
    pub preload_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENABLED_EDITORS_VAR) {
            config.enabled_editors = if value.trim() == "*" {
                None
            } else {
                Some(parse_editor_list(&value)?)
            };
        }

        if let Some(value) = lookup(DISABLED_EDITORS_VAR) {
            config.disabled_editors = parse_editor_list(&value)?;
        }

        if let Some(value) = lookup(PRELOAD_TABS_VAR) {
            config.preload_on_start = value.trim().parse().map_err(|_| {
                CoreError::Config(format!("{} must be true or false, got {:?}", PRELOAD_TABS_VAR, value))
            })?;
        }

        Ok(config)
    }

    /// Enabled minus disabled, in registration order
    pub fn enabled_document_types(&self) -> Vec<DocumentType> {
        DocumentType::ALL
            .into_iter()
            .filter(|kind| {
                self.enabled_editors
                    .as_ref()
                    .map_or(true, |enabled| enabled.contains(kind))
            })
            .filter(|kind| !self.disabled_editors.contains(kind))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled_editors: None,
            disabled_editors: Vec::new(),
            preload_on_start: true,
        }
    }
}

fn parse_editor_list(value: &str) -> Result<Vec<DocumentType>> {
    let kinds = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<DocumentType>)
        .collect::<connect_document::Result<Vec<_>>>()?;
    Ok(kinds)
}
