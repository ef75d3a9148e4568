//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Tab error: {0}")]
    Tab(#[from] connect_tabs::TabError),

    #[error("Document error: {0}")]
    Document(#[from] connect_document::DocumentError),

    #[error("Configuration error: {0}")]
    Config(String),
}
