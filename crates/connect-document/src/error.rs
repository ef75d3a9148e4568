//! Document error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Unknown document type: {0}")]
    UnknownType(String),
}
