//! Connect Tab Management
//!
//! A tab pairs an optional document with the editor able to render it.
//! Tabs are values: they are built by the [`TabFactory`], serialized to a
//! flat JSON descriptor and rebuilt from one. Editors and document models
//! are loaded on first use and cached per document type by the
//! [`ModuleLoader`].

mod error;
mod factory;
mod id;
mod loader;
mod tab;

pub use error::TabError;
pub use factory::{TabFactory, NEW_TAB_NAME};
pub use id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use loader::{BuiltinModules, ModuleLoader, ModuleSource};
pub use tab::{Tab, TabType};

pub type Result<T> = std::result::Result<T, TabError>;
