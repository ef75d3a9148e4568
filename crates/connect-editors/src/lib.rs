//! Connect Editors
//!
//! Editor components are opaque to the tab layer: a tab only holds a handle
//! to the editor able to render its document. Handles compare by editor id.

mod builtin;
mod component;

pub use builtin::{
    editor_for, tab_new, BudgetStatementEditor, DocumentModelEditor, ScopeFrameworkEditor,
    TabNewEditor,
};
pub use component::{Editor, EditorComponent};
