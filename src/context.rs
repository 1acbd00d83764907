//! Todo Panel Context
//!
//! Shared state provided via Leptos Context API to a panel's form and rows.

use leptos::prelude::*;
use list_store::{ListItem, StorageKind};

use crate::store::{TodoStateStoreFields, TodoStore};

/// Panel-wide state provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Which browser store the panel writes to
    pub kind: StorageKind,
    /// The panel's list
    pub store: TodoStore,
}

impl TodoContext {
    pub fn new(kind: StorageKind, store: TodoStore) -> Self {
        Self { kind, store }
    }

    /// Replace the whole list with `f(current)`.
    ///
    /// Persisting is left to the panel's write-through effect.
    pub fn apply(&self, f: impl FnOnce(&[ListItem]) -> Vec<ListItem>) {
        let current = self.store.items().get_untracked();
        let next = f(&current);
        if next != current {
            log::debug!("[TODO] {} list now has {} items", self.kind.as_str(), next.len());
            *self.store.items().write() = next;
        }
    }
}

/// Get the todo context of the enclosing panel
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
