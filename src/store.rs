//! Todo List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use list_store::ListItem;
use reactive_stores::Store;

/// State of one todo panel
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Items in display order; index is identity
    pub items: Vec<ListItem>,
}

impl TodoState {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self { items }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;
