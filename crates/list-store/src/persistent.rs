//! Persistent List
//!
//! Reads and writes a whole todo list at a fixed key of a [`KeyValueStore`].

use crate::backend::KeyValueStore;
use crate::config::ListConfig;
use crate::error::{ListStoreError, Result};
use crate::item::{ListItem, StoredEntry};

/// A todo list bound to one key of a backing store
#[derive(Debug)]
pub struct PersistentList<S> {
    backend: S,
    config: ListConfig,
}

impl<S: KeyValueStore> PersistentList<S> {
    pub fn new(backend: S, config: ListConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored list, migrating legacy entries.
    ///
    /// Absent, unreadable or corrupt data all yield an empty list; the last
    /// two are logged.
    pub fn load(&self) -> Vec<ListItem> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("[LIST] {}; starting with an empty list", e);
                Vec::new()
            }
        }
    }

    /// Like [`load`](Self::load), but reports read and parse failures.
    pub fn try_load(&self) -> Result<Vec<ListItem>> {
        let key = &self.config.key;
        let raw = self
            .backend
            .get_item(key)
            .map_err(|source| ListStoreError::StorageRead {
                key: key.clone(),
                source,
            })?;

        let Some(raw) = raw else {
            log::debug!("[LIST] '{}' is empty", key);
            return Ok(Vec::new());
        };

        let entries: Vec<StoredEntry> =
            serde_json::from_str(&raw).map_err(|source| ListStoreError::Parse {
                key: key.clone(),
                source,
            })?;

        let items: Vec<ListItem> = entries
            .into_iter()
            .map(ListItem::from)
            .map(|item| {
                if self.config.resume_edits {
                    item
                } else {
                    ListItem {
                        is_editing: false,
                        edit_text: item.text.clone(),
                        ..item
                    }
                }
            })
            .collect();

        log::debug!("[LIST] Loaded {} items from '{}'", items.len(), key);
        Ok(items)
    }

    /// Serialize the full list and replace the stored value.
    pub fn save(&self, items: &[ListItem]) -> Result<()> {
        let key = &self.config.key;
        let json = serde_json::to_string(items)?;
        self.backend
            .set_item(key, &json)
            .map_err(|source| ListStoreError::StorageWrite {
                key: key.clone(),
                source,
            })?;
        log::debug!("[LIST] Saved {} items to '{}'", items.len(), key);
        Ok(())
    }
}
