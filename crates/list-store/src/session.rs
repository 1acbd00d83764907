//! List Session
//!
//! Hydrates a list once and writes it back only when it actually changes,
//! so opening a list never rewrites what is stored.

use crate::error::{ListStoreError, Result};
use crate::item::ListItem;
use crate::persistent::PersistentList;
use crate::backend::KeyValueStore;

/// A persisted list opened for editing
#[derive(Debug)]
pub struct ListSession<S> {
    list: PersistentList<S>,
    /// Last value known to match the store
    saved: Vec<ListItem>,
    hydrate_error: Option<ListStoreError>,
}

impl<S: KeyValueStore> ListSession<S> {
    /// Load the list. A read or parse failure starts empty and is kept for
    /// the caller; the stored value stays untouched until the first change.
    pub fn open(list: PersistentList<S>) -> Self {
        let (saved, hydrate_error) = match list.try_load() {
            Ok(items) => (items, None),
            Err(e) => {
                log::warn!("[LIST] {}; starting with an empty list", e);
                (Vec::new(), Some(e))
            }
        };
        Self { list, saved, hydrate_error }
    }

    pub fn list(&self) -> &PersistentList<S> {
        &self.list
    }

    /// Items as hydrated or last saved
    pub fn items(&self) -> &[ListItem] {
        &self.saved
    }

    /// Why hydration fell back to an empty list, if it did
    pub fn hydrate_error(&self) -> Option<&ListStoreError> {
        self.hydrate_error.as_ref()
    }

    /// Persist `items` if they differ from the stored list.
    ///
    /// Returns whether a write happened. A failed write leaves the session
    /// dirty so the next call retries.
    pub fn sync(&mut self, items: &[ListItem]) -> Result<bool> {
        if items == self.saved.as_slice() {
            return Ok(false);
        }
        self.list.save(items)?;
        self.saved = items.to_vec();
        self.hydrate_error = None;
        Ok(true)
    }
}
