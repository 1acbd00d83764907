//! Backing Store
//!
//! Defines the abstract key-value interface the list persists into.
//! Implementations can wrap browser storage, memory, etc.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Errors reported by a [`KeyValueStore`] implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The store cannot be reached at all (disabled, blocked, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    /// An exception thrown by the host environment
    #[error("{0}")]
    Js(String),
}

/// Synchronous string key-value store
///
/// Mirrors the `getItem`/`setItem` pair of web storage. Methods take `&self`
/// since browser storage handles are shared references.
pub trait KeyValueStore {
    /// Read the value at `key`, `None` if absent
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Replace the value at `key`
    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        (**self).set_item(key, value)
    }
}

/// In-memory store with an optional byte quota
///
/// Used in tests and as a fallback when browser storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total size of keys and values, in bytes
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota: Some(quota),
        }
    }

    /// Raw value at `key`, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(BackendError::QuotaExceeded { needed, quota });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("nope").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set_item("k", "1").unwrap();
        store.set_item("k", "2").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_quota_rejects_and_keeps_old_value() {
        let store = MemoryStore::with_quota(8);
        store.set_item("k", "1234").unwrap();
        let err = store.set_item("k", "123456789").unwrap_err();
        assert_eq!(err, BackendError::QuotaExceeded { needed: 10, quota: 8 });
        assert_eq!(store.raw("k").as_deref(), Some("1234"));
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(5);
        store.set_item("k", "1234").unwrap();
        store.set_item("k", "abcd").unwrap();
        assert_eq!(store.raw("k").as_deref(), Some("abcd"));
    }

    #[test]
    fn test_shared_handles_see_same_data() {
        let store = Rc::new(MemoryStore::new());
        let other = Rc::clone(&store);
        other.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));

        let boxed: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        boxed.set_item("k", "v").unwrap();
        assert_eq!(boxed.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
