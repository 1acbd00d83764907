//! Browser Storage
//!
//! Binds `window.localStorage` / `window.sessionStorage` to the list store,
//! falling back to memory when the browser refuses access.

use std::rc::Rc;

use list_store::{BackendError, KeyValueStore, ListConfig, MemoryStore, PersistentList, StorageKind};
use wasm_bindgen::{JsCast, JsValue};

/// A `web_sys::Storage` handle
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open(kind: StorageKind) -> Result<Self, BackendError> {
        let window = web_sys::window()
            .ok_or_else(|| BackendError::Unavailable("no window".to_string()))?;
        let storage = match kind {
            StorageKind::Local => window.local_storage(),
            StorageKind::Session => window.session_storage(),
        }
        .map_err(|e| BackendError::Unavailable(js_error_message(&e)))?
        .ok_or_else(|| BackendError::Unavailable(format!("{}Storage is disabled", kind.as_str())))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.storage
            .get_item(key)
            .map_err(|e| BackendError::Js(js_error_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| BackendError::Js(js_error_message(&e)))
    }
}

fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(err.name()), String::from(err.message()));
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

thread_local! {
    // Shared by both variants; their keys differ
    static FALLBACK: Rc<MemoryStore> = Rc::new(MemoryStore::new());
}

/// Where a todo list actually lives
pub enum TodoBackend {
    Browser(BrowserStorage),
    Fallback(Rc<MemoryStore>),
}

impl TodoBackend {
    pub fn is_fallback(&self) -> bool {
        matches!(self, TodoBackend::Fallback(_))
    }
}

impl KeyValueStore for TodoBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        match self {
            TodoBackend::Browser(s) => s.get_item(key),
            TodoBackend::Fallback(s) => s.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        match self {
            TodoBackend::Browser(s) => s.set_item(key, value),
            TodoBackend::Fallback(s) => s.set_item(key, value),
        }
    }
}

/// Open the persisted list for a storage variant
pub fn open_list(kind: StorageKind) -> PersistentList<TodoBackend> {
    let backend = match BrowserStorage::open(kind) {
        Ok(storage) => TodoBackend::Browser(storage),
        Err(e) => {
            log::warn!("[STORAGE] {}; keeping {} todos in memory", e, kind.as_str());
            TodoBackend::Fallback(FALLBACK.with(Rc::clone))
        }
    };
    PersistentList::new(backend, ListConfig::for_kind(kind))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use list_store::{ops, ListItem};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_storage_round_trip() {
        let list = open_list(StorageKind::Session);
        assert!(!list.backend().is_fallback());

        let items = ops::add(&[], "from the browser");
        list.save(&items).unwrap();
        assert_eq!(open_list(StorageKind::Session).load(), items);

        list.save(&ops::clear()).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_legacy_value_in_local_storage() {
        let storage = BrowserStorage::open(StorageKind::Local).unwrap();
        storage.set_item("myTodos", r#"["buy milk"]"#).unwrap();

        let list = open_list(StorageKind::Local);
        assert_eq!(list.load(), vec![ListItem::new("buy milk")]);

        list.save(&ops::clear()).unwrap();
    }
}
