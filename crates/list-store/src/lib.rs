//! Persistent List Store
//!
//! Layered the same way as the rest of the app:
//! - item: list entries and the legacy/record wire shapes
//! - ops: pure list mutations
//! - backend: key-value store abstraction and an in-memory implementation
//! - persistent: load/save of a whole list at a fixed key
//! - session: hydrate once, write back only on change

mod backend;
mod config;
mod error;
mod item;
mod persistent;
mod session;

pub mod ops;


pub use backend::{BackendError, KeyValueStore, MemoryStore};
pub use config::{ListConfig, StorageKind};
pub use error::{ListStoreError, Result};
pub use item::{ItemState, ListItem, StoredEntry, StoredRecord};
pub use persistent::PersistentList;
pub use session::ListSession;
