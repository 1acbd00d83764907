//! Pages
//!
//! The three screens of the app and their URL fragments.

use list_store::StorageKind;

/// Page selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Todos(StorageKind),
}

impl Page {
    pub const ALL: [Page; 3] = [
        Page::Home,
        Page::Todos(StorageKind::Local),
        Page::Todos(StorageKind::Session),
    ];

    /// Parse `location.hash`; anything unknown lands on the home page
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_start_matches('/') {
            "local-storage" => Page::Todos(StorageKind::Local),
            "session-storage" => Page::Todos(StorageKind::Session),
            _ => Page::Home,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::Todos(StorageKind::Local) => "#/local-storage",
            Page::Todos(StorageKind::Session) => "#/session-storage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Todos(StorageKind::Local) => "Local Storage",
            Page::Todos(StorageKind::Session) => "Session Storage",
        }
    }
}

/// Page for the current `location.hash`
pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}
