//! List Configuration
//!
//! Storage variants and the per-list settings derived from them.

/// Which browser store a list lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Persists on the device, per origin
    Local,
    /// Lives only for the current browser session
    Session,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Local => "local",
            StorageKind::Session => "session",
        }
    }

    /// Fixed key the variant's list is stored under
    pub fn default_key(&self) -> &'static str {
        match self {
            StorageKind::Local => "myTodos",
            StorageKind::Session => "mySessionTodos",
        }
    }
}

/// Settings for one persisted list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Key the serialized list is written to
    pub key: String,
    /// Restore `isEditing`/`editText` as stored. When false, every loaded
    /// item comes back in view mode with its draft reset to its text.
    pub resume_edits: bool,
}

impl ListConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            resume_edits: true,
        }
    }

    pub fn for_kind(kind: StorageKind) -> Self {
        Self::new(kind.default_key())
    }

    pub fn resume_edits(mut self, resume: bool) -> Self {
        self.resume_edits = resume;
        self
    }
}
