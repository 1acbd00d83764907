//! List Item
//!
//! The canonical todo entry and the shapes it may take on disk.

use serde::{Deserialize, Serialize};

/// A single todo entry. Index in the list is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Committed display text
    pub text: String,
    /// Completion flag
    pub is_done: bool,
    /// Whether the row is in edit mode
    pub is_editing: bool,
    /// Draft text while editing
    pub edit_text: String,
}

/// Per-item edit state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Viewing,
    Editing,
}

impl ListItem {
    /// Create a fresh, not-done item in view mode
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            edit_text: text.clone(),
            text,
            is_done: false,
            is_editing: false,
        }
    }

    pub fn state(&self) -> ItemState {
        if self.is_editing {
            ItemState::Editing
        } else {
            ItemState::Viewing
        }
    }
}

/// One element of a stored array, before normalization.
///
/// Older versions of the app stored bare strings; current ones store objects
/// whose fields may each be missing or null.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Legacy(String),
    Record(StoredRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    is_done: Option<bool>,
    #[serde(default)]
    is_editing: Option<bool>,
    #[serde(default)]
    edit_text: Option<String>,
}

impl From<StoredEntry> for ListItem {
    fn from(entry: StoredEntry) -> Self {
        match entry {
            StoredEntry::Legacy(text) => ListItem::new(text),
            StoredEntry::Record(record) => {
                let edit_text = record
                    .edit_text
                    .or_else(|| record.text.clone())
                    .unwrap_or_default();
                ListItem {
                    text: record.text.unwrap_or_default(),
                    is_done: record.is_done.unwrap_or(false),
                    is_editing: record.is_editing.unwrap_or(false),
                    edit_text,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(json: &str) -> Vec<ListItem> {
        let entries: Vec<StoredEntry> = serde_json::from_str(json).unwrap();
        entries.into_iter().map(ListItem::from).collect()
    }

    #[test]
    fn test_legacy_string_entry() {
        let items = normalize(r#"["buy milk"]"#);
        assert_eq!(items, vec![ListItem::new("buy milk")]);
        assert_eq!(items[0].edit_text, "buy milk");
    }

    #[test]
    fn test_record_missing_fields_get_defaults() {
        let items = normalize(r#"[{"text":"a"},{}]"#);
        assert_eq!(items[0], ListItem::new("a"));
        assert_eq!(items[1], ListItem::default());
    }

    #[test]
    fn test_null_fields_count_as_missing() {
        let items = normalize(r#"[{"text":"a","isDone":null,"editText":null}]"#);
        assert_eq!(items[0], ListItem::new("a"));
    }

    #[test]
    fn test_edit_text_kept_when_present() {
        let items = normalize(r#"[{"text":"a","isEditing":true,"editText":"draft","isDone":true}]"#);
        assert_eq!(items[0].text, "a");
        assert_eq!(items[0].edit_text, "draft");
        assert!(items[0].is_done);
        assert_eq!(items[0].state(), ItemState::Editing);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let items = normalize(r#"[{"text":"a","id":7}]"#);
        assert_eq!(items[0], ListItem::new("a"));
    }

    #[test]
    fn test_non_string_non_object_entry_rejected() {
        assert!(serde_json::from_str::<Vec<StoredEntry>>("[1]").is_err());
        assert!(serde_json::from_str::<Vec<StoredEntry>>("[null]").is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&ListItem::new("x")).unwrap();
        assert_eq!(json, r#"{"text":"x","isDone":false,"isEditing":false,"editText":"x"}"#);
    }
}
