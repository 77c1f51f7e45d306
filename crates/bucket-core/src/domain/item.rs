//! Item Entity
//!
//! One bucket-list entry. Identity is assigned by the backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque item identifier assigned by the backend
///
/// The backend may send ids as JSON strings or integers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// A bucket-list entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    /// The create response omits this field
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids() {
        let numeric: Item = serde_json::from_str(r#"{"id":1,"description":"Skydive","completed":true}"#).unwrap();
        assert_eq!(numeric.id.as_str(), "1");
        assert!(numeric.completed);

        let text: Item = serde_json::from_str(r#"{"id":"6f1c-9a","description":"Learn piano"}"#).unwrap();
        assert_eq!(text.id, ItemId::from("6f1c-9a"));
        assert!(!text.completed);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let item: Item = serde_json::from_str(
            r#"{"id":"a","description":"See the aurora","completed":false,"created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(item, Item::new("a", "See the aurora"));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let json = serde_json::to_string(&Item::new("7", "Run a marathon")).unwrap();
        assert_eq!(json, r#"{"id":"7","description":"Run a marathon","completed":false}"#);
    }
}
