//! The todo item entity and its JSON shape.
//!
//! # Design
//! A single type serves as stored entity, request body and response body.
//! Every field defaults when absent from a request body, so `{}` binds to an
//! untitled, incomplete item with id 0. The store assigns real ids starting
//! at 1, which means a defaulted id never matches a stored item.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert.
pub type TodoId = i64;

/// A single todo item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub is_complete: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            is_complete,
        }
    }

    /// Returns a copy of this item carrying `id`.
    pub fn with_id(self, id: TodoId) -> Self {
        Self { id, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let item = TodoItem::new("Buy milk", false).with_id(1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "Buy milk", "isComplete": false})
        );
    }

    #[test]
    fn missing_fields_take_defaults() {
        let item: TodoItem = serde_json::from_str(r#"{"title":"Only a title"}"#).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.title, "Only a title");
        assert!(!item.is_complete);

        let empty: TodoItem = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, TodoItem::default());
    }

    #[test]
    fn snake_case_completion_flag_is_not_recognised() {
        let item: TodoItem =
            serde_json::from_str(r#"{"title":"x","is_complete":true}"#).unwrap();
        assert!(!item.is_complete);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result: Result<TodoItem, _> = serde_json::from_str(r#"{"isComplete":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn with_id_keeps_other_fields() {
        let item = TodoItem::new("Walk dog", true).with_id(7);
        assert_eq!(item.id, 7);
        assert_eq!(item.title, "Walk dog");
        assert!(item.is_complete);
    }
}
