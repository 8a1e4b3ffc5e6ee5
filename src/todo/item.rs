use serde::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub checked: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
        }
    }

    /// Copy of this item with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unchecked() {
        let item = TodoItem::new(7, "Water the plants");
        assert_eq!(item.id, 7);
        assert_eq!(item.text, "Water the plants");
        assert!(!item.checked);
    }

    #[test]
    fn test_toggled_only_flips_checked() {
        let item = TodoItem::new(3, "Call mom");
        let toggled = item.toggled();

        assert!(toggled.checked);
        assert_eq!(toggled.id, item.id);
        assert_eq!(toggled.text, item.text);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn test_serializes_fields() {
        let item = TodoItem::new(1, "Task 1");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"text":"Task 1","checked":false}"#);
    }
}
