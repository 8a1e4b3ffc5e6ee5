use super::{TodoId, TodoItem};

/// Number of placeholder tasks the list starts with unless configured otherwise.
pub const DEFAULT_SEED_COUNT: usize = 2500;

/// Build `count` unchecked placeholder items with ids `1..=count`.
pub fn create_bulk_todos(count: usize) -> Vec<TodoItem> {
    (1..=count as TodoId)
        .map(|i| TodoItem::new(i, format!("Task {i}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_and_text() {
        let todos = create_bulk_todos(3);
        assert_eq!(todos.len(), 3);
        for (i, todo) in todos.iter().enumerate() {
            assert_eq!(todo.id, i as TodoId + 1);
            assert_eq!(todo.text, format!("Task {}", i + 1));
            assert!(!todo.checked);
        }
    }

    #[test]
    fn test_seed_empty() {
        assert!(create_bulk_todos(0).is_empty());
    }

    #[test]
    fn test_seed_default_size() {
        let todos = create_bulk_todos(DEFAULT_SEED_COUNT);
        assert_eq!(todos.len(), 2500);
        assert_eq!(todos.last().map(|t| t.id), Some(2500));
        assert_eq!(todos.last().map(|t| t.text.as_str()), Some("Task 2500"));
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(create_bulk_todos(50), create_bulk_todos(50));
    }
}
