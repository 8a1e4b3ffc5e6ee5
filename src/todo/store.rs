use super::{create_bulk_todos, reduce, IdAllocator, TodoAction, TodoId, TodoItem};
use tracing::debug;

/// Owns the todo collection and the id counter. Every change to the
/// collection goes through [`TodoStore::dispatch`].
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    ids: IdAllocator,
}

impl TodoStore {
    /// Store seeded with `seed_count` placeholder tasks.
    pub fn with_seed(seed_count: usize) -> Self {
        Self {
            todos: create_bulk_todos(seed_count),
            ids: IdAllocator::after_seed(seed_count),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.checked).count()
    }

    /// Id the next inserted item will receive.
    pub fn next_id(&self) -> TodoId {
        self.ids.current()
    }

    pub fn dispatch(&mut self, action: TodoAction) {
        debug!(%action, before = self.todos.len(), "dispatch");
        self.todos = reduce(&self.todos, action);
    }

    /// Append a new unchecked item and return its id. Text is not validated.
    pub fn insert(&mut self, text: impl Into<String>) -> TodoId {
        let id = self.ids.current();
        self.dispatch(TodoAction::Insert(TodoItem::new(id, text)));
        self.ids.advance();
        id
    }

    pub fn remove(&mut self, id: TodoId) {
        self.dispatch(TodoAction::Remove(id));
    }

    pub fn toggle(&mut self, id: TodoId) {
        self.dispatch(TodoAction::Toggle(id));
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::with_seed(super::DEFAULT_SEED_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(store: &TodoStore) -> Vec<TodoId> {
        store.items().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_default_store_seeds_2500() {
        let store = TodoStore::default();
        assert_eq!(store.len(), 2500);
        assert_eq!(store.next_id(), 2501);
        assert_eq!(store.checked_count(), 0);
    }

    #[test]
    fn test_insert_toggle_remove_scenario() {
        let mut store = TodoStore::with_seed(3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert!(store.items().iter().all(|t| !t.checked));

        let id = store.insert("buy milk");
        assert_eq!(id, 4);
        assert_eq!(store.len(), 4);
        assert_eq!(store.items()[3], TodoItem::new(4, "buy milk"));

        store.toggle(2);
        let before_toggle = TodoStore::with_seed(3);
        for item in store.items().iter().take(3) {
            let seeded = &before_toggle.items()[item.id as usize - 1];
            assert_eq!(item.text, seeded.text);
            assert_eq!(item.checked, item.id == 2);
        }
        assert!(!store.items()[3].checked);

        store.remove(1);
        assert_eq!(ids(&store), vec![2, 3, 4]);
        assert!(store.items()[0].checked);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut store = TodoStore::with_seed(0);
        let first = store.insert("a");
        store.remove(first);
        let second = store.insert("b");

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(ids(&store), vec![2]);
    }

    #[test]
    fn test_insert_accepts_empty_text() {
        let mut store = TodoStore::with_seed(1);
        let id = store.insert("");
        assert_eq!(store.items().last().map(|t| t.id), Some(id));
        assert_eq!(store.items().last().map(|t| t.text.as_str()), Some(""));
    }

    #[test]
    fn test_missing_ids_leave_store_unchanged() {
        let mut store = TodoStore::with_seed(3);
        let before = store.items().to_vec();

        store.remove(99);
        store.toggle(99);

        assert_eq!(store.items(), &before[..]);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_checked_count() {
        let mut store = TodoStore::with_seed(5);
        store.toggle(1);
        store.toggle(3);
        store.toggle(3);
        store.toggle(5);
        assert_eq!(store.checked_count(), 2);
    }
}
