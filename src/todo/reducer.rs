use super::{TodoId, TodoItem};
use std::fmt;

/// A requested transition of the todo collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append an item at the end. Ids are not checked for duplicates.
    Insert(TodoItem),
    /// Drop the item with this id, if any.
    Remove(TodoId),
    /// Flip `checked` on the item with this id, if any.
    Toggle(TodoId),
}

impl fmt::Display for TodoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoAction::Insert(item) => write!(f, "INSERT({})", item.id),
            TodoAction::Remove(id) => write!(f, "REMOVE({id})"),
            TodoAction::Toggle(id) => write!(f, "TOGGLE({id})"),
        }
    }
}

/// Compute the next collection from the current one and an action.
///
/// The input is never modified. Removing or toggling an id that is not
/// present yields a collection equal to the input.
pub fn reduce(todos: &[TodoItem], action: TodoAction) -> Vec<TodoItem> {
    match action {
        TodoAction::Insert(item) => {
            let mut next = Vec::with_capacity(todos.len() + 1);
            next.extend_from_slice(todos);
            next.push(item);
            next
        }
        TodoAction::Remove(id) => todos.iter().filter(|todo| todo.id != id).cloned().collect(),
        TodoAction::Toggle(id) => todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    todo.toggled()
                } else {
                    todo.clone()
                }
            })
            .collect(),
    }
}
