pub mod id;
pub mod item;
pub mod reducer;
pub mod seed;
pub mod store;

pub use id::IdAllocator;
pub use item::{TodoId, TodoItem};
pub use reducer::{reduce, TodoAction};
pub use seed::{create_bulk_todos, DEFAULT_SEED_COUNT};
pub use store::TodoStore;
