//! Persistence layer — key-value backed storage for the todo collection.

pub mod file;
pub mod memory;
pub mod todos;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use todos::{DEFAULT_STORAGE_KEY, TodoStore};
pub use traits::KeyValueStorage;
