//! TodoStore — CRUD over the persisted todo collection.

use std::rc::Rc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::model::{TodoRecord, TodoStatus};

use super::traits::KeyValueStorage;

/// Storage key holding the serialized collection.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Durable CRUD over the todo collection, encoded as one JSON array under
/// a single key. Every mutation is a full read-modify-write of the whole
/// collection; callers must not assume atomicity across writers.
pub struct TodoStore {
    backend: Rc<dyn KeyValueStorage>,
    key: String,
}

impl TodoStore {
    pub fn new(backend: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// The full collection in stored order; empty if the key was never
    /// written.
    pub fn list_all(&self) -> Result<Vec<TodoRecord>> {
        match self.backend.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append a new record with status TODO.
    pub fn create(&self, id: Uuid, content: &str) -> Result<()> {
        let mut todos = self.list_all()?;
        if todos.iter().any(|todo| todo.id == id) {
            return Err(StorageError::DuplicateId { id });
        }
        todos.push(TodoRecord::new(id, content));
        self.write_all(&todos)?;
        info!(%id, "Todo created");
        Ok(())
    }

    /// Update one field of a record: non-empty `content` replaces the
    /// content, otherwise `status` (defaulting to TODO) replaces the
    /// status. The edit and complete interactions each touch exactly one
    /// field, never both.
    pub fn update(
        &self,
        id: Uuid,
        content: Option<&str>,
        status: Option<TodoStatus>,
    ) -> Result<()> {
        let mut todos = self.list_all()?;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StorageError::NotFound { id })?;

        match content {
            Some(text) if !text.is_empty() => {
                todo.content = text.to_string();
                debug!(%id, "Todo content updated");
            }
            _ => {
                todo.status = status.unwrap_or(TodoStatus::Todo);
                debug!(%id, status = ?todo.status, "Todo status updated");
            }
        }
        self.write_all(&todos)
    }

    /// Remove the record with the given id.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut todos = self.list_all()?;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        if todos.len() == before {
            return Err(StorageError::NotFound { id });
        }
        self.write_all(&todos)?;
        info!(%id, "Todo deleted");
        Ok(())
    }

    fn write_all(&self, todos: &[TodoRecord]) -> Result<()> {
        let raw = serde_json::to_string(todos)?;
        self.backend.set(&self.key, &raw)
    }
}
