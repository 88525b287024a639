//! Todo data model — records, status tags, and the view filter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted lifecycle status of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoStatus {
    Todo,
    Done,
}

impl TodoStatus {
    pub fn is_done(self) -> bool {
        matches!(self, TodoStatus::Done)
    }
}

/// A single persisted todo record.
///
/// The serialized collection is the single source of truth; rendered rows
/// are derived from it and reconstructed on every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique id, assigned once at creation. Joins a rendered row to its
    /// persisted record.
    pub id: Uuid,
    /// Free-form text; mutable via edit.
    pub content: String,
    /// Current status; mutable via the completion toggle.
    pub status: TodoStatus,
}

impl TodoRecord {
    /// Create a fresh record with status TODO.
    pub fn new(id: Uuid, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            status: TodoStatus::Todo,
        }
    }
}

/// View filter selecting which rows are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Todo,
    Done,
}

impl StatusFilter {
    /// Location fragment this filter is reachable at.
    pub fn fragment(self) -> &'static str {
        match self {
            StatusFilter::All => "#/all",
            StatusFilter::Todo => "#/todo",
            StatusFilter::Done => "#/done",
        }
    }

    /// Value carried by the matching radio control.
    pub fn value(self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Todo => "TODO",
            StatusFilter::Done => "DONE",
        }
    }

    /// Whether a row with the given done flag is visible under this filter.
    pub fn admits(self, done: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Done => done,
            StatusFilter::Todo => !done,
        }
    }
}
