//! Row view-model — one rendered todo and its five controls.

use uuid::Uuid;

use crate::model::TodoStatus;

/// The four per-row actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Complete,
    Edit,
    Save,
    Delete,
}

impl RowAction {
    /// All four actions in render order.
    pub const ALL: [RowAction; 4] = [
        RowAction::Complete,
        RowAction::Edit,
        RowAction::Save,
        RowAction::Delete,
    ];

    /// Role marker carried by the action's control.
    pub fn role(self) -> &'static str {
        match self {
            RowAction::Complete => "complete-btn",
            RowAction::Edit => "edit-btn",
            RowAction::Save => "save-btn",
            RowAction::Delete => "delete-btn",
        }
    }

    /// Icon glyph rendered inside the control.
    pub fn icon(self) -> &'static str {
        match self {
            RowAction::Complete => "fa-check",
            RowAction::Edit => "fa-edit",
            RowAction::Save => "fa-save",
            RowAction::Delete => "fa-trash",
        }
    }
}

/// The row's text control.
#[derive(Debug, Clone)]
pub struct TextControl {
    pub value: String,
    pub read_only: bool,
    pub focused: bool,
}

/// One action button within a row.
#[derive(Debug, Clone, Copy)]
pub struct ActionControl {
    pub action: RowAction,
    pub role: &'static str,
    pub icon: &'static str,
}

/// One rendered todo row.
///
/// Owns its five controls, built once at creation and looked up by id
/// afterwards, never re-derived from event targets.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: Uuid,
    pub text: TextControl,
    pub actions: [ActionControl; 4],
    /// Mirrors the persisted DONE status.
    pub done: bool,
    /// The text control is currently editable.
    pub editing: bool,
    /// Shown under the active filter.
    pub visible: bool,
    /// Marked for removal; the row leaves the tree on `finish_removal`.
    pub removing: bool,
}

impl Row {
    /// Build a row for a record. The status-derived flag is applied to
    /// the fully constructed row.
    pub fn new(id: Uuid, content: impl Into<String>, status: TodoStatus) -> Self {
        let mut row = Self {
            id,
            text: TextControl {
                value: content.into(),
                read_only: true,
                focused: false,
            },
            actions: RowAction::ALL.map(|action| ActionControl {
                action,
                role: action.role(),
                icon: action.icon(),
            }),
            done: false,
            editing: false,
            visible: true,
            removing: false,
        };
        row.done = status.is_done();
        row
    }

    /// Persisted status implied by the row's done flag.
    pub fn status(&self) -> TodoStatus {
        if self.done {
            TodoStatus::Done
        } else {
            TodoStatus::Todo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_has_five_controls() {
        let row = Row::new(Uuid::new_v4(), "buy milk", TodoStatus::Todo);
        assert_eq!(row.text.value, "buy milk");
        assert!(row.text.read_only);
        assert_eq!(row.actions.len(), 4);
        assert_eq!(row.actions[0].role, "complete-btn");
        assert_eq!(row.actions[0].icon, "fa-check");
        assert_eq!(row.actions[3].role, "delete-btn");
        assert_eq!(row.actions[3].icon, "fa-trash");
    }

    #[test]
    fn done_flag_follows_status() {
        let todo = Row::new(Uuid::new_v4(), "a", TodoStatus::Todo);
        assert!(!todo.done);
        assert_eq!(todo.status(), TodoStatus::Todo);

        let done = Row::new(Uuid::new_v4(), "b", TodoStatus::Done);
        assert!(done.done);
        assert_eq!(done.status(), TodoStatus::Done);
    }

    #[test]
    fn new_row_defaults() {
        let row = Row::new(Uuid::new_v4(), "a", TodoStatus::Todo);
        assert!(row.visible);
        assert!(!row.editing);
        assert!(!row.removing);
        assert!(!row.text.focused);
    }
}
