//! TodoListController — bridges the store and the rendered list.

use std::rc::Rc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StorageError;
use crate::model::{StatusFilter, TodoStatus};
use crate::router::Navigator;
use crate::store::TodoStore;

use super::notify::Notifier;
use super::row::{Row, RowAction};

/// Message shown when add is attempted with an empty input.
const EMPTY_INPUT_MESSAGE: &str = "please enter your plan";

/// Message shown when a mutation could not reach the backend.
const SAVE_FAILED_MESSAGE: &str = "your changes could not be saved";

/// Owns the rendered list: the input field, one `Row` per record, and the
/// radio selection. Reads and writes through the store; every mutation
/// persists within the same handler that updates the view.
pub struct TodoListController {
    store: TodoStore,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    rows: Vec<Row>,
    input: String,
    selected_filter: StatusFilter,
}

impl TodoListController {
    /// Build the controller and hydrate rows from the store.
    pub fn new(
        store: TodoStore,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let mut controller = Self {
            store,
            navigator,
            notifier,
            rows: Vec::new(),
            input: String::new(),
            selected_filter: StatusFilter::All,
        };
        controller.load_saved();
        controller
    }

    /// Replay every persisted record into a rendered row. A backend
    /// failure here leaves the session starting empty; the rendered state
    /// stands in for the rest of the session.
    fn load_saved(&mut self) {
        match self.store.list_all() {
            Ok(records) => {
                for record in records {
                    self.rows.push(Row::new(record.id, record.content, record.status));
                }
                debug!(rows = self.rows.len(), "Hydrated rows from storage");
            }
            Err(err) => {
                warn!(%err, "Failed to load saved todos");
                self.notifier.notify("your saved todos could not be loaded");
            }
        }
    }

    // ── Input field ─────────────────────────────────────────────────

    /// Mirror typing into the add field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Add a todo from the current input.
    ///
    /// Rejection triggers on zero length only; whitespace-only input is
    /// accepted. On success the record is persisted, a row is rendered,
    /// and the input is cleared.
    pub fn add(&mut self) {
        if self.input.is_empty() {
            self.notifier.notify(EMPTY_INPUT_MESSAGE);
            return;
        }
        let id = Uuid::new_v4();
        let content = std::mem::take(&mut self.input);
        if let Err(err) = self.store.create(id, &content) {
            self.absorb(id, "create", err);
        }
        self.rows.push(Row::new(id, content, TodoStatus::Todo));
    }

    // ── Row actions ─────────────────────────────────────────────────

    /// Dispatch a click on one of a row's action controls.
    pub fn handle_action(&mut self, id: Uuid, action: RowAction) {
        match action {
            RowAction::Complete => self.complete(id),
            RowAction::Edit => self.edit(id),
            RowAction::Save => self.save(id),
            RowAction::Delete => self.delete(id),
        }
    }

    fn complete(&mut self, id: Uuid) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            warn!(%id, "Complete on unknown row");
            return;
        };
        row.done = !row.done;
        let status = row.status();
        if let Err(err) = self.store.update(id, None, Some(status)) {
            self.absorb(id, "complete", err);
        }
    }

    fn edit(&mut self, id: Uuid) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            warn!(%id, "Edit on unknown row");
            return;
        };
        row.text.read_only = false;
        row.text.focused = true;
        row.editing = true;
        // Nothing is persisted until save.
    }

    fn save(&mut self, id: Uuid) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            warn!(%id, "Save on unknown row");
            return;
        };
        row.editing = false;
        row.text.read_only = true;
        row.text.focused = false;
        let content = row.text.value.clone();
        if let Err(err) = self.store.update(id, Some(&content), None) {
            self.absorb(id, "save", err);
        }
    }

    fn delete(&mut self, id: Uuid) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            warn!(%id, "Delete on unknown row");
            return;
        };
        // Storage deletion is synchronous with the click; the row leaves
        // the tree only once the removal transition ends.
        row.removing = true;
        if let Err(err) = self.store.delete(id) {
            self.absorb(id, "delete", err);
        }
    }

    /// Transition-end hook: drop a row previously marked for removal.
    pub fn finish_removal(&mut self, id: Uuid) {
        let before = self.rows.len();
        self.rows.retain(|row| !(row.id == id && row.removing));
        if self.rows.len() == before {
            debug!(%id, "Removal finished for a row not marked removing");
        }
    }

    /// Type into a row's text control. Ignored while the control is
    /// read-only, as the real control would be.
    pub fn set_row_text(&mut self, id: Uuid, text: impl Into<String>) {
        let Some(row) = self.rows.iter_mut().find(|row| row.id == id) else {
            warn!(%id, "Text input on unknown row");
            return;
        };
        if row.text.read_only {
            debug!(%id, "Ignoring text input on read-only control");
            return;
        }
        row.text.value = text.into();
    }

    // ── Filtering ───────────────────────────────────────────────────

    /// Show or hide every row according to `filter` and sync the radio
    /// selection. Pure view operation; storage is never touched.
    pub fn filter_by_status(&mut self, filter: StatusFilter) {
        for row in &mut self.rows {
            row.visible = filter.admits(row.done);
        }
        self.selected_filter = filter;
    }

    /// Radio click: navigate to the filter's fragment. The filter itself
    /// is applied when the fragment change is dispatched through routing.
    pub fn select_filter(&self, filter: StatusFilter) {
        self.navigator.set_fragment(filter.fragment());
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: Uuid) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn selected_filter(&self) -> StatusFilter {
        self.selected_filter
    }

    /// Storage failures never crash the UI. Lookup failures are logged
    /// and absorbed; backend trouble surfaces one notification and the
    /// rendered state stands in for the session.
    fn absorb(&self, id: Uuid, op: &str, err: StorageError) {
        match err {
            StorageError::NotFound { .. } | StorageError::DuplicateId { .. } => {
                warn!(%id, op, %err, "Storage lookup failure absorbed");
            }
            err => {
                warn!(%id, op, %err, "Storage backend failure");
                self.notifier.notify(SAVE_FAILED_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::error::Result;
    use crate::router::MemoryNavigator;
    use crate::store::{KeyValueStorage, MemoryStorage};
    use crate::ui::TracingNotifier;

    /// Notifier that records every message for assertions.
    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    /// Backend whose writes always fail (quota-exceeded stand-in).
    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    struct Harness {
        backend: Rc<MemoryStorage>,
        notifier: Rc<RecordingNotifier>,
        controller: TodoListController,
    }

    fn harness() -> Harness {
        let backend = Rc::new(MemoryStorage::new());
        harness_on(backend)
    }

    fn harness_on(backend: Rc<MemoryStorage>) -> Harness {
        let notifier = Rc::new(RecordingNotifier::default());
        let store = TodoStore::new(Rc::clone(&backend) as Rc<dyn KeyValueStorage>, "todos");
        let controller = TodoListController::new(
            store,
            Rc::new(MemoryNavigator::new()),
            Rc::clone(&notifier) as Rc<dyn Notifier>,
        );
        Harness {
            backend,
            notifier,
            controller,
        }
    }

    fn add(h: &mut Harness, text: &str) -> Uuid {
        h.controller.set_input(text);
        h.controller.add();
        h.controller.rows().last().unwrap().id
    }

    fn persisted(h: &Harness) -> Vec<crate::model::TodoRecord> {
        match h.backend.get("todos").unwrap() {
            Some(raw) => serde_json::from_str(&raw).unwrap(),
            None => Vec::new(),
        }
    }

    #[test]
    fn add_persists_renders_and_clears_input() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        assert_eq!(h.controller.input(), "");
        assert_eq!(h.controller.rows().len(), 1);
        let row = h.controller.row(id).unwrap();
        assert_eq!(row.text.value, "buy milk");
        assert!(!row.done);

        let records = persisted(&h);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].content, "buy milk");
        assert_eq!(records[0].status, TodoStatus::Todo);
    }

    #[test]
    fn empty_add_notifies_once_and_changes_nothing() {
        let mut h = harness();
        h.controller.set_input("");
        h.controller.add();

        assert_eq!(h.controller.rows().len(), 0);
        assert!(persisted(&h).is_empty());
        assert_eq!(h.notifier.messages.borrow().len(), 1);
        assert_eq!(h.notifier.messages.borrow()[0], EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn whitespace_only_add_is_accepted() {
        // Validation checks length only, no trimming.
        let mut h = harness();
        add(&mut h, "   ");
        assert_eq!(h.controller.rows().len(), 1);
        assert!(h.notifier.messages.borrow().is_empty());
        assert_eq!(persisted(&h)[0].content, "   ");
    }

    #[test]
    fn complete_toggles_and_persists() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        h.controller.handle_action(id, RowAction::Complete);
        assert!(h.controller.row(id).unwrap().done);
        assert_eq!(persisted(&h)[0].status, TodoStatus::Done);

        h.controller.handle_action(id, RowAction::Complete);
        assert!(!h.controller.row(id).unwrap().done);
        assert_eq!(persisted(&h)[0].status, TodoStatus::Todo);
    }

    #[test]
    fn edit_enables_text_control_without_persisting() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        h.controller.handle_action(id, RowAction::Edit);
        let row = h.controller.row(id).unwrap();
        assert!(!row.text.read_only);
        assert!(row.text.focused);
        assert!(row.editing);

        h.controller.set_row_text(id, "buy oat milk");
        // Typed but not saved: storage keeps the old content.
        assert_eq!(persisted(&h)[0].content, "buy milk");
    }

    #[test]
    fn save_persists_edited_text_and_restores_read_only() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        h.controller.handle_action(id, RowAction::Edit);
        h.controller.set_row_text(id, "buy oat milk");
        h.controller.handle_action(id, RowAction::Save);

        let row = h.controller.row(id).unwrap();
        assert!(row.text.read_only);
        assert!(!row.editing);
        assert!(!row.text.focused);
        assert_eq!(persisted(&h)[0].content, "buy oat milk");
    }

    #[test]
    fn typing_into_read_only_control_is_ignored() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        h.controller.set_row_text(id, "sneaky");
        assert_eq!(h.controller.row(id).unwrap().text.value, "buy milk");
    }

    #[test]
    fn edit_discarded_by_reload_is_not_persisted() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");
        h.controller.handle_action(id, RowAction::Edit);
        h.controller.set_row_text(id, "half-typed");

        // Simulated reload: a fresh controller over the same backend.
        let reloaded = harness_on(Rc::clone(&h.backend));
        assert_eq!(reloaded.controller.row(id).unwrap().text.value, "buy milk");
    }

    #[test]
    fn delete_persists_immediately_and_defers_row_removal() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");

        h.controller.handle_action(id, RowAction::Delete);
        // Storage mutation is synchronous with the click.
        assert!(persisted(&h).is_empty());
        // The row stays rendered until the transition ends.
        assert_eq!(h.controller.rows().len(), 1);
        assert!(h.controller.row(id).unwrap().removing);

        h.controller.finish_removal(id);
        assert!(h.controller.rows().is_empty());
    }

    #[test]
    fn finish_removal_ignores_rows_not_marked_removing() {
        let mut h = harness();
        let id = add(&mut h, "buy milk");
        h.controller.finish_removal(id);
        assert_eq!(h.controller.rows().len(), 1);
    }

    #[test]
    fn filter_shows_exactly_the_matching_rows() {
        let mut h = harness();
        let open = add(&mut h, "open");
        let closed = add(&mut h, "closed");
        h.controller.handle_action(closed, RowAction::Complete);

        h.controller.filter_by_status(StatusFilter::Done);
        assert!(!h.controller.row(open).unwrap().visible);
        assert!(h.controller.row(closed).unwrap().visible);
        assert_eq!(h.controller.selected_filter(), StatusFilter::Done);

        h.controller.filter_by_status(StatusFilter::Todo);
        assert!(h.controller.row(open).unwrap().visible);
        assert!(!h.controller.row(closed).unwrap().visible);

        h.controller.filter_by_status(StatusFilter::All);
        assert!(h.controller.row(open).unwrap().visible);
        assert!(h.controller.row(closed).unwrap().visible);
    }

    #[test]
    fn reload_reconstructs_identical_rows() {
        let mut h = harness();
        let first = add(&mut h, "one");
        let second = add(&mut h, "two");
        h.controller.handle_action(second, RowAction::Complete);
        h.controller.handle_action(first, RowAction::Edit);
        h.controller.set_row_text(first, "one edited");
        h.controller.handle_action(first, RowAction::Save);

        let reloaded = harness_on(Rc::clone(&h.backend));
        let rows = reloaded.controller.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, first);
        assert_eq!(rows[0].text.value, "one edited");
        assert!(!rows[0].done);
        assert_eq!(rows[1].id, second);
        assert!(rows[1].done);
    }

    #[test]
    fn backend_failure_notifies_and_keeps_rendered_row() {
        let notifier = Rc::new(RecordingNotifier::default());
        let store = TodoStore::new(Rc::new(FailingStorage) as Rc<dyn KeyValueStorage>, "todos");
        let mut controller = TodoListController::new(
            store,
            Rc::new(MemoryNavigator::new()),
            Rc::clone(&notifier) as Rc<dyn Notifier>,
        );

        controller.set_input("buy milk");
        controller.add();

        // One non-fatal notification; the in-memory row is the session's
        // fallback of record.
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert_eq!(notifier.messages.borrow()[0], SAVE_FAILED_MESSAGE);
        assert_eq!(controller.rows().len(), 1);
    }

    #[test]
    fn unknown_row_actions_are_absorbed() {
        let mut h = harness();
        h.controller.handle_action(Uuid::new_v4(), RowAction::Complete);
        h.controller.handle_action(Uuid::new_v4(), RowAction::Delete);
        h.controller.handle_action(Uuid::new_v4(), RowAction::Save);
        assert!(h.controller.rows().is_empty());
        assert!(h.notifier.messages.borrow().is_empty());
    }

    #[test]
    fn select_filter_navigates_to_fragment() {
        let backend = Rc::new(MemoryStorage::new());
        let navigator = Rc::new(MemoryNavigator::new());
        let store = TodoStore::new(Rc::clone(&backend) as Rc<dyn KeyValueStorage>, "todos");
        let controller = TodoListController::new(
            store,
            Rc::clone(&navigator) as Rc<dyn Navigator>,
            Rc::new(TracingNotifier),
        );

        controller.select_filter(StatusFilter::Done);
        assert_eq!(navigator.fragment(), "#/done");
    }
}
