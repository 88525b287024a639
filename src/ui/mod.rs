//! View layer — the list controller and its row view-models.

pub mod controller;
pub mod notify;
pub mod row;

pub use controller::TodoListController;
pub use notify::{Notifier, TracingNotifier};
pub use row::{ActionControl, Row, RowAction, TextControl};
