//! Bootstrap — wires storage, controller, and router together.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::StatusFilter;
use crate::router::{Navigator, Router};
use crate::store::{DEFAULT_STORAGE_KEY, KeyValueStorage, TodoStore};
use crate::ui::{Notifier, TodoListController};

/// Application wiring knobs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Storage key holding the serialized todo collection.
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// The composed application: one controller behind a shared handle, one
/// router dispatching fragment changes into it.
pub struct App {
    router: Router,
    controller: Rc<RefCell<TodoListController>>,
    navigator: Rc<dyn Navigator>,
}

impl App {
    /// Wire the three components and perform the initial navigation.
    ///
    /// Registers the three filter routes plus the not-found fallback
    /// (which applies the all filter), then runs `Router::init`, so the
    /// current fragment is evaluated before this returns.
    pub fn bootstrap(
        storage: Rc<dyn KeyValueStorage>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        config: AppConfig,
    ) -> Self {
        let store = TodoStore::new(storage, config.storage_key);
        let controller = Rc::new(RefCell::new(TodoListController::new(
            store,
            Rc::clone(&navigator),
            notifier,
        )));

        let route = |filter: StatusFilter| {
            let controller = Rc::clone(&controller);
            move || controller.borrow_mut().filter_by_status(filter)
        };

        let mut router = Router::new(Rc::clone(&navigator))
            .add_route(StatusFilter::All.fragment(), route(StatusFilter::All))
            .add_route(StatusFilter::Todo.fragment(), route(StatusFilter::Todo))
            .add_route(StatusFilter::Done.fragment(), route(StatusFilter::Done))
            .set_not_found(route(StatusFilter::All));
        router.init();

        Self {
            router,
            controller,
            navigator,
        }
    }

    /// Shared handle to the list controller.
    pub fn controller(&self) -> Rc<RefCell<TodoListController>> {
        Rc::clone(&self.controller)
    }

    /// Fragment-change hook; the embedding layer calls this after every
    /// hash change, including ones it did not initiate.
    pub fn handle_fragment_change(&mut self) {
        self.router.check_route();
    }

    /// Navigate to a fragment and dispatch the change.
    pub fn navigate(&mut self, fragment: &str) {
        self.navigator.set_fragment(fragment);
        self.router.check_route();
    }
}
