//! Minimal hash-route dispatcher over an injected navigation port.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

/// Fragment installed by `init` when the location carries none.
pub const ROOT_FRAGMENT: &str = "#/";

/// Navigation port — the location-fragment seam.
pub trait Navigator {
    /// Current location fragment, empty string when none is set.
    fn fragment(&self) -> String;

    /// Replace the location fragment.
    fn set_fragment(&self, fragment: &str);
}

/// In-memory navigator for tests and headless embeddings.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    fragment: RefCell<String>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for MemoryNavigator {
    fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn set_fragment(&self, fragment: &str) {
        *self.fragment.borrow_mut() = fragment.to_string();
    }
}

type RouteCallback = Box<dyn FnMut()>;

struct Route {
    pattern: String,
    callback: RouteCallback,
}

/// Ordered route table plus a not-found fallback.
///
/// Stateless between navigations: every evaluation starts from the
/// navigator's current fragment.
pub struct Router {
    navigator: Rc<dyn Navigator>,
    routes: Vec<Route>,
    not_found: RouteCallback,
}

impl Router {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self {
            navigator,
            routes: Vec::new(),
            not_found: Box::new(|| {}),
        }
    }

    /// Register a route. Chainable; on duplicate patterns the
    /// first-registered route wins at match time.
    pub fn add_route(mut self, pattern: impl Into<String>, callback: impl FnMut() + 'static) -> Self {
        self.routes.push(Route {
            pattern: pattern.into(),
            callback: Box::new(callback),
        });
        self
    }

    /// Replace the fallback callback. Chainable.
    pub fn set_not_found(mut self, callback: impl FnMut() + 'static) -> Self {
        self.not_found = Box::new(callback);
        self
    }

    /// Install the root fragment if none is set, then evaluate once.
    ///
    /// The embedding layer calls `check_route` on every subsequent
    /// fragment change.
    pub fn init(&mut self) {
        if self.navigator.fragment().is_empty() {
            self.navigator.set_fragment(ROOT_FRAGMENT);
        }
        self.check_route();
    }

    /// Evaluate the current fragment: exact equality, first match wins.
    /// On no match the fallback runs and no registered route does.
    pub fn check_route(&mut self) {
        let fragment = self.navigator.fragment();
        match self
            .routes
            .iter_mut()
            .find(|route| route.pattern == fragment)
        {
            Some(route) => {
                debug!(%fragment, "Route matched");
                (route.callback)();
            }
            None => {
                debug!(%fragment, "No route matched, invoking fallback");
                (self.not_found)();
            }
        }
    }
}
