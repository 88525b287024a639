//! Hashtodo — hash-routed todo list core.
//!
//! Storage, router, and list controller behind injected ports; an
//! embedding layer supplies the real location and key-value bindings.

pub mod app;
pub mod error;
pub mod model;
pub mod router;
pub mod store;
pub mod ui;
