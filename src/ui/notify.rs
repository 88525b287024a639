//! Notification port — the blocking user-facing alert seam.

use tracing::warn;

/// User-facing notification sink. The embedding layer maps this to a
/// blocking alert; headless embeddings log or record instead.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that surfaces messages through the log.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(%message, "User notification");
    }
}
