//! Storage port — backend-agnostic key-value persistence.

use crate::error::Result;

/// Backend-agnostic key-value storage, the local-storage seam.
///
/// Values are opaque strings; the todo store keeps one serialized
/// collection under a single key. Reading a never-written key yields
/// `None`, not an error.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
