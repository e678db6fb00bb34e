pub(crate) mod file_store;
pub(crate) mod memory_store;

use crate::Result as SessionResult;

/// Durable key/value storage that outlives the process.
///
/// Writes are synchronous: when `set` or `remove` returns `Ok`, the change is
/// already durable.
pub trait DurableStore {
    /// Returns `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> SessionResult<()>;
}
