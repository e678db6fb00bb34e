
use crate::{DurableStore, MemoryStore, Result as SessionResult, SessionError};

/// Store whose writes can be switched off to exercise rollback paths.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub(crate) inner: MemoryStore,
    pub(crate) fail_writes: bool,
    pub(crate) fail_reads: bool,
}

impl DurableStore for FlakyStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        if self.fail_reads {
            return Err(SessionError::storage(key, "read refused"));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> SessionResult<()> {
        if self.fail_writes {
            return Err(SessionError::storage(key, "disk full"));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> SessionResult<()> {
        if self.fail_writes {
            return Err(SessionError::storage(key, "disk full"));
        }
        self.inner.remove(key)
    }
}
