//! In-memory value store for testing.
//!
//! Keeps the blob in shared memory, enabling fast tests without any file
//! system I/O.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Result, error::Error, ports::ValueStore};

/// In-memory store for testing.
///
/// All clones share the same slot, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a blob has been saved.
    pub fn contains_blob(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the stored blob.
    pub fn clear(&self) {
        self.lock().take();
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<u8>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ValueStore for InMemoryStore {
    fn save(&self, blob: &[u8]) -> Result<()> {
        *self.lock() = Some(blob.to_vec());
        Ok(())
    }

    fn load(&self) -> Result<Vec<u8>> {
        self.lock().clone().ok_or_else(|| Error::MissingValueTable {
            location: self.location(),
        })
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
