use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::session::KeyValueStorage;

/// In-memory KeyValueStorage for testing and non-browser builds.
///
/// Clones share the same map, so a clone stands in for "the same browser
/// after a reload".
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: Arc<Mutex<HashSet<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Make every write to `key` fail, like a full quota would.
    pub fn failing_writes_to(self, key: &str) -> Self {
        self.read_only.lock().unwrap().insert(key.to_string());
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.lock().unwrap().contains(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
