//! In-memory data cache
//!
//! Thread-safe memoization store keyed by the full request URI string.
//! Entries live until cleared; there is no expiry and no size bound.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use netsy_application::ports::{CacheValue, DataCache};

/// In-memory implementation of the data cache port.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheValue>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true when no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DataCache for MemoryCache {
    fn read(&self, key: &str) -> Option<CacheValue> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: CacheValue) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
