//! Pass-through cache

use netsy_application::ports::{CacheValue, DataCache};

/// A cache that stores nothing.
///
/// Reads always miss and writes are discarded, disabling caching entirely
/// without branching anywhere else in the pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    /// Creates a null cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DataCache for NullCache {
    fn read(&self, _key: &str) -> Option<CacheValue> {
        None
    }

    fn write(&self, _key: &str, _value: CacheValue) {}

    fn clear(&self) {}
}
