//! Data cache port

use std::any::Any;
use std::sync::Arc;

/// A type-erased cached response value.
///
/// The cache stores deserialized response objects of differing types under
/// one key space, so values are erased to `Any` and downcast on read.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// Port for the keyed response cache.
///
/// Keys are fully built request URI strings. The cache is a pure
/// memoization layer: no validation, no expiry, no size bound. Entries
/// live until [`DataCache::clear`] or the end of the owning session.
/// Implementations must be safe for concurrent read/write from multiple
/// completion contexts.
pub trait DataCache: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<CacheValue>;

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// A write followed by a read of the same key returns the written
    /// value (absent a concurrent writer).
    fn write(&self, key: &str, value: CacheValue);

    /// Removes all entries.
    fn clear(&self);
}
