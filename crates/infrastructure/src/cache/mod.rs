//! Cache adapters

mod memory;
mod null;

pub use memory::MemoryCache;
pub use null::NullCache;
