//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the retrieval pipeline and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by deterministic doubles in tests.

mod data_cache;
mod request_generator;

pub use data_cache::{CacheValue, DataCache};
pub use request_generator::{RequestGenerator, TransportError};
