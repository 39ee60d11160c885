//! Netsy Infrastructure - Adapters for the retrieval pipeline
//!
//! Production implementations of the application-layer ports: the
//! reqwest-backed request generator and the in-memory and pass-through
//! cache variants.

pub mod cache;
pub mod http;

pub use cache::{MemoryCache, NullCache};
pub use http::ReqwestRequestGenerator;
