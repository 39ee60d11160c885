//! Netsy Domain - Core types for the Etsy API client
//!
//! This crate defines the pure data model for Netsy: the query context,
//! request URI construction, enumerated query parameters, the result
//! envelope delivered for every asynchronous operation, and the wire
//! records returned by the API. All types here are pure Rust with no I/O
//! dependencies.

pub mod context;
pub mod envelope;
pub mod error;
pub mod model;
pub mod params;
pub mod uri;

pub use context::QueryContext;
pub use envelope::{ResultEnvelope, ResultStatus, TransportStatus};
pub use error::{DomainError, DomainResult};
pub use model::{
    Feedback, Feedbacks, GiftGuide, GiftGuides, Listing, Listings, PingResult, ResultSet,
    ServerEpoch, Shop, Shops, StringResults, User, Users,
};
pub use params::{DetailLevel, Gender, SortField, SortOrder};
pub use uri::{RequestUri, UriBuilder};
