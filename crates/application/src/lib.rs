//! Netsy Application - Retrieval pipeline and endpoint services
//!
//! This crate defines the application layer with:
//! - Port traits for the request generator and the data cache
//! - The data retriever orchestrating cache lookup, network issuance,
//!   deserialization and envelope delivery
//! - The per-resource endpoint services built on one shared call pattern

pub mod helper;
pub mod ports;
pub mod retriever;
pub mod services;

pub use ports::{DataCache, RequestGenerator, TransportError};
pub use retriever::DataRetriever;
pub use services::{
    FavoritesService, FeedbackService, GiftService, ListingService, ServerService, ShopService,
    TagCategoryService, UserService,
};
