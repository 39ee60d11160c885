//! Endpoint services
//!
//! One service per API resource. Every method follows the same fixed
//! sequence: prerequisite check, URI construction, retrieval. Each call
//! resolves to a [`netsy_domain::ResultEnvelope`] for its target type.

mod favorites;
mod feedback;
mod gifts;
mod listings;
mod server;
mod shops;
mod tag_category;
mod users;

pub use favorites::FavoritesService;
pub use feedback::FeedbackService;
pub use gifts::GiftService;
pub use listings::ListingService;
pub use server::ServerService;
pub use shops::ShopService;
pub use tag_category::TagCategoryService;
pub use users::UserService;
