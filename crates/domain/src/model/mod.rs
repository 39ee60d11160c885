//! Wire data model
//!
//! Records returned by the API, mapped structurally by field name.
//! Unknown fields are ignored and missing optional fields are left at
//! their defaults, so one record type serves every detail level.

mod feedback;
mod gift_guide;
mod listing;
mod result_set;
mod server;
mod shop;
mod strings;
mod user;

pub use feedback::{Feedback, Feedbacks};
pub use gift_guide::{GiftGuide, GiftGuides};
pub use listing::{Listing, Listings};
pub use result_set::ResultSet;
pub use server::{PingResult, ServerEpoch};
pub use shop::{Shop, Shops};
pub use strings::StringResults;
pub use user::{User, Users};
