//! Shop records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSet;
use crate::model::user::epoch_to_datetime;

/// A collection of shops.
pub type Shops = ResultSet<Shop>;

/// A seller's shop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shop {
    /// The shop owner's user id.
    pub user_id: i64,
    /// The shop owner's login name.
    pub user_name: String,
    /// The shop's name.
    pub shop_name: Option<String>,
    /// Brief heading for the shop's main page.
    pub title: Option<String>,
    /// Full URL to the shop's banner image.
    pub banner_image_url: Option<String>,
    /// When the shop was created, in epoch seconds.
    pub creation_epoch: Option<f64>,
    /// Number of active listings in the shop.
    pub listing_count: Option<i64>,
    /// Announcement to buyers, shown on the shop's home page.
    pub announcement: Option<String>,
    /// Message sent to buyers who complete a purchase.
    pub sale_message: Option<String>,
    /// Whether the shop is on vacation.
    pub is_vacation: Option<bool>,
    /// Message shown while the shop is on vacation.
    pub vacation_message: Option<String>,
    /// ISO code of the shop's currency.
    pub currency_code: Option<String>,
}

impl Shop {
    /// The creation date as a [`DateTime`], when present.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.creation_epoch)
    }
}
