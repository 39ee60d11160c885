//! Listing records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSet;
use crate::model::user::epoch_to_datetime;

/// A collection of listings.
pub type Listings = ResultSet<Listing>;

/// An item listed for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    /// The listing's numeric id.
    pub listing_id: i64,
    /// The listing's state (`active`, `removed`, `sold_out`, `expired`,
    /// or `alchemy`).
    pub state: Option<String>,
    /// The seller's user id.
    pub user_id: i64,
    /// The seller's login name.
    pub user_name: Option<String>,
    /// The listing's title.
    pub title: Option<String>,
    /// Full URL to the listing's page.
    pub url: Option<String>,
    /// 155x125 thumbnail of the listing's main image.
    pub image_url_155x125: Option<String>,
    /// 440x330 rendition of the listing's main image.
    pub image_url_440x330: Option<String>,
    /// When the listing was created, in epoch seconds.
    pub creation_epoch: Option<f64>,
    /// When the listing expires, in epoch seconds.
    pub ending_epoch: Option<f64>,
    /// The item price, in the shop's currency.
    pub price: Option<f64>,
    /// ISO code of the listing's currency.
    pub currency_code: Option<String>,
    /// Number of items available.
    pub quantity: Option<i64>,
    /// The listing's tags.
    pub tags: Vec<String>,
    /// The listing's materials.
    pub materials: Vec<String>,
    /// Number of times the listing has been viewed.
    pub views: Option<i64>,
}

impl Listing {
    /// The creation date as a [`DateTime`], when present.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.creation_epoch)
    }

    /// The expiry date as a [`DateTime`], when present.
    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.ending_epoch)
    }
}
