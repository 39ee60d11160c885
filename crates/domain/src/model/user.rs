//! User records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSet;
use crate::params::Gender;

/// A collection of users.
pub type Users = ResultSet<User>;

/// A single user of the site, who may or may not be a seller.
///
/// Low-detail responses carry only the identity and image fields; medium
/// and high detail add the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// The user's login name.
    pub user_name: String,
    /// The user's numeric id, also valid as the user's shop id.
    pub user_id: i64,
    /// Full URL to the user's shop or public profile.
    pub url: Option<String>,
    /// 25x25 avatar thumbnail.
    pub image_url_25x25: Option<String>,
    /// 30x30 avatar thumbnail.
    pub image_url_30x30: Option<String>,
    /// 50x50 avatar thumbnail.
    pub image_url_50x50: Option<String>,
    /// 75x75 avatar thumbnail.
    pub image_url_75x75: Option<String>,
    /// When the user joined the site, in epoch seconds.
    pub join_epoch: Option<f64>,
    /// The user's city and state; freeform, may be blank.
    pub city: Option<String>,
    /// The user's gender wire token (`female`, `male`, or `private`).
    pub gender: Option<String>,
    /// The user's biography.
    pub bio: Option<String>,
    /// Number of items bought.
    pub transaction_buy_count: Option<i64>,
    /// Number of items sold.
    pub transaction_sold_count: Option<i64>,
    /// Whether the user is a seller.
    pub is_seller: Option<bool>,
    /// When the user last logged on, in epoch seconds.
    pub last_login_epoch: Option<f64>,
}

impl User {
    /// The join date as a [`DateTime`], when present and representable.
    #[must_use]
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.join_epoch)
    }

    /// The last log-on date as a [`DateTime`], when present.
    #[must_use]
    pub fn last_login_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.last_login_epoch)
    }

    /// The user's gender, parsed leniently from the wire token.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender
            .as_deref()
            .map_or(Gender::Unknown, Gender::from_token)
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn epoch_to_datetime(epoch: Option<f64>) -> Option<DateTime<Utc>> {
    // Sub-second precision is not meaningful for these fields
    epoch.and_then(|seconds| DateTime::from_timestamp(seconds as i64, 0))
}
