//! Gift guide records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSet;
use crate::model::user::epoch_to_datetime;

/// A collection of gift guides.
pub type GiftGuides = ResultSet<GiftGuide>;

/// An editorial gift guide grouping listings around a theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftGuide {
    /// The guide's numeric id.
    pub guide_id: i64,
    /// The guide's title.
    pub title: Option<String>,
    /// Longer description of the guide's theme.
    pub description: Option<String>,
    /// Position of the guide within its section.
    pub display_order: Option<i64>,
    /// Numeric id of the section the guide belongs to.
    pub guide_section_id: Option<i64>,
    /// Title of the section the guide belongs to.
    pub guide_section_title: Option<String>,
    /// When the guide was created, in epoch seconds.
    pub creation_tsz_epoch: Option<f64>,
}

impl GiftGuide {
    /// The creation date as a [`DateTime`], when present.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.creation_tsz_epoch)
    }
}
