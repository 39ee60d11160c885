//! Feedback records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ResultSet;
use crate::model::user::epoch_to_datetime;

/// A collection of feedback entries.
pub type Feedbacks = ResultSet<Feedback>;

/// A feedback entry left after a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    /// The feedback entry's numeric id.
    pub feedback_id: i64,
    /// The listing the feedback refers to.
    pub listing_id: i64,
    /// Title of the listing the feedback refers to.
    pub title: Option<String>,
    /// Full URL to the listing's page.
    pub url: Option<String>,
    /// When the feedback was left, in epoch seconds.
    pub creation_epoch: Option<f64>,
    /// The user who wrote the feedback.
    pub author_user_id: i64,
    /// The user the feedback was left for.
    pub subject_user_id: i64,
    /// The feedback score: +1, 0 or -1.
    pub value: Option<i64>,
    /// The feedback text.
    pub message: Option<String>,
    /// 25x25 thumbnail of the feedback image, if any.
    pub image_url_25x25: Option<String>,
    /// Full-size feedback image, if any.
    pub image_url_fullxfull: Option<String>,
}

impl Feedback {
    /// The creation date as a [`DateTime`], when present.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.creation_epoch)
    }

    /// Returns true for positive feedback.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.value.is_some_and(|v| v > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_feedback_deserializes() {
        let json = r#"{"feedback_id":5,"listing_id":7777,"author_user_id":1,"subject_user_id":2,"value":1,"message":"lovely mug"}"#;
        let feedback: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.feedback_id, 5);
        assert!(feedback.is_positive());
        assert_eq!(feedback.message.as_deref(), Some("lovely mug"));
    }

    #[test]
    fn test_missing_value_is_not_positive() {
        let feedback = Feedback::default();
        assert!(!feedback.is_positive());
    }
}
