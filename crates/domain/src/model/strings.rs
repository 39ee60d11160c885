//! Plain-string responses

use crate::model::ResultSet;

/// Tags or categories, returned as plain strings.
pub type StringResults = ResultSet<String>;
