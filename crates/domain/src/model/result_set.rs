//! Generic collection envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ count, results, params }` envelope wrapping every collection
/// response.
///
/// `params` echoes the query parameters the server applied; its shape
/// varies per endpoint, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet<T> {
    /// Number of results available.
    #[serde(default)]
    pub count: i64,
    /// The returned records.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// The query parameters echoed by the server.
    #[serde(default)]
    pub params: Value,
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
            params: Value::Null,
        }
    }
}
