//! Query context type

use serde::{Deserialize, Serialize};

/// Default base endpoint of the Etsy v1 API.
pub const DEFAULT_BASE_URI: &str = "https://openapi.etsy.com/v1/";

/// Immutable holder of the caller's API key and base endpoint.
///
/// Created once per client session and shared by reference across all
/// service calls; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
    api_key: String,
    base_uri: String,
}

impl QueryContext {
    /// Creates a context for the default Etsy endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_uri(api_key, DEFAULT_BASE_URI)
    }

    /// Creates a context for a custom endpoint.
    ///
    /// The base URI is normalized to end with a trailing slash so that
    /// resource paths can be appended directly.
    #[must_use]
    pub fn with_base_uri(api_key: impl Into<String>, base_uri: impl Into<String>) -> Self {
        let mut base_uri = base_uri.into();
        if !base_uri.ends_with('/') {
            base_uri.push('/');
        }
        Self {
            api_key: api_key.into(),
            base_uri,
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base endpoint URI, always ending with a slash.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns true if a non-empty API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_base_uri() {
        let context = QueryContext::new("key123");
        assert_eq!(context.base_uri(), DEFAULT_BASE_URI);
        assert_eq!(context.api_key(), "key123");
        assert!(context.has_api_key());
    }

    #[test]
    fn test_trailing_slash_added() {
        let context = QueryContext::with_base_uri("key", "http://localhost:8080/v1");
        assert_eq!(context.base_uri(), "http://localhost:8080/v1/");
    }

    #[test]
    fn test_empty_key_detected() {
        let context = QueryContext::new("");
        assert!(!context.has_api_key());
    }
}
