//! Request URI construction
//!
//! Fluent builder that assembles a fully qualified request URI from a
//! resource path, path segments, and a validated set of query parameters.
//! The built string doubles as the cache key, so construction is
//! deterministic: parameters appear in insertion order and the API key is
//! always appended last.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded::Serializer as QuerySerializer;

use crate::context::QueryContext;
use crate::error::{DomainError, DomainResult};
use crate::params::{DetailLevel, SortField, SortOrder};

/// An opaque, fully qualified request URI.
///
/// Produced only by [`UriBuilder::build`]; the string form is used
/// verbatim as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestUri(String);

impl RequestUri {
    /// Returns the URI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the URI, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fluent builder for request URIs.
///
/// Validation failures raised while chaining (a negative offset, a
/// non-positive limit) are recorded and surfaced by [`UriBuilder::build`];
/// the first failure wins. These are pre-network argument errors, never
/// transport errors.
#[derive(Debug, Clone)]
pub struct UriBuilder<'a> {
    context: &'a QueryContext,
    path: String,
    query: Vec<(String, String)>,
    error: Option<DomainError>,
}

impl<'a> UriBuilder<'a> {
    /// Starts a builder for a resource path such as `"shops/featured"`.
    #[must_use]
    pub fn start(context: &'a QueryContext, resource_path: &str) -> Self {
        Self {
            context,
            path: resource_path.to_string(),
            query: Vec::new(),
            error: None,
        }
    }

    /// Starts a builder for a resource path followed by path segments,
    /// e.g. `("users", ["1234"])` for `users/1234`.
    #[must_use]
    pub fn start_with_segments(
        context: &'a QueryContext,
        resource_path: &str,
        segments: &[&str],
    ) -> Self {
        let mut path = resource_path.to_string();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        Self::start(context, &path)
    }

    /// Appends a suffix to the resource path, e.g. `"/listings"`.
    #[must_use]
    pub fn append(mut self, suffix: &str) -> Self {
        self.path.push_str(suffix);
        self
    }

    /// Adds the paging window.
    ///
    /// Records a validation failure when `offset` is negative or `limit`
    /// is not positive; the failure is surfaced by [`UriBuilder::build`].
    #[must_use]
    pub fn offset_limit(mut self, offset: i32, limit: i32) -> Self {
        if self.error.is_none() {
            if offset < 0 {
                self.error = Some(DomainError::InvalidArgument(format!(
                    "Negative offset of {offset}"
                )));
                return self;
            }
            if limit <= 0 {
                self.error = Some(DomainError::InvalidArgument(format!("Bad limit of {limit}")));
                return self;
            }
        }
        self.param("offset", offset).param("limit", limit)
    }

    /// Adds the `detail_level` parameter.
    #[must_use]
    pub fn detail_level(self, level: DetailLevel) -> Self {
        self.param("detail_level", level.as_str())
    }

    /// Adds the `sort_on` parameter.
    #[must_use]
    pub fn sort_field(self, field: SortField) -> Self {
        self.param("sort_on", field.as_str())
    }

    /// Adds the `sort_order` parameter.
    #[must_use]
    pub fn sort_order(self, order: SortOrder) -> Self {
        self.param("sort_order", order.as_str())
    }

    /// Adds a query parameter. Values are percent-encoded at build time.
    #[must_use]
    pub fn param(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    ///
    /// An absent value emits nothing at all, distinguishing "unset" from
    /// "explicitly empty" on the wire.
    #[must_use]
    pub fn optional_param(self, name: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Builds the request URI, appending the API key as the final query
    /// parameter.
    ///
    /// Building is pure: the same chain always produces the same string,
    /// which is what makes the result usable as a cache key.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure recorded while chaining, an
    /// `InvalidArgument` when the context holds an empty API key, or an
    /// `InvalidUri` when the assembled string is not a valid URL.
    pub fn build(&self) -> DomainResult<RequestUri> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        if !self.context.has_api_key() {
            return Err(DomainError::InvalidArgument(
                "Empty Etsy API key".to_string(),
            ));
        }

        let mut serializer = QuerySerializer::new(String::new());
        for (name, value) in &self.query {
            serializer.append_pair(name, value);
        }
        serializer.append_pair("api_key", self.context.api_key());
        let query = serializer.finish();

        let raw = format!("{}{}?{}", self.context.base_uri(), self.path, query);
        let parsed = Url::parse(&raw).map_err(|e| DomainError::InvalidUri(format!("{e}: {raw}")))?;
        Ok(RequestUri(parsed.into()))
    }
}
