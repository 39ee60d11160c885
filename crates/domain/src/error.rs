//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur before any request is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A call argument failed validation. The message is delivered
    /// verbatim in the failure envelope.
    #[error("{0}")]
    InvalidArgument(String),

    /// A wire-format token could not be parsed into a closed enumeration.
    /// This is a configuration error on the caller's side, not a soft
    /// runtime failure.
    #[error("unrecognized {kind} token: {token}")]
    InvalidEnumToken {
        /// The token that failed to parse.
        token: String,
        /// The enumeration it was parsed for.
        kind: &'static str,
    },

    /// The assembled request URI is not a valid URL.
    #[error("invalid request URI: {0}")]
    InvalidUri(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
