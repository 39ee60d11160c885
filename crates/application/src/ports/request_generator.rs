//! Request generator port

use async_trait::async_trait;
use thiserror::Error;

use netsy_domain::{RequestUri, TransportStatus};

/// Classified transport-level failure raised by a request generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-2xx status code.
    #[error("HTTP status {status}")]
    Protocol {
        /// The numeric status code.
        status: u16,
        /// The raw error body, when one could be read.
        body: Option<String>,
    },

    /// The server could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// The URI was rejected by the transport.
    #[error("invalid request URI: {0}")]
    InvalidUri(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),
}

impl TransportError {
    /// Maps this error onto the envelope's transport classification.
    #[must_use]
    pub const fn transport_status(&self) -> TransportStatus {
        match self {
            Self::Protocol { status, .. } => TransportStatus::Protocol(*status),
            Self::Timeout => TransportStatus::Timeout,
            Self::ConnectionFailed(_) | Self::InvalidUri(_) | Self::BodyRead(_) => {
                TransportStatus::Connectivity
            }
        }
    }
}

/// Port for issuing HTTP GET requests.
///
/// This trait abstracts the network so the retrieval pipeline is
/// independent of any HTTP library. Exactly one production adapter
/// exists; tests substitute deterministic doubles.
///
/// The future resolves with the raw, fully-read response body on
/// success, or a classified [`TransportError`]. Dropping the future
/// abandons interest in the result; the underlying transfer may still
/// complete, so cancellation is best-effort only.
#[async_trait]
pub trait RequestGenerator: Send + Sync {
    /// Issues a GET request for `uri` without blocking the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for non-2xx responses, connectivity
    /// failures and timeouts. Exactly one of body or error is produced
    /// per call.
    async fn start_request(&self, uri: &RequestUri) -> Result<String, TransportError>;
}
