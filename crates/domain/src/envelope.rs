//! Result envelope types
//!
//! Every asynchronous operation ultimately resolves to a
//! [`ResultEnvelope`]: an immutable container holding either the typed
//! value or a failure classification, never both. Envelopes are created
//! exactly once per logical operation attempt and consumed once by the
//! caller.

use serde::{Deserialize, Serialize};

/// Classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportStatus {
    /// The server answered with a non-2xx status code.
    Protocol(u16),
    /// The server could not be reached.
    Connectivity,
    /// The request did not complete in time.
    Timeout,
}

/// Outcome metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultStatus {
    success: bool,
    error_message: Option<String>,
    error_detail: Option<String>,
    transport: Option<TransportStatus>,
}

impl ResultStatus {
    /// Creates a success status.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error_message: None,
            error_detail: None,
            transport: None,
        }
    }

    /// Creates a failure status with a descriptive message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            error_detail: None,
            transport: None,
        }
    }

    /// Attaches the text of an underlying error.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error_detail = Some(detail.into());
        self
    }

    /// Attaches a transport classification.
    #[must_use]
    pub const fn with_transport(mut self, transport: TransportStatus) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Returns true for a success status.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the text of the underlying error, if any.
    #[must_use]
    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    /// Returns the transport classification, if any.
    #[must_use]
    pub const fn transport(&self) -> Option<TransportStatus> {
        self.transport
    }
}

/// The typed, immutable container delivered for one logical operation.
///
/// Invariant: a success envelope holds a value and no error message; a
/// failure envelope holds no value and always carries a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    value: Option<T>,
    status: ResultStatus,
}

impl<T> ResultEnvelope<T> {
    /// Creates a success envelope holding `value`.
    #[must_use]
    pub const fn success(value: T) -> Self {
        Self {
            value: Some(value),
            status: ResultStatus::ok(),
        }
    }

    /// Creates a failure envelope with a descriptive message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::from_status(ResultStatus::error(message))
    }

    /// Creates a failure envelope from an already-built failure status.
    ///
    /// The status must not be a success status; a success status is
    /// downgraded to a generic failure to preserve the envelope invariant.
    #[must_use]
    pub fn from_status(status: ResultStatus) -> Self {
        let status = if status.success() {
            ResultStatus::error("missing value for success status")
        } else {
            status
        };
        Self {
            value: None,
            status,
        }
    }

    /// Returns true if the operation succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.success()
    }

    /// Returns the value of a success envelope.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the envelope, returning the value of a success envelope.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Returns the outcome metadata.
    #[must_use]
    pub const fn status(&self) -> &ResultStatus {
        &self.status
    }
}
