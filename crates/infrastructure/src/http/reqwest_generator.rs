//! Request generator implementation using reqwest.
//!
//! This adapter implements the `RequestGenerator` port using the reqwest
//! library. It is the single production source of network I/O for the
//! retrieval pipeline.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use netsy_application::ports::{RequestGenerator, TransportError};
use netsy_domain::RequestUri;

/// Request generator backed by `reqwest::Client`.
///
/// Default configuration:
/// - Follow redirects: up to 10
/// - TLS verification: enabled
/// - User-Agent: "Netsy/0.1.0"
///
/// No timeout is imposed by this adapter; per the retrieval contract the
/// caller may supply a pre-configured client carrying one via
/// [`ReqwestRequestGenerator::with_client`].
pub struct ReqwestRequestGenerator {
    client: Client,
}

impl ReqwestRequestGenerator {
    /// Creates a generator with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent("Netsy/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a generator over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors to the port's transport classification.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::ConnectionFailed(error.to_string())
        }
    }
}

#[async_trait]
impl RequestGenerator for ReqwestRequestGenerator {
    async fn start_request(&self, uri: &RequestUri) -> Result<String, TransportError> {
        let url =
            Url::parse(uri.as_str()).map_err(|e| TransportError::InvalidUri(e.to_string()))?;

        debug!(uri = uri.as_str(), "issuing GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            // Capture the error body when one can be read; it often
            // carries the server's explanation.
            let body = response.text().await.ok();
            return Err(TransportError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::BodyRead(e.to_string()))
    }
}
