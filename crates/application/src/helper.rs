//! Service call helper
//!
//! The generic "validate, build, retrieve" sequence every endpoint method
//! uses. Prerequisites are checked strictly before any cache or network
//! activity; an invalid call resolves to a failure envelope without ever
//! constructing a URI.

use netsy_domain::{QueryContext, ResultEnvelope, ResultStatus, UriBuilder};
use serde::de::DeserializeOwned;

use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Message delivered when the context holds no API key.
pub const EMPTY_API_KEY: &str = "Empty Etsy API key";

/// Validates call prerequisites for the given context.
///
/// # Errors
///
/// Returns a ready-made failure status when the context's API key is
/// empty.
pub fn check_prerequisites(context: &QueryContext) -> Result<(), ResultStatus> {
    if context.has_api_key() {
        Ok(())
    } else {
        Err(ResultStatus::error(EMPTY_API_KEY))
    }
}

/// Runs one endpoint call: prerequisites, then URI construction, then
/// retrieval, in that fixed order.
///
/// Builder validation failures (negative offset, bad limit) become
/// failure envelopes carrying the validation message verbatim.
pub async fn run_call<T, G>(
    retriever: &DataRetriever<G>,
    context: &QueryContext,
    builder: UriBuilder<'_>,
) -> ResultEnvelope<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    G: RequestGenerator,
{
    if let Err(status) = check_prerequisites(context) {
        return ResultEnvelope::from_status(status);
    }
    match builder.build() {
        Ok(uri) => retriever.retrieve(&uri).await,
        Err(error) => ResultEnvelope::failure(error.to_string()),
    }
}
