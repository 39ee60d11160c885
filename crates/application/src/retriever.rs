//! Data retriever
//!
//! The orchestrator every endpoint call funnels through: cache lookup,
//! network issuance via the request generator port, deserialization,
//! cache population, and delivery of exactly one result envelope per
//! call. Concurrent calls for one URI are coalesced onto a single
//! network request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use tokio::sync::watch;
use tracing::{debug, warn};

use netsy_domain::{RequestUri, ResultEnvelope, ResultStatus};

use crate::ports::{CacheValue, DataCache, RequestGenerator};

/// Message tag for response bodies that fail to deserialize.
pub const DESERIALIZE_ERROR: &str = "Error Deserializing data";

/// Message tag for transport-level failures.
pub const WEB_ERROR: &str = "Web error";

/// Outcome of one in-flight request, shared with coalesced waiters.
#[derive(Clone)]
enum FlightOutcome {
    Value(CacheValue),
    Failed(ResultStatus),
}

type FlightSlot = Option<FlightOutcome>;

/// Retrieves typed data for request URIs, cache first.
///
/// The cache is an explicit constructor dependency shared by reference
/// for the lifetime of the owning client session; the retriever itself
/// holds no other mutable state beyond the in-flight table.
pub struct DataRetriever<G: RequestGenerator> {
    generator: Arc<G>,
    cache: Arc<dyn DataCache>,
    in_flight: Mutex<HashMap<String, watch::Receiver<FlightSlot>>>,
}

impl<G: RequestGenerator> DataRetriever<G> {
    /// Creates a retriever over the given cache and request generator.
    pub fn new(cache: Arc<dyn DataCache>, generator: Arc<G>) -> Self {
        Self {
            generator,
            cache,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Retrieves the value for `uri`, resolving to exactly one envelope.
    ///
    /// A cache hit resolves immediately without touching the network. On
    /// a miss, the request generator is invoked; the body is deserialized
    /// into `T` and cached on success. Failures are classified ("Error
    /// Deserializing data" or "Web error") and never cached. Nothing is
    /// retried: every failure is terminal for this single call.
    pub async fn retrieve<T>(&self, uri: &RequestUri) -> ResultEnvelope<T>
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let key = uri.as_str();

        if let Some(value) = self.cache.read(key) {
            match value.downcast::<T>() {
                Ok(typed) => {
                    debug!(uri = key, "cache hit");
                    return ResultEnvelope::success((*typed).clone());
                }
                Err(_) => {
                    // Stored under this key by a caller expecting a
                    // different type; treat as a miss rather than fail.
                    warn!(uri = key, "cached value has unexpected type");
                }
            }
        }

        match self.join_or_lead(key) {
            Flight::Leader(publisher) => {
                let _guard = FlightGuard {
                    table: &self.in_flight,
                    key,
                };
                let (outcome, envelope) = self.fetch::<T>(uri).await;
                let _ = publisher.send(Some(outcome));
                envelope
            }
            Flight::Follower(receiver) => match Self::await_leader(receiver).await {
                Some(FlightOutcome::Value(value)) => match value.downcast::<T>() {
                    Ok(typed) => ResultEnvelope::success((*typed).clone()),
                    Err(_) => self.fetch::<T>(uri).await.1,
                },
                Some(FlightOutcome::Failed(status)) => ResultEnvelope::from_status(status),
                None => {
                    debug!(uri = key, "in-flight request abandoned, fetching directly");
                    self.fetch::<T>(uri).await.1
                }
            },
        }
    }

    /// Registers interest in `key`, becoming the leader when no request
    /// is in flight.
    fn join_or_lead(&self, key: &str) -> Flight {
        let mut table = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(receiver) = table.get(key) {
            Flight::Follower(receiver.clone())
        } else {
            let (sender, receiver) = watch::channel(None);
            table.insert(key.to_string(), receiver);
            Flight::Leader(sender)
        }
    }

    /// Waits for the leader's published outcome. Resolves to `None` when
    /// the leader was dropped before publishing.
    async fn await_leader(mut receiver: watch::Receiver<FlightSlot>) -> Option<FlightOutcome> {
        loop {
            if let Some(outcome) = receiver.borrow_and_update().clone() {
                return Some(outcome);
            }
            if receiver.changed().await.is_err() {
                return None;
            }
        }
    }

    /// Performs the network request and post-processing for one URI.
    async fn fetch<T>(&self, uri: &RequestUri) -> (FlightOutcome, ResultEnvelope<T>)
    where
        T: DeserializeOwned + Clone + Send + Sync + 'static,
    {
        match self.generator.start_request(uri).await {
            Ok(body) => match serde_json::from_str::<T>(&body) {
                Ok(value) => {
                    let shared: CacheValue = Arc::new(value.clone());
                    self.cache.write(uri.as_str(), Arc::clone(&shared));
                    debug!(uri = uri.as_str(), "retrieved and cached");
                    (FlightOutcome::Value(shared), ResultEnvelope::success(value))
                }
                Err(parse_error) => {
                    warn!(uri = uri.as_str(), error = %parse_error, "deserialization failed");
                    let status =
                        ResultStatus::error(DESERIALIZE_ERROR).with_detail(parse_error.to_string());
                    (
                        FlightOutcome::Failed(status.clone()),
                        ResultEnvelope::from_status(status),
                    )
                }
            },
            Err(transport_error) => {
                warn!(uri = uri.as_str(), error = %transport_error, "request failed");
                let status = ResultStatus::error(WEB_ERROR)
                    .with_detail(transport_error.to_string())
                    .with_transport(transport_error.transport_status());
                (
                    FlightOutcome::Failed(status.clone()),
                    ResultEnvelope::from_status(status),
                )
            }
        }
    }
}

/// A caller's role for one retrieval.
enum Flight {
    Leader(watch::Sender<FlightSlot>),
    Follower(watch::Receiver<FlightSlot>),
}

/// Removes the in-flight entry when the leader finishes or is dropped
/// mid-request, so a stale entry can never strand later callers.
struct FlightGuard<'a> {
    table: &'a Mutex<HashMap<String, watch::Receiver<FlightSlot>>>,
    key: &'a str,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(self.key);
    }
}
