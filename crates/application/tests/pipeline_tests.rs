//! End-to-end pipeline tests over deterministic port doubles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use netsy_application::ports::{CacheValue, DataCache, RequestGenerator, TransportError};
use netsy_application::retriever::DataRetriever;
use netsy_application::services::UserService;
use netsy_domain::{DetailLevel, QueryContext};

const USERS_BODY: &str = r#"{"count":1,"results":[{"user_name":"Fred","user_id":1234}],"params":{"user_id":1234,"detail_level":"low"}}"#;

struct CountingGenerator {
    body: String,
    calls: AtomicUsize,
}

impl CountingGenerator {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RequestGenerator for CountingGenerator {
    async fn start_request(
        &self,
        _uri: &netsy_domain::RequestUri,
    ) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

#[derive(Default)]
struct MapCache {
    entries: Mutex<HashMap<String, CacheValue>>,
}

impl DataCache for MapCache {
    fn read(&self, key: &str) -> Option<CacheValue> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn write(&self, key: &str, value: CacheValue) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
    }

    fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[tokio::test]
async fn test_end_to_end_success_then_cache_hit() {
    let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
    let generator = Arc::new(CountingGenerator::new(USERS_BODY));
    let retriever = Arc::new(DataRetriever::new(
        Arc::new(MapCache::default()),
        Arc::clone(&generator),
    ));
    let service = UserService::new(context, retriever);

    let first = service.user_details(1234, DetailLevel::Low).await;
    assert!(first.is_success());
    let users = first.value().unwrap();
    assert_eq!(users.count, 1);
    assert_eq!(users.results[0].user_name, "Fred");
    assert_eq!(users.results[0].user_id, 1234);

    // The identical call is answered from the cache.
    let second = service.user_details(1234, DetailLevel::Low).await;
    assert!(second.is_success());
    assert_eq!(second.value().unwrap().results[0].user_name, "Fred");
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);

    // A different detail level is a different cache key.
    let third = service.user_details(1234, DetailLevel::High).await;
    assert!(third.is_success());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_clearing_the_cache_refetches() {
    let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
    let generator = Arc::new(CountingGenerator::new(USERS_BODY));
    let cache = Arc::new(MapCache::default());
    let retriever = Arc::new(DataRetriever::new(
        Arc::clone(&cache) as Arc<dyn DataCache>,
        Arc::clone(&generator),
    ));
    let service = UserService::new(context, retriever);

    assert!(service.user_details(1234, DetailLevel::Low).await.is_success());
    cache.clear();
    assert!(service.user_details(1234, DetailLevel::Low).await.is_success());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}
