//! Client-session assembly tests: domain, application and the cache
//! adapters wired together the way a real session would be.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use netsy_application::ports::{DataCache, RequestGenerator, TransportError};
use netsy_application::retriever::DataRetriever;
use netsy_application::services::{ServerService, ShopService};
use netsy_domain::{DetailLevel, QueryContext, RequestUri};
use netsy_infrastructure::{MemoryCache, NullCache};

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
    async fn start_request(&self, _uri: &RequestUri) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

const SHOPS_BODY: &str =
    r#"{"count":1,"results":[{"user_id":99,"user_name":"potter","shop_name":"MudWorks"}],"params":{}}"#;

#[tokio::test]
async fn test_memory_cache_deduplicates_identical_session_calls() {
    let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
    let generator = Arc::new(CountingGenerator::new(SHOPS_BODY));
    let cache = Arc::new(MemoryCache::new());
    let retriever = Arc::new(DataRetriever::new(
        Arc::clone(&cache) as Arc<dyn DataCache>,
        Arc::clone(&generator),
    ));
    let service = ShopService::new(Arc::clone(&context), retriever);

    let first = service.shop_details_by_id(99, DetailLevel::Low).await;
    let second = service.shop_details_by_id(99, DetailLevel::Low).await;

    assert!(first.is_success());
    assert!(second.is_success());
    assert_eq!(
        second.value().unwrap().results[0].shop_name.as_deref(),
        Some("MudWorks")
    );
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
}

#[tokio::test]
async fn test_null_cache_refetches_every_call() {
    let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
    let generator = Arc::new(CountingGenerator::new(
        r#"{"count":1,"results":["pong"],"params":{}}"#,
    ));
    let retriever = Arc::new(DataRetriever::new(
        Arc::new(NullCache::new()),
        Arc::clone(&generator),
    ));
    let service = ServerService::new(context, retriever);

    assert!(service.ping().await.is_success());
    assert!(service.ping().await.is_success());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_services_share_one_retriever_and_cache() {
    let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
    let generator = Arc::new(CountingGenerator::new(SHOPS_BODY));
    let cache = Arc::new(MemoryCache::new());
    let retriever = Arc::new(DataRetriever::new(
        Arc::clone(&cache) as Arc<dyn DataCache>,
        Arc::clone(&generator),
    ));

    let shops_a = ShopService::new(Arc::clone(&context), Arc::clone(&retriever));
    let shops_b = ShopService::new(Arc::clone(&context), Arc::clone(&retriever));

    assert!(shops_a.shop_details_by_id(99, DetailLevel::Low).await.is_success());
    assert!(shops_b.shop_details_by_id(99, DetailLevel::Low).await.is_success());
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}
