//! Gift service

use std::sync::Arc;

use netsy_domain::{DetailLevel, GiftGuides, Listings, QueryContext, ResultEnvelope, UriBuilder};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the editorial gift guides.
pub struct GiftService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> GiftService<G> {
    /// Creates a gift service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets all gift guides.
    pub async fn gift_guides(&self) -> ResultEnvelope<GiftGuides> {
        let builder = UriBuilder::start(&self.context, "gift-guides");
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the listings in one gift guide.
    pub async fn gift_guide_listings(
        &self,
        guide_id: i64,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "gift-guides", &[&guide_id.to_string()])
                .append("/listings")
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::helper::EMPTY_API_KEY;
    use crate::services::test_support::{NoCache, RecordingGenerator, UnreachableGenerator};

    const GUIDES_BODY: &str =
        r#"{"count":1,"results":[{"guide_id":7,"title":"For the potter"}],"params":{}}"#;

    #[tokio::test]
    async fn test_gift_guides_uri_shape() {
        let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
        let generator = Arc::new(RecordingGenerator::new(GUIDES_BODY));
        let retriever = Arc::new(DataRetriever::new(Arc::new(NoCache), Arc::clone(&generator)));
        let service = GiftService::new(context, retriever);

        let envelope = service.gift_guides().await;
        assert!(envelope.is_success());
        assert_eq!(envelope.value().unwrap().results[0].guide_id, 7);
        assert_eq!(
            generator.requested_uris(),
            vec!["https://api.test/v1/gift-guides?api_key=key".to_string()]
        );
    }

    #[tokio::test]
    async fn test_gift_guide_listings_uri_shape() {
        let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
        let generator = Arc::new(RecordingGenerator::new(
            r#"{"count":0,"results":[],"params":{}}"#,
        ));
        let retriever = Arc::new(DataRetriever::new(Arc::new(NoCache), Arc::clone(&generator)));
        let service = GiftService::new(context, retriever);

        let envelope = service
            .gift_guide_listings(7, 0, 10, DetailLevel::Low)
            .await;
        assert!(envelope.is_success());
        assert_eq!(
            generator.requested_uris(),
            vec![
                "https://api.test/v1/gift-guides/7/listings?offset=0&limit=10&detail_level=low&api_key=key"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_gift_guide_listings_empty_key_fails_before_network() {
        let context = Arc::new(QueryContext::new(""));
        let retriever = Arc::new(DataRetriever::new(
            Arc::new(NoCache),
            Arc::new(UnreachableGenerator),
        ));
        let service = GiftService::new(context, retriever);

        let envelope = service
            .gift_guide_listings(7, 0, 10, DetailLevel::Low)
            .await;
        assert!(!envelope.is_success());
        assert_eq!(envelope.status().error_message(), Some(EMPTY_API_KEY));
    }
}
