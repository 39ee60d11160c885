//! Tag and category service

use std::sync::Arc;

use netsy_domain::{QueryContext, ResultEnvelope, StringResults, UriBuilder};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the tag and category taxonomies.
pub struct TagCategoryService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> TagCategoryService<G> {
    /// Creates a tag and category service over a shared context and
    /// retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets the top-level tags.
    pub async fn top_level_tags(&self) -> ResultEnvelope<StringResults> {
        let builder = UriBuilder::start(&self.context, "tags/top-level");
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the child tags of a tag.
    pub async fn child_tags(&self, tag: &str) -> ResultEnvelope<StringResults> {
        let builder = UriBuilder::start_with_segments(&self.context, "tags", &[tag])
            .append("/children");
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the top-level categories.
    pub async fn top_level_categories(&self) -> ResultEnvelope<StringResults> {
        let builder = UriBuilder::start(&self.context, "categories/top-level");
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the child categories of a category.
    pub async fn child_categories(&self, category: &str) -> ResultEnvelope<StringResults> {
        let builder = UriBuilder::start_with_segments(&self.context, "categories", &[category])
            .append("/children");
        run_call(&self.retriever, &self.context, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::helper::EMPTY_API_KEY;
    use crate::services::test_support::{NoCache, RecordingGenerator, UnreachableGenerator};

    const TAGS_BODY: &str = r#"{"count":2,"results":["ceramics","pottery"],"params":{}}"#;

    fn service(generator: Arc<RecordingGenerator>) -> TagCategoryService<RecordingGenerator> {
        let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
        let retriever = Arc::new(DataRetriever::new(Arc::new(NoCache), generator));
        TagCategoryService::new(context, retriever)
    }

    #[tokio::test]
    async fn test_top_level_tags_uri_shape() {
        let generator = Arc::new(RecordingGenerator::new(TAGS_BODY));
        let service = service(Arc::clone(&generator));

        let envelope = service.top_level_tags().await;
        assert!(envelope.is_success());
        assert_eq!(
            envelope.value().unwrap().results,
            vec!["ceramics".to_string(), "pottery".to_string()]
        );
        assert_eq!(
            generator.requested_uris(),
            vec!["https://api.test/v1/tags/top-level?api_key=key".to_string()]
        );
    }

    #[tokio::test]
    async fn test_child_categories_uri_shape() {
        let generator = Arc::new(RecordingGenerator::new(TAGS_BODY));
        let service = service(Arc::clone(&generator));

        let envelope = service.child_categories("ceramics").await;
        assert!(envelope.is_success());
        assert_eq!(
            generator.requested_uris(),
            vec!["https://api.test/v1/categories/ceramics/children?api_key=key".to_string()]
        );
    }

    #[tokio::test]
    async fn test_empty_key_fails_before_network() {
        let context = Arc::new(QueryContext::new(""));
        let retriever = Arc::new(DataRetriever::new(
            Arc::new(NoCache),
            Arc::new(UnreachableGenerator),
        ));
        let service = TagCategoryService::new(context, retriever);

        let envelope = service.child_tags("pottery").await;
        assert!(!envelope.is_success());
        assert_eq!(envelope.status().error_message(), Some(EMPTY_API_KEY));
    }
}
