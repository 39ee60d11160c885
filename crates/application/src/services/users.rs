//! User service

use std::sync::Arc;

use netsy_domain::{DetailLevel, QueryContext, ResultEnvelope, UriBuilder, Users};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the `users` resource.
pub struct UserService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> UserService<G> {
    /// Creates a user service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets a user's details by id.
    pub async fn user_details(
        &self,
        user_id: i64,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Users> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Searches for users by name.
    pub async fn users_by_name(
        &self,
        search_name: &str,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Users> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users/keywords", &[search_name])
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::services::test_support::{NoCache, RecordingGenerator};

    const USERS_BODY: &str = r#"{"count":1,"results":[{"user_name":"Fred","user_id":1234}],"params":{"user_id":1234,"detail_level":"low"}}"#;

    #[tokio::test]
    async fn test_user_details() {
        let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
        let generator = Arc::new(RecordingGenerator::new(USERS_BODY));
        let retriever = Arc::new(DataRetriever::new(Arc::new(NoCache), Arc::clone(&generator)));
        let service = UserService::new(context, retriever);

        let envelope = service.user_details(1234, DetailLevel::Low).await;
        assert!(envelope.is_success());
        let users = envelope.value().unwrap();
        assert_eq!(users.results[0].user_name, "Fred");
        assert_eq!(
            generator.requested_uris(),
            vec!["https://api.test/v1/users/1234?detail_level=low&api_key=key".to_string()]
        );
    }

    #[tokio::test]
    async fn test_users_by_name_pages() {
        let context = Arc::new(QueryContext::with_base_uri("key", "https://api.test/v1/"));
        let generator = Arc::new(RecordingGenerator::new(USERS_BODY));
        let retriever = Arc::new(DataRetriever::new(Arc::new(NoCache), Arc::clone(&generator)));
        let service = UserService::new(context, retriever);

        let envelope = service
            .users_by_name("fred", 10, 5, DetailLevel::Medium)
            .await;
        assert!(envelope.is_success());
        assert_eq!(
            generator.requested_uris(),
            vec![
                "https://api.test/v1/users/keywords/fred?offset=10&limit=5&detail_level=medium&api_key=key"
                    .to_string()
            ]
        );
    }
}
