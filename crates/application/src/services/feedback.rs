//! Feedback service

use std::sync::Arc;

use netsy_domain::{Feedbacks, QueryContext, ResultEnvelope, UriBuilder};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the `feedback` resource.
pub struct FeedbackService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> FeedbackService<G> {
    /// Creates a feedback service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets one feedback entry by id.
    pub async fn feedback(&self, feedback_id: i64) -> ResultEnvelope<Feedbacks> {
        let builder = UriBuilder::start_with_segments(
            &self.context,
            "feedback",
            &[&feedback_id.to_string()],
        );
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the feedback left for a user.
    pub async fn feedback_for_user(
        &self,
        user_id: i64,
        offset: i32,
        limit: i32,
    ) -> ResultEnvelope<Feedbacks> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .append("/feedback")
                .offset_limit(offset, limit);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the feedback a user has left as a buyer.
    pub async fn feedback_as_buyer(
        &self,
        user_id: i64,
        offset: i32,
        limit: i32,
    ) -> ResultEnvelope<Feedbacks> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .append("/feedback/buyer")
                .offset_limit(offset, limit);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the feedback a user has left for others.
    pub async fn feedback_for_others(
        &self,
        user_id: i64,
        offset: i32,
        limit: i32,
    ) -> ResultEnvelope<Feedbacks> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .append("/feedback/others")
                .offset_limit(offset, limit);
        run_call(&self.retriever, &self.context, builder).await
    }
}
