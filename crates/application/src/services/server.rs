//! Server service

use std::sync::Arc;

use netsy_domain::{PingResult, QueryContext, ResultEnvelope, ServerEpoch, UriBuilder};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the server status endpoints.
pub struct ServerService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> ServerService<G> {
    /// Creates a server service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Checks that the server is alive.
    pub async fn ping(&self) -> ResultEnvelope<PingResult> {
        let builder = UriBuilder::start(&self.context, "server/ping");
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the server's clock in epoch seconds.
    pub async fn server_epoch(&self) -> ResultEnvelope<ServerEpoch> {
        let builder = UriBuilder::start(&self.context, "server/epoch");
        run_call(&self.retriever, &self.context, builder).await
    }
}
