//! Shop service

use std::sync::Arc;

use netsy_domain::{
    DetailLevel, Listings, QueryContext, ResultEnvelope, Shops, SortField, SortOrder, UriBuilder,
};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the `shops` resource.
pub struct ShopService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> ShopService<G> {
    /// Creates a shop service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets the details of a seller's shop by user id.
    pub async fn shop_details_by_id(
        &self,
        user_id: i64,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Shops> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "shops", &[&user_id.to_string()])
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the details of a seller's shop by user name.
    pub async fn shop_details_by_name(
        &self,
        user_name: &str,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Shops> {
        let builder = UriBuilder::start_with_segments(&self.context, "shops", &[user_name])
            .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the featured sellers.
    pub async fn featured_sellers(
        &self,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Shops> {
        let builder = UriBuilder::start(&self.context, "shops/featured")
            .offset_limit(offset, limit)
            .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Searches for shops by name.
    pub async fn shops_by_name(
        &self,
        search_name: &str,
        sort_order: SortOrder,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Shops> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "shops/keywords", &[search_name])
                .sort_order(sort_order)
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the listings in a seller's shop, optionally restricted to one
    /// shop section.
    #[allow(clippy::too_many_arguments)]
    pub async fn shop_listings(
        &self,
        user_id: i64,
        sort_field: SortField,
        sort_order: SortOrder,
        section_id: Option<i64>,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "shops", &[&user_id.to_string()])
                .append("/listings")
                .sort_field(sort_field)
                .sort_order(sort_order)
                .optional_param("section_id", section_id)
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }
}
