//! Listing service

use std::sync::Arc;

use netsy_domain::{
    DetailLevel, Listings, QueryContext, ResultEnvelope, SortField, SortOrder, UriBuilder,
};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the `listings` resource.
pub struct ListingService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> ListingService<G> {
    /// Creates a listing service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets one listing by id.
    pub async fn listing_details(
        &self,
        listing_id: i64,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "listings", &[&listing_id.to_string()])
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets all active listings, page by page.
    pub async fn all_listings(
        &self,
        sort_field: SortField,
        sort_order: SortOrder,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder = UriBuilder::start(&self.context, "listings/all")
            .sort_field(sort_field)
            .sort_order(sort_order)
            .offset_limit(offset, limit)
            .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the listings currently featured on the front page.
    pub async fn front_featured_listings(
        &self,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder = UriBuilder::start(&self.context, "listings/featured/front")
            .offset_limit(offset, limit)
            .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Searches active listings by keywords, optionally bounded by price.
    #[allow(clippy::too_many_arguments)]
    pub async fn listings_by_keyword(
        &self,
        search_terms: &str,
        sort_field: SortField,
        sort_order: SortOrder,
        min_price: Option<f64>,
        max_price: Option<f64>,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "listings/keywords", &[search_terms])
                .sort_field(sort_field)
                .sort_order(sort_order)
                .optional_param("min_price", min_price)
                .optional_param("max_price", max_price)
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets active listings in a category.
    #[allow(clippy::too_many_arguments)]
    pub async fn listings_by_category(
        &self,
        category: &str,
        sort_field: SortField,
        sort_order: SortOrder,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "listings/category", &[category])
                .sort_field(sort_field)
                .sort_order(sort_order)
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }
}
