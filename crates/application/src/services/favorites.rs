//! Favorites service

use std::sync::Arc;

use netsy_domain::{DetailLevel, Listings, QueryContext, ResultEnvelope, Shops, UriBuilder, Users};

use crate::helper::run_call;
use crate::ports::RequestGenerator;
use crate::retriever::DataRetriever;

/// Access to the favorites relations between users and listings.
pub struct FavoritesService<G: RequestGenerator> {
    context: Arc<QueryContext>,
    retriever: Arc<DataRetriever<G>>,
}

impl<G: RequestGenerator> FavoritesService<G> {
    /// Creates a favorites service over a shared context and retriever.
    pub const fn new(context: Arc<QueryContext>, retriever: Arc<DataRetriever<G>>) -> Self {
        Self { context, retriever }
    }

    /// Gets the users who have favorited a listing.
    pub async fn favorers_of_listing(
        &self,
        listing_id: i64,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Users> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "listings", &[&listing_id.to_string()])
                .append("/favorers")
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the listings a user has favorited.
    pub async fn favorite_listings_of_user(
        &self,
        user_id: i64,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Listings> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .append("/favorites/listings")
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }

    /// Gets the shops a user has favorited.
    pub async fn favorite_shops_of_user(
        &self,
        user_id: i64,
        offset: i32,
        limit: i32,
        detail_level: DetailLevel,
    ) -> ResultEnvelope<Shops> {
        let builder =
            UriBuilder::start_with_segments(&self.context, "users", &[&user_id.to_string()])
                .append("/favorites/shops")
                .offset_limit(offset, limit)
                .detail_level(detail_level);
        run_call(&self.retriever, &self.context, builder).await
    }
}
