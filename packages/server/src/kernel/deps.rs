//! Server dependencies for resolvers (using traits for testability)
//!
//! This module provides the central dependency container shared by all
//! GraphQL resolvers. The upstream API sits behind a trait so tests can
//! swap in `MockGravity`.

use anyhow::Result;
use async_trait::async_trait;
use gravity_client::{
    Artist, Artwork, FollowArtist, GravityClient, GravityError, PageQuery, Partner,
};
use std::sync::Arc;

use crate::common::pagination::{PageWindow, PagingLimits};
use crate::kernel::{BaseGravity, LoadedPage};

// =============================================================================
// GravityClient Adapter (implements BaseGravity trait)
// =============================================================================

/// Wrapper around GravityClient that implements BaseGravity trait
pub struct GravityAdapter(pub Arc<GravityClient>);

impl GravityAdapter {
    pub fn new(client: Arc<GravityClient>) -> Self {
        Self(client)
    }
}

fn page_query(window: PageWindow) -> PageQuery {
    PageQuery::new(window.page, window.size, window.offset)
}

#[async_trait]
impl BaseGravity for GravityAdapter {
    async fn artist(&self, id: &str, access_token: Option<&str>) -> Result<Option<Artist>> {
        match self.0.artist(id, access_token).await {
            Ok(artist) => Ok(Some(artist)),
            Err(GravityError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn artists(&self, window: PageWindow, sort: Option<&str>) -> Result<LoadedPage<Artist>> {
        let page = self.0.artists(page_query(window), sort, None).await?;
        Ok(page.into())
    }

    async fn artist_artworks(
        &self,
        artist_id: &str,
        window: PageWindow,
        sort: Option<&str>,
    ) -> Result<LoadedPage<Artwork>> {
        let page = self
            .0
            .artist_artworks(artist_id, page_query(window), sort, None)
            .await?;
        Ok(page.into())
    }

    async fn partners(
        &self,
        window: PageWindow,
        sort: Option<&str>,
    ) -> Result<LoadedPage<Partner>> {
        let page = self.0.partners(page_query(window), sort, None).await?;
        Ok(page.into())
    }

    async fn follow_artist(
        &self,
        artist_id: &str,
        unfollow: bool,
        access_token: &str,
    ) -> Result<FollowArtist> {
        let follow = if unfollow {
            self.0.unfollow_artist(artist_id, access_token).await?
        } else {
            self.0.follow_artist(artist_id, access_token).await?
        };
        Ok(follow)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to resolvers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub gravity: Arc<dyn BaseGravity>,
    /// Page size bounds for every connection field
    pub paging: PagingLimits,
}

impl ServerDeps {
    pub fn new(gravity: Arc<dyn BaseGravity>, paging: PagingLimits) -> Self {
        Self { gravity, paging }
    }
}
