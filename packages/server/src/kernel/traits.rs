// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Resolvers and actions depend on these, never on the HTTP client directly.
//
// Naming convention: Base* for trait names (e.g., BaseGravity)

use anyhow::Result;
use async_trait::async_trait;
use gravity_client::{Artist, Artwork, FollowArtist, Page, Partner};

use crate::common::pagination::PageWindow;

/// One upstream page plus the total size of the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPage<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> From<Page<T>> for LoadedPage<T> {
    fn from(page: Page<T>) -> Self {
        LoadedPage {
            items: page.body,
            total_count: page.total_count,
        }
    }
}

// =============================================================================
// Gravity Trait (Infrastructure - upstream REST API)
// =============================================================================

#[async_trait]
pub trait BaseGravity: Send + Sync {
    /// Fetch one artist by slug or id. `None` when Gravity reports 404.
    async fn artist(&self, id: &str, access_token: Option<&str>) -> Result<Option<Artist>>;

    async fn artists(&self, window: PageWindow, sort: Option<&str>) -> Result<LoadedPage<Artist>>;

    async fn artist_artworks(
        &self,
        artist_id: &str,
        window: PageWindow,
        sort: Option<&str>,
    ) -> Result<LoadedPage<Artwork>>;

    async fn partners(&self, window: PageWindow, sort: Option<&str>)
        -> Result<LoadedPage<Partner>>;

    /// Follow (or with `unfollow`, stop following) an artist as the user
    /// owning `access_token`.
    async fn follow_artist(
        &self,
        artist_id: &str,
        unfollow: bool,
        access_token: &str,
    ) -> Result<FollowArtist>;
}

// =============================================================================
// Page Loader Trait (one paginated upstream resource)
// =============================================================================

/// A single paginated resource with its filters already bound.
#[async_trait]
pub trait PageLoader<T>: Send + Sync {
    async fn load_page(&self, window: PageWindow) -> Result<LoadedPage<T>>;
}
