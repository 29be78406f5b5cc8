//! Page loaders binding artist list endpoints to their filters.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use gravity_client::{Artist, Artwork};

use crate::common::pagination::PageWindow;
use crate::kernel::{BaseGravity, LoadedPage, PageLoader};

/// All artists, in `sort` order
pub struct ArtistsLoader {
    gravity: Arc<dyn BaseGravity>,
    sort: Option<&'static str>,
}

impl ArtistsLoader {
    pub fn new(gravity: Arc<dyn BaseGravity>, sort: Option<&'static str>) -> Self {
        Self { gravity, sort }
    }
}

#[async_trait]
impl PageLoader<Artist> for ArtistsLoader {
    async fn load_page(&self, window: PageWindow) -> Result<LoadedPage<Artist>> {
        self.gravity.artists(window, self.sort).await
    }
}

/// Published artworks of one artist
pub struct ArtistArtworksLoader {
    gravity: Arc<dyn BaseGravity>,
    artist_id: String,
    sort: Option<&'static str>,
}

impl ArtistArtworksLoader {
    pub fn new(
        gravity: Arc<dyn BaseGravity>,
        artist_id: impl Into<String>,
        sort: Option<&'static str>,
    ) -> Self {
        Self {
            gravity,
            artist_id: artist_id.into(),
            sort,
        }
    }
}

#[async_trait]
impl PageLoader<Artwork> for ArtistArtworksLoader {
    async fn load_page(&self, window: PageWindow) -> Result<LoadedPage<Artwork>> {
        self.gravity
            .artist_artworks(&self.artist_id, window, self.sort)
            .await
    }
}
