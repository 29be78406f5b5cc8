// Test doubles for the upstream API
//
// Provides in-memory implementations of BaseGravity and PageLoader that slice
// fixture lists the way Gravity does and record every window they are asked for.

use anyhow::Result;
use async_trait::async_trait;
use gravity_client::{Artist, Artwork, FollowArtist, GravityError, Partner};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{BaseGravity, LoadedPage, PageLoader};
use crate::common::pagination::PageWindow;

/// Slice `items` like Gravity would for `window`.
fn slice_page<T: Clone>(items: &[T], window: PageWindow) -> LoadedPage<T> {
    let start = window.offset.min(items.len());
    let end = window.offset.saturating_add(window.size).min(items.len());
    LoadedPage {
        items: items[start..end].to_vec(),
        total_count: items.len(),
    }
}

// =============================================================================
// Static Page Loader
// =============================================================================

/// A fixed list served page by page.
pub struct StaticPageLoader<T> {
    items: Vec<T>,
    windows: Arc<Mutex<Vec<PageWindow>>>,
}

impl<T> StaticPageLoader<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            windows: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Windows requested so far, in call order
    pub fn windows(&self) -> Vec<PageWindow> {
        self.windows.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> PageLoader<T> for StaticPageLoader<T> {
    async fn load_page(&self, window: PageWindow) -> Result<LoadedPage<T>> {
        self.windows.lock().unwrap().push(window);
        Ok(slice_page(&self.items, window))
    }
}

// =============================================================================
// Mock Gravity
// =============================================================================

/// Arguments captured from a list call
#[derive(Debug, Clone, PartialEq)]
pub struct PageCall {
    pub resource: String,
    pub window: PageWindow,
    pub sort: Option<String>,
}

/// Arguments captured from a follow call
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCall {
    pub artist_id: String,
    pub unfollow: bool,
    pub access_token: String,
}

#[derive(Default)]
pub struct MockGravity {
    artists: Mutex<Vec<Artist>>,
    artworks: Mutex<HashMap<String, Vec<Artwork>>>,
    partners: Mutex<Vec<Partner>>,
    follow_error: Mutex<Option<(u16, String)>>,
    page_calls: Arc<Mutex<Vec<PageCall>>>,
    follow_calls: Arc<Mutex<Vec<FollowCall>>>,
}

impl MockGravity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artist(self, artist: Artist) -> Self {
        self.artists.lock().unwrap().push(artist);
        self
    }

    pub fn with_artworks(self, artist_id: &str, artworks: Vec<Artwork>) -> Self {
        self.artworks
            .lock()
            .unwrap()
            .insert(artist_id.to_string(), artworks);
        self
    }

    pub fn with_partners(self, partners: Vec<Partner>) -> Self {
        self.partners.lock().unwrap().extend(partners);
        self
    }

    /// Make follow calls fail with the given Gravity status and message
    pub fn with_follow_error(self, status: u16, message: &str) -> Self {
        *self.follow_error.lock().unwrap() = Some((status, message.to_string()));
        self
    }

    pub fn page_calls(&self) -> Vec<PageCall> {
        self.page_calls.lock().unwrap().clone()
    }

    pub fn follow_calls(&self) -> Vec<FollowCall> {
        self.follow_calls.lock().unwrap().clone()
    }

    fn record(&self, resource: &str, window: PageWindow, sort: Option<&str>) {
        self.page_calls.lock().unwrap().push(PageCall {
            resource: resource.to_string(),
            window,
            sort: sort.map(String::from),
        });
    }

    fn find_artist(&self, id: &str) -> Option<Artist> {
        self.artists
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id || a.internal_id == id)
            .cloned()
    }
}

#[async_trait]
impl BaseGravity for MockGravity {
    async fn artist(&self, id: &str, _access_token: Option<&str>) -> Result<Option<Artist>> {
        Ok(self.find_artist(id))
    }

    async fn artists(&self, window: PageWindow, sort: Option<&str>) -> Result<LoadedPage<Artist>> {
        self.record("artists", window, sort);
        Ok(slice_page(&self.artists.lock().unwrap(), window))
    }

    async fn artist_artworks(
        &self,
        artist_id: &str,
        window: PageWindow,
        sort: Option<&str>,
    ) -> Result<LoadedPage<Artwork>> {
        self.record(&format!("artist/{}/artworks", artist_id), window, sort);
        let artworks = self.artworks.lock().unwrap();
        let items = artworks.get(artist_id).map(Vec::as_slice).unwrap_or(&[]);
        Ok(slice_page(items, window))
    }

    async fn partners(
        &self,
        window: PageWindow,
        sort: Option<&str>,
    ) -> Result<LoadedPage<Partner>> {
        self.record("partners", window, sort);
        Ok(slice_page(&self.partners.lock().unwrap(), window))
    }

    async fn follow_artist(
        &self,
        artist_id: &str,
        unfollow: bool,
        access_token: &str,
    ) -> Result<FollowArtist> {
        self.follow_calls.lock().unwrap().push(FollowCall {
            artist_id: artist_id.to_string(),
            unfollow,
            access_token: access_token.to_string(),
        });

        if let Some((status, message)) = self.follow_error.lock().unwrap().clone() {
            return Err(GravityError::Api { status, message }.into());
        }

        let artist = self
            .find_artist(artist_id)
            .ok_or_else(|| GravityError::NotFound("Artist Not Found".to_string()))?;
        Ok(FollowArtist {
            id: format!("follow-{}", artist.internal_id),
            artist,
        })
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn artist_fixture(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        internal_id: format!("{}-internal", id),
        name: name.to_string(),
        sortable_id: Some(id.to_string()),
        birthday: None,
        deathday: None,
        nationality: None,
        hometown: None,
        blurb: None,
        published_artworks_count: None,
        forsale_artworks_count: None,
        follow_count: None,
    }
}

pub fn artwork_fixture(id: &str, title: &str) -> Artwork {
    Artwork {
        id: id.to_string(),
        internal_id: format!("{}-internal", id),
        title: Some(title.to_string()),
        date: None,
        medium: None,
        category: None,
        price: None,
        forsale: false,
        sold: false,
        published_at: None,
    }
}

pub fn partner_fixture(id: &str, name: &str) -> Partner {
    Partner {
        id: id.to_string(),
        internal_id: format!("{}-internal", id),
        name: name.to_string(),
        partner_type: Some("Gallery".to_string()),
        region: None,
        website: None,
        sortable_id: Some(id.to_string()),
    }
}

/// `n` numbered artworks for `artist_id`
pub fn artworks_fixture(artist_id: &str, n: usize) -> Vec<Artwork> {
    (0..n)
        .map(|i| artwork_fixture(&format!("{}-work-{}", artist_id, i), &format!("Work {}", i)))
        .collect()
}
