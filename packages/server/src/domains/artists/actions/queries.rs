//! Artist query actions
//!
//! Query actions return data directly. Pagination arguments are validated
//! here, before anything is requested from Gravity.

use anyhow::Result;
use gravity_client::{Artist, Artwork};
use tracing::info;

use crate::common::pagination::{ConnectionArgs, ConnectionPayload};
use crate::domains::artists::data::{ArtistSorts, ArtworkSorts};
use crate::domains::artists::loader::{ArtistArtworksLoader, ArtistsLoader};
use crate::kernel::{fetch_connection, ServerDeps};

/// Get a single artist by slug or id
pub async fn get_artist(
    id: &str,
    access_token: Option<&str>,
    deps: &ServerDeps,
) -> Result<Option<Artist>> {
    info!(artist_id = %id, "Getting artist");

    deps.gravity.artist(id, access_token).await
}

/// Get a page of all artists (Relay connection)
pub async fn get_artists(
    args: &ConnectionArgs,
    sort: Option<ArtistSorts>,
    deps: &ServerDeps,
) -> Result<ConnectionPayload<Artist>> {
    info!(sort = ?sort, "Getting artists connection");

    let loader = ArtistsLoader::new(deps.gravity.clone(), sort.map(ArtistSorts::as_gravity));
    fetch_connection(&loader, args, &deps.paging).await
}

/// Get a page of one artist's published artworks (Relay connection)
pub async fn get_artist_artworks(
    artist_id: &str,
    args: &ConnectionArgs,
    sort: Option<ArtworkSorts>,
    deps: &ServerDeps,
) -> Result<ConnectionPayload<Artwork>> {
    info!(artist_id = %artist_id, sort = ?sort, "Getting artist artworks connection");

    let sort = sort.unwrap_or(ArtworkSorts::PublishedAtDesc);
    let loader = ArtistArtworksLoader::new(deps.gravity.clone(), artist_id, Some(sort.as_gravity()));
    fetch_connection(&loader, args, &deps.paging).await
}
