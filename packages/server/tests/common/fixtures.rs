//! Gravity fixtures shared across integration tests.

use server_core::kernel::test_dependencies::{artist_fixture, artworks_fixture, partner_fixture};
use server_core::kernel::MockGravity;

/// Slug of the artist every fixture set is built around
pub const ARTIST_ID: &str = "banksy";

/// Gravity database id of [`ARTIST_ID`]
pub const ARTIST_INTERNAL_ID: &str = "banksy-internal";

/// Gravity with one artist owning `artworks` published artworks
pub fn gravity_with_artworks(artworks: usize) -> MockGravity {
    MockGravity::new()
        .with_artist(artist_fixture(ARTIST_ID, "Banksy"))
        .with_artworks(ARTIST_INTERNAL_ID, artworks_fixture(ARTIST_ID, artworks))
}

/// Gravity with `n` partners named `Gallery 0..n`
pub fn gravity_with_partners(n: usize) -> MockGravity {
    MockGravity::new().with_partners(
        (0..n)
            .map(|i| partner_fixture(&format!("gallery-{}", i), &format!("Gallery {}", i)))
            .collect(),
    )
}
