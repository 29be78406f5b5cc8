//! Artist domain actions

mod queries;

pub use queries::{get_artist, get_artist_artworks, get_artists};
