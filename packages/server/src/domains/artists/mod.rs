//! Artists domain - artists and their published artworks

pub mod actions;
pub mod data;
pub mod loader;

// Re-export commonly used types
pub use data::{ArtistConnection, ArtistData, ArtworkConnection, ArtworkData};
pub use loader::{ArtistArtworksLoader, ArtistsLoader};
