//! Me domain actions - mutations performed as the signed-in user

mod follow_artist;

pub use follow_artist::{follow_artist, FollowArtistError};
