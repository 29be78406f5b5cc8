//! Me domain - actions taken as the signed-in user

pub mod actions;
pub mod data;

pub use data::{FollowArtistInput, FollowArtistPayload};
