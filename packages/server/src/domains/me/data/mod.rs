pub mod follow_artist;

pub use follow_artist::{
    FollowArtistFailure, FollowArtistInput, FollowArtistPayload, FollowArtistResponseOrError,
    FollowArtistSuccess, GravityMutationError,
};
