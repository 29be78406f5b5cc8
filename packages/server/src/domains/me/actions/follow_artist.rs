use anyhow::Result;
use gravity_client::FollowArtist;
use thiserror::Error;
use tracing::info;

use crate::kernel::ServerDeps;

#[derive(Debug, Error)]
pub enum FollowArtistError {
    #[error("You need to be signed in to perform this action")]
    NotSignedIn,
}

/// Follow or unfollow an artist on behalf of the signed-in user
///
/// The caller's access token is forwarded to Gravity unchanged.
pub async fn follow_artist(
    artist_id: &str,
    unfollow: bool,
    access_token: Option<&str>,
    deps: &ServerDeps,
) -> Result<FollowArtist> {
    let access_token = access_token.ok_or(FollowArtistError::NotSignedIn)?;

    info!(artist_id = %artist_id, unfollow, "Following artist");

    deps.gravity
        .follow_artist(artist_id, unfollow, access_token)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pagination::PagingLimits;
    use crate::kernel::test_dependencies::{artist_fixture, FollowCall};
    use crate::kernel::MockGravity;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_follow_forwards_access_token() {
        let gravity = Arc::new(MockGravity::new().with_artist(artist_fixture("banksy", "Banksy")));
        let deps = ServerDeps::new(gravity.clone(), PagingLimits::default());

        let follow = follow_artist("banksy", true, Some("secret"), &deps)
            .await
            .unwrap();

        assert_eq!(follow.artist.name, "Banksy");
        assert_eq!(
            gravity.follow_calls(),
            vec![FollowCall {
                artist_id: "banksy".to_string(),
                unfollow: true,
                access_token: "secret".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_follow_requires_access_token() {
        let gravity = Arc::new(MockGravity::new());
        let deps = ServerDeps::new(gravity.clone(), PagingLimits::default());

        let err = follow_artist("banksy", false, None, &deps)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<FollowArtistError>().is_some());
        assert!(gravity.follow_calls().is_empty());
    }
}
