use anyhow::Result;
use gravity_client::{FollowArtist, GravityError};
use juniper::{GraphQLInputObject, GraphQLObject, GraphQLUnion};

use crate::domains::artists::ArtistData;
use crate::domains::me::actions::FollowArtistError;
use crate::server::graphql::GraphQLContext;

/// Input for following or unfollowing an artist
#[derive(Debug, Clone, GraphQLInputObject)]
pub struct FollowArtistInput {
    #[graphql(name = "artistID")]
    pub artist_id: String,

    /// Stop following instead
    pub unfollow: Option<bool>,

    pub client_mutation_id: Option<String>,
}

/// An error reported by Gravity for a mutation
#[derive(Debug, Clone, PartialEq, GraphQLObject)]
pub struct GravityMutationError {
    pub message: String,
    pub status_code: Option<i32>,
}

impl GravityMutationError {
    fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status_code: status.map(i32::from),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct FollowArtistSuccess {
    pub artist: ArtistData,
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct FollowArtistFailure {
    pub mutation_error: GravityMutationError,
}

/// The followed artist, or why following failed
#[derive(Debug, Clone, GraphQLUnion)]
#[graphql(context = GraphQLContext)]
pub enum FollowArtistResponseOrError {
    Success(FollowArtistSuccess),
    Failure(FollowArtistFailure),
}

impl FollowArtistResponseOrError {
    /// Fold a follow result into the union.
    ///
    /// Rejections by Gravity (and a missing sign-in) become the failure arm;
    /// transport errors are returned as-is.
    pub fn from_result(result: Result<FollowArtist>) -> Result<Self> {
        let err = match result {
            Ok(follow) => {
                return Ok(Self::Success(FollowArtistSuccess {
                    artist: ArtistData::from(follow.artist),
                }))
            }
            Err(err) => err,
        };

        let mutation_error = if let Some(e) = err.downcast_ref::<FollowArtistError>() {
            GravityMutationError::new(e.to_string(), Some(401))
        } else {
            match err.downcast_ref::<GravityError>() {
                Some(gravity @ (GravityError::NotFound(_) | GravityError::Api { .. })) => {
                    GravityMutationError::new(gravity.message(), gravity.status())
                }
                _ => return Err(err),
            }
        };

        Ok(Self::Failure(FollowArtistFailure { mutation_error }))
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(context = GraphQLContext)]
pub struct FollowArtistPayload {
    pub client_mutation_id: Option<String>,
    pub artist_or_error: FollowArtistResponseOrError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::artist_fixture;

    fn failure(result: Result<FollowArtist>) -> GravityMutationError {
        match FollowArtistResponseOrError::from_result(result).unwrap() {
            FollowArtistResponseOrError::Failure(f) => f.mutation_error,
            FollowArtistResponseOrError::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_success_arm() {
        let result = Ok(FollowArtist {
            id: "follow-1".to_string(),
            artist: artist_fixture("banksy", "Banksy"),
        });

        match FollowArtistResponseOrError::from_result(result).unwrap() {
            FollowArtistResponseOrError::Success(s) => assert_eq!(s.artist.id, "banksy"),
            FollowArtistResponseOrError::Failure(_) => panic!("expected success"),
        }
    }

    #[test]
    fn test_gravity_rejection_is_failure_arm() {
        let err = failure(Err(GravityError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        }
        .into()));

        assert_eq!(err, GravityMutationError::new("Forbidden", Some(403)));
    }

    #[test]
    fn test_not_signed_in_is_failure_arm() {
        let err = failure(Err(FollowArtistError::NotSignedIn.into()));
        assert_eq!(err.status_code, Some(401));
    }

    #[test]
    fn test_other_errors_propagate() {
        let result = FollowArtistResponseOrError::from_result(Err(anyhow::anyhow!("boom")));
        assert!(result.is_err());
    }
}
