//! Integration tests for the followArtist mutation

mod common;

use crate::common::GraphQLClient;
use server_core::kernel::test_dependencies::artist_fixture;
use server_core::kernel::MockGravity;
use std::sync::Arc;

const FOLLOW_MUTATION: &str = r#"
    mutation Follow($artistID: String!, $unfollow: Boolean) {
        followArtist(input: { artistID: $artistID, unfollow: $unfollow, clientMutationId: "abc" }) {
            clientMutationId
            artistOrError {
                __typename
                ... on FollowArtistSuccess { artist { id name } }
                ... on FollowArtistFailure { mutationError { message statusCode } }
            }
        }
    }
"#;

fn gravity() -> Arc<MockGravity> {
    Arc::new(MockGravity::new().with_artist(artist_fixture("banksy", "Banksy")))
}

#[tokio::test]
async fn follow_artist_as_signed_in_user() {
    let gravity = gravity();
    let client = GraphQLClient::with_access_token(gravity.clone(), Some("user-token"));

    let data = client
        .query_with_vars(FOLLOW_MUTATION, vars!("artistID" => "banksy".to_string()))
        .await;
    let payload = &data["followArtist"];

    assert_eq!(payload["clientMutationId"], "abc");
    assert_eq!(payload["artistOrError"]["__typename"], "FollowArtistSuccess");
    assert_eq!(payload["artistOrError"]["artist"]["name"], "Banksy");

    let calls = gravity.follow_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].access_token, "user-token");
    assert!(!calls[0].unfollow);
}

#[tokio::test]
async fn unfollow_artist() {
    let gravity = gravity();
    let client = GraphQLClient::with_access_token(gravity.clone(), Some("user-token"));

    client
        .query_with_vars(
            FOLLOW_MUTATION,
            vars!("artistID" => "banksy".to_string(), "unfollow" => true),
        )
        .await;

    assert!(gravity.follow_calls()[0].unfollow);
}

#[tokio::test]
async fn follow_without_access_token_fails() {
    let gravity = gravity();
    let client = GraphQLClient::new(gravity.clone());

    let data = client
        .query_with_vars(FOLLOW_MUTATION, vars!("artistID" => "banksy".to_string()))
        .await;
    let outcome = &data["followArtist"]["artistOrError"];

    assert_eq!(outcome["__typename"], "FollowArtistFailure");
    assert_eq!(outcome["mutationError"]["statusCode"], 401);
    assert!(gravity.follow_calls().is_empty());
}

#[tokio::test]
async fn gravity_rejection_becomes_failure() {
    let gravity = Arc::new(
        MockGravity::new()
            .with_artist(artist_fixture("banksy", "Banksy"))
            .with_follow_error(403, "Forbidden"),
    );
    let client = GraphQLClient::with_access_token(gravity, Some("user-token"));

    let data = client
        .query_with_vars(FOLLOW_MUTATION, vars!("artistID" => "banksy".to_string()))
        .await;
    let outcome = &data["followArtist"]["artistOrError"];

    assert_eq!(outcome["__typename"], "FollowArtistFailure");
    assert_eq!(outcome["mutationError"]["message"], "Forbidden");
    assert_eq!(outcome["mutationError"]["statusCode"], 403);
}

#[tokio::test]
async fn unknown_artist_becomes_not_found_failure() {
    let client = GraphQLClient::with_access_token(gravity(), Some("user-token"));

    let data = client
        .query_with_vars(FOLLOW_MUTATION, vars!("artistID" => "nobody".to_string()))
        .await;

    assert_eq!(
        data["followArtist"]["artistOrError"]["mutationError"]["statusCode"],
        404
    );
}
