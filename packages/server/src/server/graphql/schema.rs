//! GraphQL schema definition.

use super::context::GraphQLContext;
use super::errors::field_error;
use juniper::{EmptySubscription, FieldResult, RootNode};
use tracing::info;

use crate::common::pagination::ConnectionArgs;

// Domain actions
use crate::domains::artists::actions as artist_actions;
use crate::domains::me::actions as me_actions;
use crate::domains::partners::actions as partner_actions;

// Domain data types (GraphQL types)
use crate::domains::artists::data::{ArtistConnection, ArtistData, ArtistSorts};
use crate::domains::me::data::{FollowArtistInput, FollowArtistPayload, FollowArtistResponseOrError};
use crate::domains::partners::data::{PartnerConnection, PartnersSortType};

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Artist Queries
    // =========================================================================

    /// Find an artist by slug or id
    async fn artist(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ArtistData>> {
        let artist = artist_actions::get_artist(&id, ctx.access_token(), ctx.deps())
            .await
            .map_err(|e| field_error(e, "Failed to get artist"))?;

        Ok(artist.map(ArtistData::from))
    }

    /// All artists (Relay connection with page cursors)
    async fn artists_connection(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        page: Option<i32>,
        size: Option<i32>,
        sort: Option<ArtistSorts>,
    ) -> FieldResult<ArtistConnection> {
        let args = ConnectionArgs {
            first,
            after,
            last,
            before,
            page,
            size,
        };

        let payload = artist_actions::get_artists(&args, sort, ctx.deps())
            .await
            .map_err(|e| field_error(e, "Failed to get artists"))?;

        Ok(ArtistConnection::from(payload))
    }

    // =========================================================================
    // Partner Queries
    // =========================================================================

    /// All partners (Relay connection with page cursors)
    async fn partners_connection(
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        page: Option<i32>,
        size: Option<i32>,
        sort: Option<PartnersSortType>,
    ) -> FieldResult<PartnerConnection> {
        let args = ConnectionArgs {
            first,
            after,
            last,
            before,
            page,
            size,
        };

        let payload = partner_actions::get_partners(&args, sort, ctx.deps())
            .await
            .map_err(|e| field_error(e, "Failed to get partners"))?;

        Ok(PartnerConnection::from(payload))
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    /// Follow (or unfollow) an artist as the signed-in user
    async fn follow_artist(
        ctx: &GraphQLContext,
        input: FollowArtistInput,
    ) -> FieldResult<FollowArtistPayload> {
        let unfollow = input.unfollow.unwrap_or(false);
        info!(artist_id = %input.artist_id, unfollow, "followArtist mutation");

        let result =
            me_actions::follow_artist(&input.artist_id, unfollow, ctx.access_token(), ctx.deps())
                .await;
        let artist_or_error = FollowArtistResponseOrError::from_result(result)
            .map_err(|e| field_error(e, "Failed to follow artist"))?;

        Ok(FollowArtistPayload {
            client_mutation_id: input.client_mutation_id,
            artist_or_error,
        })
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
