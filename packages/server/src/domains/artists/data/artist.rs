use gravity_client::Artist;
use juniper::FieldResult;
use serde::{Deserialize, Serialize};

use super::{ArtworkConnection, ArtworkSorts};
use crate::common::pagination::ConnectionArgs;
use crate::domains::artists::actions;
use crate::server::graphql::{field_error, GraphQLContext};

/// Artist GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistData {
    pub id: String,
    pub internal_id: String,
    pub name: String,
    pub sortable_id: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub nationality: Option<String>,
    pub hometown: Option<String>,
    pub blurb: Option<String>,
    pub published_artworks_count: Option<i64>,
    pub forsale_artworks_count: Option<i64>,
    pub follow_count: Option<i64>,
}

impl From<Artist> for ArtistData {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            internal_id: artist.internal_id,
            name: artist.name,
            sortable_id: artist.sortable_id,
            birthday: artist.birthday,
            deathday: artist.deathday,
            nationality: artist.nationality,
            hometown: artist.hometown,
            blurb: artist.blurb,
            published_artworks_count: artist.published_artworks_count,
            forsale_artworks_count: artist.forsale_artworks_count,
            follow_count: artist.follow_count,
        }
    }
}

fn count(value: Option<i64>) -> Option<i32> {
    value.map(|n| i32::try_from(n).unwrap_or(i32::MAX))
}

#[juniper::graphql_object(
    context = GraphQLContext,
    name = "Artist",
    description = "An artist represented on Artsy"
)]
impl ArtistData {
    /// Slug
    fn id(&self) -> &str {
        &self.id
    }

    /// Gravity database id
    #[graphql(name = "internalID")]
    fn internal_id(&self) -> &str {
        &self.internal_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn sortable_id(&self) -> Option<&str> {
        self.sortable_id.as_deref()
    }

    fn birthday(&self) -> Option<&str> {
        self.birthday.as_deref()
    }

    fn deathday(&self) -> Option<&str> {
        self.deathday.as_deref()
    }

    fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    fn hometown(&self) -> Option<&str> {
        self.hometown.as_deref()
    }

    fn blurb(&self) -> Option<&str> {
        self.blurb.as_deref()
    }

    fn published_artworks_count(&self) -> Option<i32> {
        count(self.published_artworks_count)
    }

    fn forsale_artworks_count(&self) -> Option<i32> {
        count(self.forsale_artworks_count)
    }

    fn follow_count(&self) -> Option<i32> {
        count(self.follow_count)
    }

    /// Published artworks, newest first unless `sort` says otherwise
    async fn artworks_connection(
        &self,
        ctx: &GraphQLContext,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
        page: Option<i32>,
        size: Option<i32>,
        sort: Option<ArtworkSorts>,
    ) -> FieldResult<ArtworkConnection> {
        let args = ConnectionArgs {
            first,
            after,
            last,
            before,
            page,
            size,
        };

        let payload = actions::get_artist_artworks(&self.internal_id, &args, sort, ctx.deps())
            .await
            .map_err(|e| field_error(e, "Failed to get artist artworks"))?;

        Ok(ArtworkConnection::from(payload))
    }
}
