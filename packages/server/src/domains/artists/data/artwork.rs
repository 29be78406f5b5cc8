use chrono::{DateTime, Utc};
use gravity_client::Artwork;
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

/// Artwork GraphQL data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(name = "Artwork", description = "A published artwork")]
pub struct ArtworkData {
    /// Slug
    pub id: String,

    /// Gravity database id
    #[graphql(name = "internalID")]
    pub internal_id: String,

    pub title: Option<String>,
    pub date: Option<String>,
    pub medium: Option<String>,
    pub category: Option<String>,

    /// Display price, when the partner shares one
    pub price: Option<String>,

    pub is_for_sale: bool,
    pub is_sold: bool,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<Artwork> for ArtworkData {
    fn from(artwork: Artwork) -> Self {
        Self {
            id: artwork.id,
            internal_id: artwork.internal_id,
            title: artwork.title,
            date: artwork.date,
            medium: artwork.medium,
            category: artwork.category,
            price: artwork.price,
            is_for_sale: artwork.forsale,
            is_sold: artwork.sold,
            published_at: artwork.published_at,
        }
    }
}

crate::define_connection!(ArtworkConnection, ArtworkEdge, ArtworkData);
