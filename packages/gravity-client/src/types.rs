use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist record from `GET /artist/:id` and `GET /artists`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// URL slug, e.g. `andy-warhol`
    pub id: String,
    #[serde(rename = "_id")]
    pub internal_id: String,
    pub name: String,
    #[serde(default)]
    pub sortable_id: Option<String>,
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub hometown: Option<String>,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub published_artworks_count: Option<i64>,
    #[serde(default)]
    pub forsale_artworks_count: Option<i64>,
    #[serde(default)]
    pub follow_count: Option<i64>,
}

/// An artwork record from `GET /artist/:id/artworks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: String,
    #[serde(rename = "_id")]
    pub internal_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub forsale: bool,
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// A partner (gallery, institution, auction house) from `GET /partners`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    #[serde(rename = "_id")]
    pub internal_id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub partner_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub sortable_id: Option<String>,
}

/// A follow record returned by `POST /me/follow/artist` and
/// `DELETE /me/follow/artist/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowArtist {
    pub id: String,
    pub artist: Artist,
}

/// Upstream page addressing for list endpoints.
///
/// Gravity paginates with `page`/`size`; `offset` is sent only when the
/// requested slice does not start on a page boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: usize,
    pub size: usize,
    pub offset: usize,
}

impl PageQuery {
    pub fn new(page: usize, size: usize, offset: usize) -> Self {
        Self { page, size, offset }
    }

    /// Query pairs for this page, always asking for `X-Total-Count`.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("total_count", "true".to_string()),
        ];
        let aligned = self.page.saturating_sub(1).saturating_mul(self.size);
        if self.offset != aligned {
            params.push(("offset", self.offset.to_string()));
        }
        params
    }
}

/// One page of a list endpoint plus the out-of-band total count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub body: Vec<T>,
    pub total_count: usize,
}

/// Error payload shape used by Gravity, e.g.
/// `{"type":"error","message":"Artist Not Found"}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
