//! Pure Gravity REST API client.
//!
//! A minimal client for the Gravity API. List endpoints return a [`Page`]
//! carrying the decoded body and the total count Gravity reports in the
//! `X-Total-Count` response header.
//!
//! # Example
//!
//! ```rust,ignore
//! use gravity_client::{GravityClient, GravityOptions, PageQuery};
//!
//! let client = GravityClient::new(GravityOptions {
//!     base_url: "https://api.artsy.net/api/v1".into(),
//!     xapp_token: "xapp-token".into(),
//! });
//!
//! let page = client.artist_artworks("andy-warhol", PageQuery::new(1, 10, 0), None, None).await?;
//! println!("{} of {}", page.body.len(), page.total_count);
//! ```

pub mod error;
pub mod types;

pub use error::{GravityError, Result};
pub use types::{Artist, Artwork, FollowArtist, Page, PageQuery, Partner};

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use types::ErrorBody;

/// Header carrying the size of the full result set.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

const XAPP_TOKEN_HEADER: &str = "X-XAPP-TOKEN";
const ACCESS_TOKEN_HEADER: &str = "X-ACCESS-TOKEN";

/// Parse the `X-Total-Count` header value.
///
/// Base-10; anything absent or unparsable counts as 0.
pub fn parse_total_count(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

/// Connection settings for [`GravityClient`].
#[derive(Debug, Clone)]
pub struct GravityOptions {
    /// API root, e.g. `https://api.artsy.net/api/v1`
    pub base_url: String,
    /// Application token sent on every request
    pub xapp_token: String,
}

#[derive(Debug, Clone)]
pub struct GravityClient {
    client: reqwest::Client,
    base_url: String,
    xapp_token: String,
}

impl GravityClient {
    pub fn new(options: GravityOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: options.base_url.trim_end_matches('/').to_string(),
            xapp_token: options.xapp_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(XAPP_TOKEN_HEADER, &self.xapp_token);
        match access_token {
            Some(token) => builder.header(ACCESS_TOKEN_HEADER, token),
            None => builder,
        }
    }

    /// Turn non-2xx responses into [`GravityError`], keeping Gravity's message.
    async fn check(path: &str, resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or(body);

        tracing::debug!(path, status = status.as_u16(), %message, "Gravity request failed");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GravityError::NotFound(message));
        }
        Err(GravityError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// `GET` a single JSON document.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        access_token: Option<&str>,
    ) -> Result<T> {
        let resp = self
            .request(Method::GET, path, access_token)
            .query(query)
            .send()
            .await?;
        let resp = Self::check(path, resp).await?;
        Ok(resp.json().await?)
    }

    /// `GET` a list endpoint and read its total count header.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: PageQuery,
        filters: &[(&str, String)],
        access_token: Option<&str>,
    ) -> Result<Page<T>> {
        let mut query = page.to_params();
        query.extend(filters.iter().map(|(k, v)| (*k, v.clone())));

        let resp = self
            .request(Method::GET, path, access_token)
            .query(&query)
            .send()
            .await?;
        let resp = Self::check(path, resp).await?;

        let total_count = parse_total_count(
            resp.headers()
                .get(TOTAL_COUNT_HEADER)
                .and_then(|v| v.to_str().ok()),
        );
        let body: Vec<T> = resp.json().await?;

        tracing::debug!(
            path,
            page = page.page,
            size = page.size,
            returned = body.len(),
            total_count,
            "Fetched Gravity page"
        );

        Ok(Page { body, total_count })
    }

    /// `POST` a form and decode the JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, String)],
        access_token: Option<&str>,
    ) -> Result<T> {
        let resp = self
            .request(Method::POST, path, access_token)
            .form(form)
            .send()
            .await?;
        let resp = Self::check(path, resp).await?;
        Ok(resp.json().await?)
    }

    /// `DELETE` a resource and decode the JSON response.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        access_token: Option<&str>,
    ) -> Result<T> {
        let resp = self
            .request(Method::DELETE, path, access_token)
            .send()
            .await?;
        let resp = Self::check(path, resp).await?;
        Ok(resp.json().await?)
    }

    pub async fn artist(&self, id: &str, access_token: Option<&str>) -> Result<Artist> {
        self.get(&format!("artist/{}", id), &[], access_token).await
    }

    pub async fn artists(
        &self,
        page: PageQuery,
        sort: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Page<Artist>> {
        let filters = sort_filter(sort);
        self.get_page("artists", page, &filters, access_token).await
    }

    pub async fn artist_artworks(
        &self,
        artist_id: &str,
        page: PageQuery,
        sort: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Page<Artwork>> {
        let mut filters = sort_filter(sort);
        filters.push(("published", "true".to_string()));
        self.get_page(
            &format!("artist/{}/artworks", artist_id),
            page,
            &filters,
            access_token,
        )
        .await
    }

    pub async fn partners(
        &self,
        page: PageQuery,
        sort: Option<&str>,
        access_token: Option<&str>,
    ) -> Result<Page<Partner>> {
        let filters = sort_filter(sort);
        self.get_page("partners", page, &filters, access_token).await
    }

    /// Follow an artist on behalf of the user owning `access_token`.
    pub async fn follow_artist(&self, artist_id: &str, access_token: &str) -> Result<FollowArtist> {
        tracing::info!(artist_id, "Following artist");
        self.post(
            "me/follow/artist",
            &[("artist_id", artist_id.to_string())],
            Some(access_token),
        )
        .await
    }

    /// Remove a follow created by [`GravityClient::follow_artist`].
    pub async fn unfollow_artist(&self, artist_id: &str, access_token: &str) -> Result<FollowArtist> {
        tracing::info!(artist_id, "Unfollowing artist");
        self.delete(&format!("me/follow/artist/{}", artist_id), Some(access_token))
            .await
    }
}

fn sort_filter(sort: Option<&str>) -> Vec<(&'static str, String)> {
    sort.map(|s| vec![("sort", s.to_string())]).unwrap_or_default()
}
