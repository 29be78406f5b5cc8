use axum::{extract::Request, middleware::Next, response::Response};

/// Header carrying the caller's Gravity user token
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Extension key for storing the caller's access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken(pub String);

/// Middleware to lift `X-Access-Token` into request extensions
///
/// Blank or non-ASCII header values are treated as absent.
pub async fn extract_access_token(mut request: Request, next: Next) -> Response {
    let token = request
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from);

    if let Some(token) = token {
        request.extensions_mut().insert(AccessToken(token));
    }

    next.run(request).await
}
