//! Error types for the Gravity client.

use thiserror::Error;

/// Result type for Gravity client operations.
pub type Result<T> = std::result::Result<T, GravityError>;

/// Gravity client errors.
#[derive(Debug, Error)]
pub enum GravityError {
    /// Transport failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gravity answered 404 for the requested path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response
    #[error("Gravity API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl GravityError {
    /// HTTP status reported by Gravity, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            GravityError::Http(e) => e.status().map(|s| s.as_u16()),
            GravityError::NotFound(_) => Some(404),
            GravityError::Api { status, .. } => Some(*status),
        }
    }

    /// Human readable message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            GravityError::Http(e) => e.to_string(),
            GravityError::NotFound(message) => message.clone(),
            GravityError::Api { message, .. } => message.clone(),
        }
    }
}
