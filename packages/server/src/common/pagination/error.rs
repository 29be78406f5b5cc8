use juniper::{FieldError, IntoFieldError, Object, Value};
use thiserror::Error;

/// Errors raised while translating connection arguments.
///
/// Both variants are caller mistakes and are reported as GraphQL field
/// errors; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// `after`/`before` is not a cursor this server could have issued
    #[error("Invalid cursor {cursor:?}: {reason}")]
    InvalidCursor { cursor: String, reason: &'static str },

    /// Conflicting or out-of-range `first`/`last`/`size` arguments
    #[error("Invalid connection arguments: {0}")]
    InvalidArguments(String),
}

impl PaginationError {
    pub(crate) fn invalid_cursor(cursor: &str, reason: &'static str) -> Self {
        PaginationError::InvalidCursor {
            cursor: cursor.to_string(),
            reason,
        }
    }

    /// Machine readable code exposed under `extensions.code`.
    pub fn code(&self) -> &'static str {
        match self {
            PaginationError::InvalidCursor { .. } => "INVALID_CURSOR",
            PaginationError::InvalidArguments(_) => "INVALID_ARGUMENTS",
        }
    }
}

/// A field error carrying `code` under its extensions.
pub fn coded_field_error(message: impl Into<String>, code: &str) -> FieldError {
    let mut extensions = Object::with_capacity(1);
    extensions.add_field("code", Value::scalar(code.to_string()));
    FieldError::new(message.into(), Value::Object(extensions))
}

impl IntoFieldError for PaginationError {
    fn into_field_error(self) -> FieldError {
        coded_field_error(self.to_string(), self.code())
    }
}
