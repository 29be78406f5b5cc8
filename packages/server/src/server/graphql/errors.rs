//! Mapping of action errors onto GraphQL field errors.

use gravity_client::GravityError;
use juniper::{FieldError, IntoFieldError};
use tracing::error;

use crate::common::pagination::{coded_field_error, PaginationError};

/// Convert an action error into a field error with an `extensions.code`.
///
/// Argument problems surface as-is; upstream failures are logged and keep
/// Gravity's status in the code.
pub fn field_error(err: anyhow::Error, context: &str) -> FieldError {
    if let Some(pagination) = err.downcast_ref::<PaginationError>() {
        return pagination.clone().into_field_error();
    }

    error!(error = %err, "{}", context);

    match err.downcast_ref::<GravityError>() {
        Some(GravityError::NotFound(message)) => {
            coded_field_error(message.clone(), "NOT_FOUND")
        }
        Some(gravity) => coded_field_error(gravity.message(), "UPSTREAM_ERROR"),
        None => coded_field_error(format!("{}: {}", context, err), "INTERNAL_SERVER_ERROR"),
    }
}
