// GraphQL schema and context
pub mod connection;
pub mod context;
pub mod errors;
pub mod schema;

pub use context::*;
pub use errors::field_error;
pub use schema::*;
