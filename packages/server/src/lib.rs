// Gravity GraphQL Gateway - API Core
//
// Exposes the Gravity REST API as a Relay-compliant GraphQL graph.
// Connection fields share the cursor pagination core in common::pagination.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
