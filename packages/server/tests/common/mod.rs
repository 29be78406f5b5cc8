// Shared harness for the gateway integration tests.
//
// - `graphql`: `GraphQLClient` runs queries against the schema with a `MockGravity` behind it
// - `harness`: `TestHarness` drives the full axum router over HTTP
// - `fixtures`: pre-seeded `MockGravity` instances (artist artworks, partners)

#![allow(dead_code)]

pub mod fixtures;
pub mod graphql;
pub mod harness;

pub use fixtures::*;
pub use graphql::*;
pub use harness::*;

/// Build the variables of a GraphQL operation from `"name" => scalar` pairs.
///
/// ```ignore
/// client.query_with_vars(FOLLOW_MUTATION, vars!("artistID" => "banksy".to_string())).await;
/// ```
#[macro_export]
macro_rules! vars {
    ($($name:literal => $value:expr),* $(,)?) => {{
        let mut variables = juniper::Variables::new();
        $(
            variables.insert($name.to_string(), juniper::InputValue::scalar($value));
        )*
        variables
    }};
}
