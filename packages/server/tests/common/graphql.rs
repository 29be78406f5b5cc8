//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use juniper::{ScalarValue, Variables};
use serde_json::Value;
use server_core::common::pagination::PagingLimits;
use server_core::kernel::{MockGravity, ServerDeps};
use server_core::server::graphql::{create_schema, GraphQLContext, Schema};
use std::sync::Arc;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// One error from a GraphQL execution.
#[derive(Debug, Clone)]
pub struct GraphQLErrorInfo {
    pub message: String,
    /// `extensions.code`, when the resolver set one
    pub code: Option<String>,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<GraphQLErrorInfo>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Code of the first error.
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.code.as_deref())
    }

    /// Gets a value at the given JSON path.
    ///
    /// # Example
    /// ```ignore
    /// let name = result.get("artist.name").as_str();
    /// ```
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl GraphQLClient {
    /// Creates a new GraphQL client over the given Gravity double.
    pub fn new(gravity: Arc<MockGravity>) -> Self {
        Self::with_access_token(gravity, None)
    }

    /// Creates a new GraphQL client acting as a signed-in user.
    pub fn with_access_token(gravity: Arc<MockGravity>, access_token: Option<&str>) -> Self {
        let server_deps = Arc::new(ServerDeps::new(gravity, PagingLimits::default()));
        let context = GraphQLContext::new(server_deps, access_token.map(String::from));
        Self::with_context(context)
    }

    /// Creates a new GraphQL client with a custom context.
    pub fn with_context(context: GraphQLContext) -> Self {
        Self {
            schema: create_schema(),
            context,
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        // Convert juniper::Value to serde_json::Value
        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let errors = errors
            .iter()
            .map(|e| GraphQLErrorInfo {
                message: e.error().message().to_string(),
                code: e
                    .error()
                    .extensions()
                    .as_object_value()
                    .and_then(|o| o.get_field_value("code"))
                    .and_then(|v| v.as_scalar())
                    .and_then(|s| s.as_str())
                    .map(String::from),
            })
            .collect();

        GraphQLResult { data, errors }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}
