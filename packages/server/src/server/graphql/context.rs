use std::sync::Arc;

use crate::kernel::ServerDeps;

/// GraphQL request context
///
/// Shared upstream dependencies plus the caller's Gravity access token,
/// passed through untouched from the `X-Access-Token` request header.
#[derive(Clone)]
pub struct GraphQLContext {
    pub server_deps: Arc<ServerDeps>,
    pub access_token: Option<String>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(server_deps: Arc<ServerDeps>, access_token: Option<String>) -> Self {
        Self {
            server_deps,
            access_token,
        }
    }

    /// Get server dependencies for calling actions
    pub fn deps(&self) -> &ServerDeps {
        &self.server_deps
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}
