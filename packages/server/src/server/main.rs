// Main entry point for the GraphQL gateway

use std::sync::Arc;

use anyhow::{Context, Result};
use gravity_client::{GravityClient, GravityOptions};
use server_core::kernel::{GravityAdapter, ServerDeps};
use server_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,gravity_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gravity GraphQL gateway");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        gravity_api_base = %config.gravity_api_base,
        default_page_size = config.default_page_size,
        max_page_size = config.max_page_size,
        "Configuration loaded"
    );

    let gravity = GravityClient::new(GravityOptions {
        base_url: config.gravity_api_base.clone(),
        xapp_token: config.gravity_xapp_token.clone(),
    });
    let server_deps = ServerDeps::new(
        Arc::new(GravityAdapter::new(Arc::new(gravity))),
        config.paging_limits(),
    );

    // Build application
    let app = build_app(server_deps, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
