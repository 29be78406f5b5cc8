use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::common::pagination::{PagingLimits, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub gravity_api_base: String,
    pub gravity_xapp_token: String,
    pub port: u16,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            gravity_api_base: env::var("GRAVITY_API_BASE")
                .context("GRAVITY_API_BASE must be set")?,
            gravity_xapp_token: env::var("GRAVITY_XAPP_TOKEN")
                .context("GRAVITY_XAPP_TOKEN must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .context("DEFAULT_PAGE_SIZE must be a non-negative number")?,
            max_page_size: env::var("MAX_PAGE_SIZE")
                .unwrap_or_else(|_| MAX_PAGE_SIZE.to_string())
                .parse()
                .context("MAX_PAGE_SIZE must be a non-negative number")?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        })
    }

    /// Page size bounds handed to every connection resolver
    pub fn paging_limits(&self) -> PagingLimits {
        PagingLimits::new(self.default_page_size, self.max_page_size)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
