//! Shopfront client
//!
//! A terminal client for a catalog backend: browse and search products,
//! open one for detail, and post free-text reviews. The feed is
//! unfiltered upstream, so every record is classified before display;
//! review submissions travel over a delimiter-based plain text wire
//! format (see `wire`).

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod render;
mod session;
mod wire;

#[cfg(test)]
mod test_utils;


use adapters::HttpCatalogApi;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the rendered views
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!("starting shopfront client against {}", config.api_base_url);

    let api = Arc::new(HttpCatalogApi::new(&config.api_base_url));
    session::run(api, &config).await
}
