//! Territory lookup server.
//!
//! Geocodes an address through Google Maps and reports which service
//! territory the resulting point falls in.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use territory_lookup::api::{router, AppState};
use territory_lookup::config::{api_key_from_env, Config, API_KEY_ENV};
use territory_lookup::geocode::GoogleGeocoder;
use territory_lookup::pip::{TerritoryResolver, TerritoryStore};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Address to service territory lookup server")]
struct Args {
    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Territory table JSON (defaults to the built-in table)
    #[arg(long)]
    territories: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("territory_lookup=debug,tower_http=info,info")),
        )
        .init();

    let args = Args::parse();

    info!("Territory Lookup Server");

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let store = match args.territories.as_ref().or(config.territories.path.as_ref()) {
        Some(path) => TerritoryStore::from_path(path).context("Failed to load territories")?,
        None => TerritoryStore::load(),
    };
    let resolver = TerritoryResolver::new(Arc::new(store));

    let geocoder = match api_key_from_env() {
        Some(key) => Some(
            GoogleGeocoder::new(&key, &config.geocoder.base_url, config.geocoder.timeout())
                .context("Failed to create geocoder")?,
        ),
        None => {
            warn!("{} is not set; lookups will fail until it is", API_KEY_ENV);
            None
        }
    };

    let state = Arc::new(AppState { resolver, geocoder });
    let app = router(state);

    let listen = args.listen.unwrap_or(config.server.listen);
    info!("Starting server on {}", listen);

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
