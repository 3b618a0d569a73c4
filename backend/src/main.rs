//! Backend entry-point: reads settings, prepares storage and upstream
//! clients, then serves the REST API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use song_explorer::config::{AppSettings, BuildMode};
use song_explorer::inbound::http::health::HealthState;
use song_explorer::outbound::genius::GeniusHttpLyrics;
use song_explorer::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use song_explorer::outbound::spotify::{SpotifyEndpoints, SpotifyHttpCatalog};

use server::{ServerConfig, UpstreamAdapters, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let database_url = settings.database_url.clone();
    actix_web::rt::task::spawn_blocking(move || run_pending_migrations(database_url.as_str()))
        .await
        .map_err(io::Error::other)?
        .map_err(io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(settings.database_url.as_str()))
        .await
        .map_err(io::Error::other)?;

    let upstream = build_upstream(&settings)?;

    info!(bind_addr = %settings.bind_addr, "starting server");
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.session, settings.bind_addr)
        .with_db_pool(pool)
        .with_upstream(upstream);
    create_server(health_state, config)?.await
}

fn build_upstream(settings: &AppSettings) -> io::Result<UpstreamAdapters> {
    let endpoints = SpotifyEndpoints::production().map_err(io::Error::other)?;
    let catalog = SpotifyHttpCatalog::new(&settings.spotify, endpoints, settings.upstream_timeout)
        .map_err(io::Error::other)?;
    let genius_base = GeniusHttpLyrics::production_base().map_err(io::Error::other)?;
    let lyrics = GeniusHttpLyrics::new(&settings.genius, genius_base, settings.upstream_timeout)
        .map_err(io::Error::other)?;
    Ok(UpstreamAdapters {
        catalog: Arc::new(catalog),
        lyrics: Arc::new(lyrics),
    })
}
