//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use song_explorer::config::SessionSettings;
use song_explorer::outbound::genius::GeniusHttpLyrics;
use song_explorer::outbound::persistence::DbPool;
use song_explorer::outbound::spotify::SpotifyHttpCatalog;

/// Clients for the two third-party APIs.
pub struct UpstreamAdapters {
    pub catalog: Arc<SpotifyHttpCatalog>,
    pub lyrics: Arc<GeniusHttpLyrics>,
}

/// Everything `create_server` needs besides the health state.
///
/// Without a pool and upstream adapters the server falls back to fixture
/// ports.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) upstream: Option<UpstreamAdapters>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            db_pool: None,
            upstream: None,
        }
    }

    /// Attach the database pool backing the repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the Spotify and Genius clients.
    #[must_use]
    pub fn with_upstream(mut self, upstream: UpstreamAdapters) -> Self {
        self.upstream = Some(upstream);
        self
    }
}
