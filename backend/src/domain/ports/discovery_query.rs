//! Driving port for the home-page song discovery.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ArtistId, Error, Username};

/// Song shown to a user, built from one randomly chosen followed artist.
///
/// Every song field is `null` when the user follows nobody. Absence is always
/// `null`, never an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiscoveryPayload {
    /// Account the payload was built for.
    pub username: Username,
    /// Full persisted follow set, in identifier order.
    pub artist_ids: Vec<ArtistId>,
    /// Whether `artist_ids` is non-empty.
    pub has_artists_saved: bool,
    /// Representative track title.
    #[schema(example = "Bohemian Rhapsody")]
    pub song_name: Option<String>,
    /// Performing artist credited on the track.
    pub song_artist: Option<String>,
    /// Cover art URL.
    pub song_image_url: Option<String>,
    /// Audio preview URL.
    pub preview_url: Option<String>,
    /// Lyrics page URL.
    pub genius_url: Option<String>,
}

impl DiscoveryPayload {
    /// Payload for a user without followed artists.
    pub fn empty(username: Username) -> Self {
        Self {
            username,
            artist_ids: Vec::new(),
            has_artists_saved: false,
            song_name: None,
            song_artist: None,
            song_image_url: None,
            preview_url: None,
            genius_url: None,
        }
    }
}

/// Use-case port for discovery.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscoveryQuery: Send + Sync {
    /// Build the discovery payload for `username`.
    ///
    /// # Errors
    ///
    /// `upstream_unavailable` when the catalog cannot return a track for the
    /// chosen artist. Lyrics failures never surface.
    async fn discover(&self, username: &Username) -> Result<DiscoveryPayload, Error>;
}

/// Fixture query behaving as if the user follows nobody.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDiscoveryQuery;

#[async_trait]
impl DiscoveryQuery for FixtureDiscoveryQuery {
    async fn discover(&self, username: &Username) -> Result<DiscoveryPayload, Error> {
        Ok(DiscoveryPayload::empty(username.clone()))
    }
}
