//! Driven port for the external lyrics-link provider.

use async_trait::async_trait;

use crate::domain::LyricsLink;

use super::define_port_error;

define_port_error! {
    /// Hard call failures from lyrics adapters. "No match" is not an error.
    pub enum LyricsLinkSourceError {
        /// Transport, timeout, status or decoding failure.
        Upstream { message: String } =>
            "lyrics lookup failed: {message}",
    }
}

/// Port for resolving a song name to a lyrics page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LyricsLinkSource: Send + Sync {
    /// Best-effort lookup. `Ok(None)` means the provider found nothing.
    async fn lyrics_link(
        &self,
        song_name: &str,
    ) -> Result<Option<LyricsLink>, LyricsLinkSourceError>;
}

/// Fixture source that never finds a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureLyricsLinkSource;

#[async_trait]
impl LyricsLinkSource for FixtureLyricsLinkSource {
    async fn lyrics_link(
        &self,
        _song_name: &str,
    ) -> Result<Option<LyricsLink>, LyricsLinkSourceError> {
        Ok(None)
    }
}
