//! Reqwest-backed Genius lyrics lookup.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::SearchEnvelopeDto;
use crate::config::GeniusSettings;
use crate::domain::LyricsLink;
use crate::domain::ports::{LyricsLinkSource, LyricsLinkSourceError};

const DEFAULT_API_BASE: &str = "https://api.genius.com/";

/// Lyrics source searching Genius by song title.
pub struct GeniusHttpLyrics {
    client: Client,
    api_base: Url,
    access_token: Zeroizing<String>,
}

impl GeniusHttpLyrics {
    /// Build an adapter against `api_base` whose requests time out after
    /// `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        settings: &GeniusSettings,
        api_base: Url,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_base,
            access_token: settings.access_token.clone(),
        })
    }

    /// Production Genius API host.
    ///
    /// # Errors
    ///
    /// Never in practice; the constant is a valid URL.
    pub fn production_base() -> Result<Url, url::ParseError> {
        Url::parse(DEFAULT_API_BASE)
    }

    fn search_url(&self, song_name: &str) -> Result<Url, LyricsLinkSourceError> {
        let mut url = self
            .api_base
            .join("search")
            .map_err(|err| LyricsLinkSourceError::upstream(format!("search url: {err}")))?;
        url.query_pairs_mut().append_pair("q", song_name);
        Ok(url)
    }
}

#[async_trait]
impl LyricsLinkSource for GeniusHttpLyrics {
    async fn lyrics_link(
        &self,
        song_name: &str,
    ) -> Result<Option<LyricsLink>, LyricsLinkSourceError> {
        let response = self
            .client
            .get(self.search_url(song_name)?)
            .bearer_auth(self.access_token.as_str())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(LyricsLinkSourceError::upstream(format!(
                "search status {}",
                status.as_u16()
            )));
        }
        parse_first_hit(body.as_ref())
    }
}

fn parse_first_hit(body: &[u8]) -> Result<Option<LyricsLink>, LyricsLinkSourceError> {
    let decoded: SearchEnvelopeDto = serde_json::from_slice(body).map_err(|err| {
        LyricsLinkSourceError::upstream(format!("invalid search payload: {err}"))
    })?;
    decoded
        .first_url()
        .map(|raw| {
            LyricsLink::parse(&raw)
                .map_err(|err| LyricsLinkSourceError::upstream(format!("hit url: {err}")))
        })
        .transpose()
}

fn map_transport_error(error: reqwest::Error) -> LyricsLinkSourceError {
    debug!(%error, timeout = error.is_timeout(), "genius request failed");
    if error.is_timeout() {
        LyricsLinkSourceError::upstream("lyrics request timed out")
    } else {
        LyricsLinkSourceError::upstream(format!("lyrics transport error: {error}"))
    }
}
