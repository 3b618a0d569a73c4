//! Reqwest-backed Spotify catalog.
//!
//! Credentials come from the client-credentials flow. The representative
//! track for an artist is the first entry of its top tracks in the
//! configured market.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{TokenResponseDto, TopTracksDto};
use crate::config::SpotifySettings;
use crate::domain::ports::{AccessCredential, ArtistCatalog, ArtistCatalogError};
use crate::domain::{ArtistId, TrackSummary};

const DEFAULT_ACCOUNTS_BASE: &str = "https://accounts.spotify.com/";
const DEFAULT_API_BASE: &str = "https://api.spotify.com/";

/// Base URLs of the two Spotify hosts the adapter talks to.
#[derive(Debug, Clone)]
pub struct SpotifyEndpoints {
    /// Host serving `/api/token`.
    pub accounts: Url,
    /// Host serving `/v1/artists/{id}/top-tracks`.
    pub api: Url,
}

impl SpotifyEndpoints {
    /// Production Spotify hosts.
    ///
    /// # Errors
    ///
    /// Never in practice; the constants are valid URLs.
    pub fn production() -> Result<Self, url::ParseError> {
        Ok(Self {
            accounts: Url::parse(DEFAULT_ACCOUNTS_BASE)?,
            api: Url::parse(DEFAULT_API_BASE)?,
        })
    }
}

/// Catalog adapter over the Spotify Web API.
pub struct SpotifyHttpCatalog {
    client: Client,
    endpoints: SpotifyEndpoints,
    client_id: String,
    client_secret: Zeroizing<String>,
    market: String,
}

impl SpotifyHttpCatalog {
    /// Build an adapter whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        settings: &SpotifySettings,
        endpoints: SpotifyEndpoints,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoints,
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
            market: settings.market.clone(),
        })
    }

    fn token_url(&self) -> Result<Url, ArtistCatalogError> {
        self.endpoints
            .accounts
            .join("api/token")
            .map_err(|err| ArtistCatalogError::upstream(format!("token url: {err}")))
    }

    fn top_tracks_url(&self, artist_id: &ArtistId) -> Result<Url, ArtistCatalogError> {
        let mut url = self.endpoints.api.clone();
        url.path_segments_mut()
            .map_err(|()| ArtistCatalogError::upstream("api base url cannot take a path"))?
            .pop_if_empty()
            .extend(["v1", "artists", artist_id.as_ref(), "top-tracks"]);
        url.query_pairs_mut().append_pair("market", &self.market);
        Ok(url)
    }
}

#[async_trait]
impl ArtistCatalog for SpotifyHttpCatalog {
    async fn access_credential(&self) -> Result<AccessCredential, ArtistCatalogError> {
        let response = self
            .client
            .post(self.token_url()?)
            .basic_auth(&self.client_id, Some(self.client_secret.as_str()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_token_status(status));
        }
        parse_token(body.as_ref())
    }

    async fn track_for_artist(
        &self,
        artist_id: &ArtistId,
        credential: &AccessCredential,
    ) -> Result<TrackSummary, ArtistCatalogError> {
        let response = self
            .client
            .get(self.top_tracks_url(artist_id)?)
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_track_status(status, artist_id));
        }
        parse_top_track(body.as_ref(), artist_id)
    }
}

fn parse_token(body: &[u8]) -> Result<AccessCredential, ArtistCatalogError> {
    let decoded: TokenResponseDto = serde_json::from_slice(body)
        .map_err(|err| ArtistCatalogError::upstream(format!("invalid token payload: {err}")))?;
    decoded
        .access_token
        .filter(|token| !token.is_empty())
        .map(AccessCredential::new)
        .ok_or_else(|| ArtistCatalogError::auth("token response carried no access_token"))
}

fn parse_top_track(body: &[u8], artist_id: &ArtistId) -> Result<TrackSummary, ArtistCatalogError> {
    let decoded: TopTracksDto = serde_json::from_slice(body).map_err(|err| {
        ArtistCatalogError::upstream(format!("invalid top-tracks payload: {err}"))
    })?;
    let track = decoded
        .into_representative()
        .ok_or_else(|| ArtistCatalogError::unknown_artist(artist_id.as_ref()))?;
    track.into_summary().map_err(ArtistCatalogError::upstream)
}

fn map_transport_error(error: reqwest::Error) -> ArtistCatalogError {
    debug!(%error, timeout = error.is_timeout(), "spotify request failed");
    if error.is_timeout() {
        ArtistCatalogError::upstream("catalog request timed out")
    } else {
        ArtistCatalogError::upstream(format!("catalog transport error: {error}"))
    }
}

fn map_token_status(status: StatusCode) -> ArtistCatalogError {
    let code = status.as_u16();
    if status.is_client_error() {
        ArtistCatalogError::auth(format!("token exchange rejected with status {code}"))
    } else {
        ArtistCatalogError::upstream(format!("token exchange failed with status {code}"))
    }
}

fn map_track_status(status: StatusCode, artist_id: &ArtistId) -> ArtistCatalogError {
    let code = status.as_u16();
    match status {
        StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
            ArtistCatalogError::unknown_artist(artist_id.as_ref())
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ArtistCatalogError::auth(format!("catalog rejected token with status {code}"))
        }
        _ => ArtistCatalogError::upstream(format!("top-tracks status {code}")),
    }
}

#[cfg(test)]
#[path = "http_catalog_tests.rs"]
mod tests;
