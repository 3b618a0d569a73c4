//! Driven port for the external artist/track metadata provider.
//!
//! The catalog is also the authority on whether an artist identifier exists:
//! a successful [`ArtistCatalog::track_for_artist`] call is what makes an
//! identifier valid during follow reconciliation.

use std::fmt;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{ArtistId, TrackSummary};

use super::define_port_error;

/// Short-lived bearer token issued by the catalog's credential exchange.
///
/// The token is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCredential(Zeroizing<String>);

impl AccessCredential {
    /// Wrap a token returned by the provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Borrow the raw token for use in an `Authorization` header.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessCredential").field(&"<redacted>").finish()
    }
}

define_port_error! {
    /// Failures surfaced by catalog adapters.
    pub enum ArtistCatalogError {
        /// Credential exchange failed or the provider rejected the token.
        Auth { message: String } =>
            "catalog authentication failed: {message}",
        /// The identifier does not resolve to a catalog artist.
        UnknownArtist { artist_id: String } =>
            "unknown artist: {artist_id}",
        /// Any other call failure: transport, timeout, status or decoding.
        Upstream { message: String } =>
            "catalog call failed: {message}",
    }
}

/// Port for looking up artists in the external catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtistCatalog: Send + Sync {
    /// Obtain a fresh access credential.
    async fn access_credential(&self) -> Result<AccessCredential, ArtistCatalogError>;

    /// Fetch the representative track for an artist.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use song_explorer::domain::ArtistId;
    /// use song_explorer::domain::ports::{ArtistCatalog, FixtureArtistCatalog};
    ///
    /// let catalog = FixtureArtistCatalog;
    /// let credential = catalog.access_credential().await?;
    /// let artist = ArtistId::new("4Z8W4fKeB5YxbusRsdQVPb")?;
    /// let track = catalog.track_for_artist(&artist, &credential).await?;
    /// assert!(track.name.contains("4Z8W4fKeB5YxbusRsdQVPb"));
    /// ```
    async fn track_for_artist(
        &self,
        artist_id: &ArtistId,
        credential: &AccessCredential,
    ) -> Result<TrackSummary, ArtistCatalogError>;
}

/// Fixture catalog that knows every well-formed artist identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureArtistCatalog;

#[async_trait]
impl ArtistCatalog for FixtureArtistCatalog {
    async fn access_credential(&self) -> Result<AccessCredential, ArtistCatalogError> {
        Ok(AccessCredential::new("fixture-token"))
    }

    async fn track_for_artist(
        &self,
        artist_id: &ArtistId,
        _credential: &AccessCredential,
    ) -> Result<TrackSummary, ArtistCatalogError> {
        Ok(TrackSummary {
            name: format!("Fixture track for {artist_id}"),
            artist: format!("Fixture artist {artist_id}"),
            image_url: None,
            preview_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_output_is_redacted() {
        let credential = AccessCredential::new("secret-token");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("secret-token"));
        assert_eq!(credential.expose(), "secret-token");
    }

    #[tokio::test]
    async fn fixture_catalog_resolves_any_artist() {
        let catalog = FixtureArtistCatalog;
        let credential = catalog
            .access_credential()
            .await
            .expect("fixture credential");
        let artist = ArtistId::new("abc").expect("valid id");
        let track = catalog
            .track_for_artist(&artist, &credential)
            .await
            .expect("fixture track");
        assert_eq!(track.name, "Fixture track for abc");
    }

    #[test]
    fn unknown_artist_error_names_the_identifier() {
        let err = ArtistCatalogError::unknown_artist("nope");
        assert_eq!(err.to_string(), "unknown artist: nope");
    }
}
