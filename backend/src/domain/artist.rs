//! Catalog artist identifiers and the track data surfaced for them.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

/// Maximum artist identifier length in characters, matching the storage column.
pub const ARTIST_ID_MAX: usize = 80;

/// Validation errors returned by [`ArtistId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtistIdValidationError {
    /// Input was empty.
    #[error("artist id must not be empty")]
    Empty,
    /// Input contained whitespace.
    #[error("artist id must not contain whitespace")]
    Whitespace,
    /// Input exceeded [`ARTIST_ID_MAX`] characters.
    #[error("artist id must be at most {max} characters")]
    TooLong {
        /// Configured maximum.
        max: usize,
    },
}

/// Opaque external catalog identifier for an artist.
///
/// Only the shape is checked here. Whether the identifier resolves to a real
/// artist is decided by calling the catalog.
///
/// # Examples
/// ```
/// use song_explorer::domain::ArtistId;
///
/// let id = ArtistId::new("4Z8W4fKeB5YxbusRsdQVPb").expect("well-formed id");
/// assert_eq!(id.as_ref(), "4Z8W4fKeB5YxbusRsdQVPb");
/// assert!(ArtistId::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "4Z8W4fKeB5YxbusRsdQVPb")]
pub struct ArtistId(String);

impl ArtistId {
    /// Validate and construct an artist identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, ArtistIdValidationError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ArtistIdValidationError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(ArtistIdValidationError::Whitespace);
        }
        if raw.chars().count() > ARTIST_ID_MAX {
            return Err(ArtistIdValidationError::TooLong { max: ARTIST_ID_MAX });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for ArtistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArtistId> for String {
    fn from(value: ArtistId) -> Self {
        value.0
    }
}

impl TryFrom<String> for ArtistId {
    type Error = ArtistIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Representative track returned by the catalog for one artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    /// Track title.
    pub name: String,
    /// Name of the performing artist as credited on the track.
    pub artist: String,
    /// Cover art URL, when the catalog provides one.
    pub image_url: Option<String>,
    /// Short audio preview URL, when the catalog provides one.
    pub preview_url: Option<String>,
}

/// Validation errors returned by [`LyricsLink::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LyricsLinkValidationError {
    /// Input was not an absolute URL.
    #[error("lyrics link is not a valid URL: {0}")]
    Malformed(#[from] url::ParseError),
    /// Input used a scheme other than `http` or `https`.
    #[error("lyrics link must use http or https, got {scheme}")]
    UnsupportedScheme {
        /// Rejected scheme.
        scheme: String,
    },
}

/// External link to a lyrics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsLink(Url);

impl LyricsLink {
    /// Parse an absolute `http`/`https` link.
    pub fn parse(raw: &str) -> Result<Self, LyricsLinkValidationError> {
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(LyricsLinkValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }),
        }
    }

    /// Borrow the link as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<LyricsLink> for String {
    fn from(value: LyricsLink) -> Self {
        value.0.into()
    }
}
