//! Wire shapes of the Spotify token and top-tracks responses.
//!
//! Only the fields the adapter reads are declared; everything else is
//! ignored by serde.

use serde::Deserialize;

use crate::domain::TrackSummary;

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TopTracksDto {
    #[serde(default)]
    pub(super) tracks: Vec<TrackDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct TrackDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) artists: Vec<ArtistDto>,
    pub(super) album: Option<AlbumDto>,
    pub(super) preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistDto {
    pub(super) name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AlbumDto {
    #[serde(default)]
    pub(super) images: Vec<ImageDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ImageDto {
    pub(super) url: String,
}

impl TopTracksDto {
    /// First track, or `None` when the artist has no top tracks.
    pub(super) fn into_representative(self) -> Option<TrackDto> {
        self.tracks.into_iter().next()
    }
}

impl TrackDto {
    pub(super) fn into_summary(self) -> Result<TrackSummary, String> {
        let artist = self
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.name)
            .ok_or_else(|| format!("track {:?} has no credited artist", self.name))?;
        let image_url = self
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url)
            .filter(|url| !url.is_empty());
        Ok(TrackSummary {
            name: self.name,
            artist,
            image_url,
            preview_url: self.preview_url.filter(|url| !url.is_empty()),
        })
    }
}
