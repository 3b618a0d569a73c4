//! Song discovery for the home page.
//!
//! Picks one followed artist uniformly at random, asks the catalog for its
//! representative track and enriches it with a lyrics link. The catalog call
//! is mandatory; the lyrics lookup is best effort.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::domain::follows_service::map_follows_repository_error;
use crate::domain::ports::{
    ArtistCatalog, ArtistCatalogError, DiscoveryPayload, DiscoveryQuery,
    FollowedArtistsRepository, LyricsLinkSource,
};
use crate::domain::{ArtistId, Error, Username};

/// Discovery service implementing [`DiscoveryQuery`].
#[derive(Clone)]
pub struct DiscoveryService<R, C, L> {
    repository: Arc<R>,
    catalog: Arc<C>,
    lyrics: Arc<L>,
}

impl<R, C, L> DiscoveryService<R, C, L> {
    /// Create a service from its collaborators.
    pub fn new(repository: Arc<R>, catalog: Arc<C>, lyrics: Arc<L>) -> Self {
        Self {
            repository,
            catalog,
            lyrics,
        }
    }
}

fn map_catalog_error(artist_id: &ArtistId, error: ArtistCatalogError) -> Error {
    Error::upstream_unavailable(format!("could not load a track for {artist_id}: {error}"))
}

#[async_trait]
impl<R, C, L> DiscoveryQuery for DiscoveryService<R, C, L>
where
    R: FollowedArtistsRepository,
    C: ArtistCatalog,
    L: LyricsLinkSource,
{
    async fn discover(&self, username: &Username) -> Result<DiscoveryPayload, Error> {
        let artist_ids: Vec<ArtistId> = self
            .repository
            .load_set(username)
            .await
            .map_err(map_follows_repository_error)?
            .into_iter()
            .collect();

        let chosen = {
            let mut rng = rand::thread_rng();
            artist_ids.choose(&mut rng).cloned()
        };
        let Some(chosen) = chosen else {
            return Ok(DiscoveryPayload::empty(username.clone()));
        };

        let credential = self
            .catalog
            .access_credential()
            .await
            .map_err(|err| map_catalog_error(&chosen, err))?;
        let track = self
            .catalog
            .track_for_artist(&chosen, &credential)
            .await
            .map_err(|err| map_catalog_error(&chosen, err))?;

        let genius_url = match self.lyrics.lyrics_link(&track.name).await {
            Ok(link) => link.map(String::from),
            Err(err) => {
                warn!(song = %track.name, error = %err, "lyrics lookup failed");
                None
            }
        };

        info!(username = %username, artist_id = %chosen, "discovered song");
        Ok(DiscoveryPayload {
            username: username.clone(),
            has_artists_saved: true,
            artist_ids,
            song_name: Some(track.name),
            song_artist: Some(track.artist),
            song_image_url: track.image_url,
            preview_url: track.preview_url,
            genius_url,
        })
    }
}

#[cfg(test)]
#[path = "discovery_service_tests.rs"]
mod tests;
