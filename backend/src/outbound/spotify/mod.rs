//! Spotify Web API adapter for the `ArtistCatalog` port.

mod dto;
mod http_catalog;

pub use http_catalog::{SpotifyEndpoints, SpotifyHttpCatalog};
