//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_service;
mod artist_catalog;
mod discovery_query;
mod followed_artists_repository;
mod follows_command;
mod lyrics_link_source;
mod user_repository;

#[cfg(test)]
pub use account_service::MockAccountService;
pub use account_service::{AccountService, FixtureAccountService};
#[cfg(test)]
pub use artist_catalog::MockArtistCatalog;
pub use artist_catalog::{
    AccessCredential, ArtistCatalog, ArtistCatalogError, FixtureArtistCatalog,
};
#[cfg(test)]
pub use discovery_query::MockDiscoveryQuery;
pub use discovery_query::{DiscoveryPayload, DiscoveryQuery, FixtureDiscoveryQuery};
#[cfg(test)]
pub use followed_artists_repository::MockFollowedArtistsRepository;
pub use followed_artists_repository::{
    FixtureFollowedArtistsRepository, FollowedArtistsRepository, FollowedArtistsRepositoryError,
};
#[cfg(test)]
pub use follows_command::{MockFollowsCommand, MockFollowsQuery};
pub use follows_command::{
    FixtureFollowsCommand, FixtureFollowsQuery, FollowsCommand, FollowsQuery,
    ReconcileFollowsRequest, ReconcileFollowsResponse,
};
#[cfg(test)]
pub use lyrics_link_source::MockLyricsLinkSource;
pub use lyrics_link_source::{FixtureLyricsLinkSource, LyricsLinkSource, LyricsLinkSourceError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
