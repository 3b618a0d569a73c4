//! Assembly of `HttpState` from adapters or fixtures.

use std::sync::Arc;

use actix_web::web;

use song_explorer::domain::ports::{
    AccountService, ArtistCatalog, DiscoveryQuery, FollowedArtistsRepository, FollowsCommand,
    FollowsQuery, LyricsLinkSource, UserRepository,
};
use song_explorer::domain::{AccountsService, DiscoveryService, FollowsService};
use song_explorer::inbound::http::state::HttpState;
use song_explorer::outbound::persistence::{DieselFollowedArtistsRepository, DieselUserRepository};

use super::ServerConfig;

/// Wire the domain services over concrete driven ports.
fn build_services<R, U, C, L>(
    follows_repository: Arc<R>,
    users: Arc<U>,
    catalog: Arc<C>,
    lyrics: Arc<L>,
) -> HttpState
where
    R: FollowedArtistsRepository + 'static,
    U: UserRepository + 'static,
    C: ArtistCatalog + 'static,
    L: LyricsLinkSource + 'static,
{
    let follows = Arc::new(FollowsService::new(
        follows_repository.clone(),
        catalog.clone(),
    ));
    HttpState::new(
        Arc::new(AccountsService::new(users)) as Arc<dyn AccountService>,
        follows.clone() as Arc<dyn FollowsCommand>,
        follows as Arc<dyn FollowsQuery>,
        Arc::new(DiscoveryService::new(follows_repository, catalog, lyrics))
            as Arc<dyn DiscoveryQuery>,
    )
}

/// Build the shared HTTP state.
///
/// Real adapters are used only when both the pool and the upstream clients
/// are configured; otherwise every port is a fixture.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match (&config.db_pool, &config.upstream) {
        (Some(pool), Some(upstream)) => build_services(
            Arc::new(DieselFollowedArtistsRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
            upstream.catalog.clone(),
            upstream.lyrics.clone(),
        ),
        _ => HttpState::fixtures(),
    };
    web::Data::new(state)
}
