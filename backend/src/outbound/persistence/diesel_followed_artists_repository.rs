//! PostgreSQL-backed `FollowedArtistsRepository`.

use std::collections::BTreeSet;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::warn;

use crate::domain::ports::{FollowedArtistsRepository, FollowedArtistsRepositoryError};
use crate::domain::{ArtistId, FollowDiff, Username};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewFollowedArtistRow;
use super::pool::DbPool;
use super::schema::followed_artists;

/// Diesel adapter storing one row per followed artist.
///
/// [`FollowedArtistsRepository::apply_diff`] runs its deletes and inserts in
/// a single transaction.
#[derive(Clone)]
pub struct DieselFollowedArtistsRepository {
    pool: DbPool,
}

impl DieselFollowedArtistsRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_error(error: diesel::result::Error) -> FollowedArtistsRepositoryError {
    map_diesel_error(
        error,
        FollowedArtistsRepositoryError::query,
        FollowedArtistsRepositoryError::connection,
    )
}

#[async_trait]
impl FollowedArtistsRepository for DieselFollowedArtistsRepository {
    async fn load_set(
        &self,
        username: &Username,
    ) -> Result<BTreeSet<ArtistId>, FollowedArtistsRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, FollowedArtistsRepositoryError::connection))?;

        let rows: Vec<String> = followed_artists::table
            .filter(followed_artists::username.eq(username.as_ref()))
            .select(followed_artists::artist_id)
            .load(&mut conn)
            .await
            .map_err(map_error)?;

        Ok(rows
            .into_iter()
            .filter_map(|raw| {
                ArtistId::new(raw.as_str())
                    .inspect_err(|err| {
                        warn!(
                            username = %username,
                            artist_id = %raw,
                            reason = %err,
                            "skipping invalid stored artist id"
                        );
                    })
                    .ok()
            })
            .collect())
    }

    async fn apply_diff(
        &self,
        username: &Username,
        diff: &FollowDiff,
    ) -> Result<(), FollowedArtistsRepositoryError> {
        let owner = username.as_ref();
        let removals: Vec<&str> = diff.to_remove().iter().map(AsRef::as_ref).collect();
        let additions: Vec<NewFollowedArtistRow<'_>> = diff
            .to_add()
            .iter()
            .map(|id| NewFollowedArtistRow {
                username: owner,
                artist_id: id.as_ref(),
            })
            .collect();

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, FollowedArtistsRepositoryError::connection))?;

        conn.transaction(|conn| {
            async move {
                if !removals.is_empty() {
                    diesel::delete(
                        followed_artists::table
                            .filter(followed_artists::username.eq(owner))
                            .filter(followed_artists::artist_id.eq_any(removals)),
                    )
                    .execute(conn)
                    .await?;
                }
                if !additions.is_empty() {
                    diesel::insert_into(followed_artists::table)
                        .values(&additions)
                        .on_conflict_do_nothing()
                        .execute(conn)
                        .await?;
                }
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_error)
    }
}
