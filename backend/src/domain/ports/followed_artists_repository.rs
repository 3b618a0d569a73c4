//! Port for the persisted per-user follow set.
//!
//! Adapters own the `(username, artist_id)` rows. The reconciliation service
//! is the only writer; discovery only reads.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::domain::{ArtistId, FollowDiff, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by follow-set repositories.
    pub enum FollowedArtistsRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "followed artists repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "followed artists repository query failed: {message}",
    }
}

/// Storage contract for followed artists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowedArtistsRepository: Send + Sync {
    /// Load the artist identifiers currently followed by `username`.
    ///
    /// Unknown users yield an empty set.
    async fn load_set(
        &self,
        username: &Username,
    ) -> Result<BTreeSet<ArtistId>, FollowedArtistsRepositoryError>;

    /// Apply `diff` atomically.
    ///
    /// Either every removal and insertion becomes visible or none does. On
    /// error the previously persisted set is left untouched.
    async fn apply_diff(
        &self,
        username: &Username,
        diff: &FollowDiff,
    ) -> Result<(), FollowedArtistsRepositoryError>;
}

/// Fixture repository with no rows that discards writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureFollowedArtistsRepository;

#[async_trait]
impl FollowedArtistsRepository for FixtureFollowedArtistsRepository {
    async fn load_set(
        &self,
        _username: &Username,
    ) -> Result<BTreeSet<ArtistId>, FollowedArtistsRepositoryError> {
        Ok(BTreeSet::new())
    }

    async fn apply_diff(
        &self,
        _username: &Username,
        _diff: &FollowDiff,
    ) -> Result<(), FollowedArtistsRepositoryError> {
        Ok(())
    }
}
