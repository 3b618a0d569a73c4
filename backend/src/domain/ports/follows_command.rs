//! Driving ports for editing and reading a user's followed artists.
//!
//! HTTP handlers call these ports with an already-authenticated username.
//! Catalog validation and persistence stay behind the implementation.

use async_trait::async_trait;

use crate::domain::{ArtistId, Error, Username};

/// Request to replace a user's follow set with the valid subset of
/// `artist_ids`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileFollowsRequest {
    /// Account being updated.
    pub username: Username,
    /// Raw candidate identifiers as submitted. May contain duplicates and
    /// identifiers that fail validation.
    pub artist_ids: Vec<String>,
}

/// Outcome of a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconcileFollowsResponse {
    /// Candidates that validated, first occurrence only, in submission order.
    /// Equal as a set to the persisted follow set after the call.
    pub accepted: Vec<ArtistId>,
}

/// Use-case port for follow reconciliation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowsCommand: Send + Sync {
    /// Validate the candidates and persist exactly the valid subset.
    ///
    /// # Errors
    ///
    /// - `invalid_request` when too many candidates are submitted.
    /// - `service_unavailable` or `internal_error` when the commit fails; the
    ///   previously persisted set is then unchanged.
    ///
    /// Individual candidate failures are never errors.
    async fn reconcile(
        &self,
        request: ReconcileFollowsRequest,
    ) -> Result<ReconcileFollowsResponse, Error>;
}

/// Use-case port for reading the persisted follow set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowsQuery: Send + Sync {
    /// Followed artists in identifier order.
    async fn followed_artists(&self, username: &Username) -> Result<Vec<ArtistId>, Error>;
}

/// Fixture command accepting every well-formed candidate without persisting.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureFollowsCommand;

#[async_trait]
impl FollowsCommand for FixtureFollowsCommand {
    async fn reconcile(
        &self,
        request: ReconcileFollowsRequest,
    ) -> Result<ReconcileFollowsResponse, Error> {
        let valid = request
            .artist_ids
            .iter()
            .filter_map(|raw| ArtistId::new(raw.as_str()).ok())
            .collect();
        Ok(ReconcileFollowsResponse {
            accepted: crate::domain::accepted_in_submission_order(&request.artist_ids, &valid),
        })
    }
}

/// Fixture query returning no follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureFollowsQuery;

#[async_trait]
impl FollowsQuery for FixtureFollowsQuery {
    async fn followed_artists(&self, _username: &Username) -> Result<Vec<ArtistId>, Error> {
        Ok(Vec::new())
    }
}
