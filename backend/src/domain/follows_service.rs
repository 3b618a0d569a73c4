//! Follow reconciliation.
//!
//! [`FollowsService`] turns a client-submitted candidate list into the
//! persisted follow set. A candidate survives only if the catalog returns a
//! track for it; every kind of failure excludes just that candidate. The
//! resulting diff is committed in one repository call so readers never see
//! a half-applied set.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::stream::{self, StreamExt};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ArtistCatalog, FollowedArtistsRepository, FollowedArtistsRepositoryError, FollowsCommand,
    FollowsQuery, ReconcileFollowsRequest, ReconcileFollowsResponse,
};
use crate::domain::{ArtistId, Error, FollowDiff, Username, accepted_in_submission_order};

/// Largest candidate list accepted by a single reconciliation.
pub const MAX_CANDIDATES: usize = 100;

/// Catalog validations allowed in flight at once.
pub const VALIDATION_CONCURRENCY: usize = 8;

/// Reconciliation service implementing the follows driving ports.
#[derive(Clone)]
pub struct FollowsService<R, C> {
    repository: Arc<R>,
    catalog: Arc<C>,
}

impl<R, C> FollowsService<R, C> {
    /// Create a service over the given repository and catalog.
    pub fn new(repository: Arc<R>, catalog: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}

pub(crate) fn map_follows_repository_error(error: FollowedArtistsRepositoryError) -> Error {
    match error {
        FollowedArtistsRepositoryError::Connection { message } => Error::service_unavailable(
            format!("followed artists repository unavailable: {message}"),
        ),
        FollowedArtistsRepositoryError::Query { message } => {
            Error::internal(format!("followed artists repository error: {message}"))
        }
    }
}

impl<R, C> FollowsService<R, C>
where
    R: FollowedArtistsRepository,
    C: ArtistCatalog,
{
    /// Return the unique well-formed candidates the catalog resolves.
    async fn validate(&self, candidates: &[String]) -> BTreeSet<ArtistId> {
        let mut unique = BTreeSet::new();
        for raw in candidates {
            match ArtistId::new(raw.as_str()) {
                Ok(id) => {
                    unique.insert(id);
                }
                Err(err) => debug!(candidate = %raw, reason = %err, "excluding malformed artist id"),
            }
        }
        if unique.is_empty() {
            return unique;
        }

        let credential = match self.catalog.access_credential().await {
            Ok(credential) => credential,
            Err(err) => {
                warn!(
                    error = %err,
                    candidates = unique.len(),
                    "catalog credential exchange failed; excluding all candidates"
                );
                return BTreeSet::new();
            }
        };

        let catalog = self.catalog.as_ref();
        let credential = &credential;
        stream::iter(unique)
            .map(|id| async move {
                let outcome = catalog.track_for_artist(&id, credential).await;
                (id, outcome)
            })
            .buffer_unordered(VALIDATION_CONCURRENCY)
            .filter_map(|(id, outcome)| async move {
                match outcome {
                    Ok(_) => Some(id),
                    Err(err) => {
                        debug!(artist_id = %id, reason = %err, "excluding artist id");
                        None
                    }
                }
            })
            .collect()
            .await
    }
}

#[async_trait]
impl<R, C> FollowsCommand for FollowsService<R, C>
where
    R: FollowedArtistsRepository,
    C: ArtistCatalog,
{
    async fn reconcile(
        &self,
        request: ReconcileFollowsRequest,
    ) -> Result<ReconcileFollowsResponse, Error> {
        let ReconcileFollowsRequest {
            username,
            artist_ids: candidates,
        } = request;
        if candidates.len() > MAX_CANDIDATES {
            return Err(
                Error::invalid_request(format!(
                    "at most {MAX_CANDIDATES} artist ids may be submitted at once"
                ))
                .with_details(json!({
                    "field": "artist_ids",
                    "max": MAX_CANDIDATES,
                    "received": candidates.len(),
                })),
            );
        }

        let validated = self.validate(&candidates).await;
        let existing = self
            .repository
            .load_set(&username)
            .await
            .map_err(map_follows_repository_error)?;
        let diff = FollowDiff::between(&existing, &validated);
        if !diff.is_empty() {
            self.repository
                .apply_diff(&username, &diff)
                .await
                .map_err(map_follows_repository_error)?;
        }

        info!(
            username = %username,
            candidates = candidates.len(),
            accepted = validated.len(),
            added = diff.to_add().len(),
            removed = diff.to_remove().len(),
            "reconciled followed artists"
        );

        Ok(ReconcileFollowsResponse {
            accepted: accepted_in_submission_order(&candidates, &validated),
        })
    }
}

#[async_trait]
impl<R, C> FollowsQuery for FollowsService<R, C>
where
    R: FollowedArtistsRepository,
    C: ArtistCatalog,
{
    async fn followed_artists(&self, username: &Username) -> Result<Vec<ArtistId>, Error> {
        let set = self
            .repository
            .load_set(username)
            .await
            .map_err(map_follows_repository_error)?;
        Ok(set.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "follows_service_tests.rs"]
mod tests;
