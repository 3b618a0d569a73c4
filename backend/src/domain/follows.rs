//! Set arithmetic behind follow reconciliation.
//!
//! These helpers are pure so the reconciliation invariants can be checked
//! without catalog or database doubles.

use std::collections::{BTreeSet, HashSet};

use super::ArtistId;

/// Minimal mutation turning a user's persisted follow set into a target set.
///
/// `to_add` and `to_remove` are always disjoint.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use song_explorer::domain::{ArtistId, FollowDiff};
///
/// let id = |raw: &str| ArtistId::new(raw).expect("valid id");
/// let existing = BTreeSet::from([id("a"), id("b")]);
/// let target = BTreeSet::from([id("b"), id("c")]);
///
/// let diff = FollowDiff::between(&existing, &target);
/// assert_eq!(diff.to_add(), &BTreeSet::from([id("c")]));
/// assert_eq!(diff.to_remove(), &BTreeSet::from([id("a")]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowDiff {
    to_add: BTreeSet<ArtistId>,
    to_remove: BTreeSet<ArtistId>,
}

impl FollowDiff {
    /// Compute `target − existing` and `existing − target`.
    pub fn between(existing: &BTreeSet<ArtistId>, target: &BTreeSet<ArtistId>) -> Self {
        Self {
            to_add: target.difference(existing).cloned().collect(),
            to_remove: existing.difference(target).cloned().collect(),
        }
    }

    /// Identifiers to insert.
    pub fn to_add(&self) -> &BTreeSet<ArtistId> {
        &self.to_add
    }

    /// Identifiers to delete.
    pub fn to_remove(&self) -> &BTreeSet<ArtistId> {
        &self.to_remove
    }

    /// True when applying the diff would change nothing.
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

/// Keep the first occurrence of each submitted candidate that ended up in
/// `accepted`, in submission order.
pub fn accepted_in_submission_order(
    candidates: &[String],
    accepted: &BTreeSet<ArtistId>,
) -> Vec<ArtistId> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .iter()
        .filter(|raw| seen.insert(raw.as_str()))
        .filter_map(|raw| accepted.iter().find(|id| id.as_ref() == raw.as_str()))
        .cloned()
        .collect()
}
