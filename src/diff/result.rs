//! Delta result structures.

use crate::model::{ArtifactIdentity, ArtifactRecord, VersionChange};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Differences between two manifest snapshots.
///
/// Every identity of either snapshot ends up in at most one group; identities
/// present in both with the same version appear in none. The ordered
/// collections iterate in [`ArtifactIdentity`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct DeltaResult {
    /// Artifacts only present in the `to` snapshot
    pub added: BTreeSet<ArtifactRecord>,
    /// Artifacts only present in the `from` snapshot
    pub removed: BTreeSet<ArtifactRecord>,
    /// Artifacts present in both under different versions
    pub changed: BTreeMap<ArtifactIdentity, VersionChange>,
}

impl DeltaResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty())
    }

    #[must_use]
    pub fn summary(&self) -> DeltaSummary {
        DeltaSummary {
            added: self.added.len(),
            removed: self.removed.len(),
            changed: self.changed.len(),
        }
    }

    /// Changed artifacts belonging to `group` (exact match), in identity order.
    pub fn changed_in_group<'a>(
        &'a self,
        group: &'a str,
    ) -> impl Iterator<Item = (&'a ArtifactIdentity, &'a VersionChange)> + 'a {
        self.changed
            .iter()
            .filter(move |(identity, _)| identity.is_in_group(group))
    }
}

/// Summary statistics for the delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl DeltaSummary {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.removed + self.changed
    }
}
