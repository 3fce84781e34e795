//! Versioned artifact records, snapshots and version changes.

use super::ArtifactIdentity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One artifact entry of a manifest.
///
/// Versions are opaque strings; they are compared for equality only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub identity: ArtifactIdentity,
    pub version: String,
}

impl ArtifactRecord {
    pub fn new(identity: ArtifactIdentity, version: impl Into<String>) -> Self {
        Self {
            identity,
            version: version.into(),
        }
    }
}

impl fmt::Display for ArtifactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.identity, self.version)
    }
}

/// A version bump of an artifact present in both releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionChange {
    pub from: String,
    pub to: String,
}

impl VersionChange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The artifacts of one release, keyed by identity.
///
/// Built by the manifest normalizer. Inserting an identity that is already
/// present replaces the earlier record (last wins) while keeping its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSnapshot {
    artifacts: IndexMap<ArtifactIdentity, ArtifactRecord>,
}

impl ManifestSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the record it replaced, if any.
    pub fn insert(&mut self, record: ArtifactRecord) -> Option<ArtifactRecord> {
        self.artifacts.insert(record.identity.clone(), record)
    }

    #[must_use]
    pub fn get(&self, identity: &ArtifactIdentity) -> Option<&ArtifactRecord> {
        self.artifacts.get(identity)
    }

    #[must_use]
    pub fn contains(&self, identity: &ArtifactIdentity) -> bool {
        self.artifacts.contains_key(identity)
    }

    pub fn identities(&self) -> impl Iterator<Item = &ArtifactIdentity> {
        self.artifacts.keys()
    }

    pub fn records(&self) -> impl Iterator<Item = &ArtifactRecord> {
        self.artifacts.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl FromIterator<ArtifactRecord> for ManifestSnapshot {
    fn from_iter<I: IntoIterator<Item = ArtifactRecord>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for record in iter {
            snapshot.insert(record);
        }
        snapshot
    }
}
