//! Delta engine implementation.

use super::DeltaResult;
use crate::model::{ManifestSnapshot, VersionChange};

/// Computes added, removed and changed artifacts between two snapshots.
///
/// Versions are compared by string equality only; the engine reports that a
/// version changed, never in which direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeltaEngine;

impl DeltaEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compare two snapshots and return the delta
    pub fn diff(&self, from: &ManifestSnapshot, to: &ManifestSnapshot) -> DeltaResult {
        let mut result = DeltaResult::new();

        for record in from.records() {
            match to.get(&record.identity) {
                None => {
                    result.removed.insert(record.clone());
                }
                Some(current) if current.version != record.version => {
                    result.changed.insert(
                        record.identity.clone(),
                        VersionChange::new(record.version.as_str(), current.version.as_str()),
                    );
                }
                Some(_) => {}
            }
        }

        result.added.extend(
            to.records()
                .filter(|record| !from.contains(&record.identity))
                .cloned(),
        );

        tracing::debug!(
            "Delta: {} added, {} removed, {} changed",
            result.added.len(),
            result.removed.len(),
            result.changed.len()
        );

        result
    }
}

/// Compare two snapshots with a default engine.
pub fn diff(from: &ManifestSnapshot, to: &ManifestSnapshot) -> DeltaResult {
    DeltaEngine::new().diff(from, to)
}
