//! Manifest normalizer: reader output to [`ManifestSnapshot`].

use super::detection::{FormatDetector, ManifestFormat};
use super::mvn::MavenId;
use super::traits::RawManifest;
use crate::error::{ErrorContext, LaunchpadError, ParseErrorKind, Result};
use crate::model::ManifestSnapshot;
use std::path::Path;

/// Flatten a raw manifest into a snapshot keyed by artifact identity.
///
/// Provisioning artifacts are flattened across features and run-mode
/// sections in file order. A repeated identity keeps the last record seen.
#[must_use]
pub fn normalize(raw: RawManifest) -> ManifestSnapshot {
    let ids: Vec<MavenId> = match raw {
        RawManifest::Feature(model) => model.bundles,
        RawManifest::Provisioning(model) => model
            .features
            .into_iter()
            .flat_map(|feature| feature.groups)
            .flat_map(|group| group.artifacts)
            .collect(),
    };

    let total = ids.len();
    let snapshot: ManifestSnapshot = ids.into_iter().map(MavenId::into_record).collect();

    if snapshot.len() < total {
        tracing::debug!(
            "Collapsed {} duplicate artifact entries (last entry wins)",
            total - snapshot.len()
        );
    }
    snapshot
}

/// Reads manifest files of either format into snapshots.
#[derive(Debug, Clone, Default)]
pub struct ManifestNormalizer {
    detector: FormatDetector,
    format: ManifestFormat,
}

impl ManifestNormalizer {
    #[must_use]
    pub const fn new(format: ManifestFormat) -> Self {
        Self {
            detector: FormatDetector::new(),
            format,
        }
    }

    /// Read and normalize a manifest file.
    pub fn load(&self, path: &Path) -> Result<ManifestSnapshot> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LaunchpadError::parse(
                format!("reading {}", path.display()),
                ParseErrorKind::Unreadable(e.to_string()),
            )
        })?;
        self.load_str(&content)
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Read and normalize manifest content.
    pub fn load_str(&self, content: &str) -> Result<ManifestSnapshot> {
        let raw = self.detector.read_str(content, self.format)?;
        Ok(normalize(raw))
    }
}
