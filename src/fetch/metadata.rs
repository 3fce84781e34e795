//! `maven-metadata.xml` of a snapshot version directory.

use crate::error::{FetchErrorKind, LaunchpadError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotMetadata {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub versioning: Versioning,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Versioning {
    #[serde(default)]
    pub snapshot: Option<Snapshot>,
    #[serde(rename = "snapshotVersions", default)]
    pub snapshot_versions: SnapshotVersions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(rename = "buildNumber", default)]
    pub build_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotVersions {
    #[serde(rename = "snapshotVersion", default)]
    pub entries: Vec<SnapshotVersion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotVersion {
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub extension: String,
    pub value: String,
}

impl SnapshotMetadata {
    pub fn parse(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|e| {
            LaunchpadError::fetch(
                "reading maven-metadata.xml",
                FetchErrorKind::InvalidMetadata(e.to_string()),
            )
        })
    }

    /// Timestamped version of the file with `extension` and `classifier`.
    ///
    /// Falls back to the `<snapshot>` timestamp and build number when the
    /// metadata has no per-file entry.
    pub fn resolve(&self, version: &str, extension: &str, classifier: Option<&str>) -> Option<String> {
        let exact = self.versioning.snapshot_versions.entries.iter().find(|entry| {
            entry.extension == extension && entry.classifier.as_deref() == classifier
        });
        if let Some(entry) = exact {
            return Some(entry.value.clone());
        }

        let snapshot = self.versioning.snapshot.as_ref()?;
        match (&snapshot.timestamp, &snapshot.build_number) {
            (Some(timestamp), Some(build)) => {
                Some(version.replace("SNAPSHOT", &format!("{timestamp}-{build}")))
            }
            _ => None,
        }
    }
}
