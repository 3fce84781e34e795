//! Where launchpad manifests are published.

use crate::parsers::MavenId;
use serde::{Deserialize, Serialize};

/// Default release repository.
pub const DEFAULT_RELEASE_URL: &str = "https://repo1.maven.org/maven2";

/// Default snapshot repository.
pub const DEFAULT_SNAPSHOT_URL: &str = "https://repository.apache.org/content/groups/snapshots";

/// Version-less Maven coordinates of a launchpad manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ManifestCoordinate {
    pub group: String,
    pub artifact: String,
    pub extension: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ManifestCoordinate {
    pub fn new(group: &str, artifact: &str, extension: &str, classifier: Option<&str>) -> Self {
        Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            extension: extension.to_string(),
            classifier: classifier.map(str::to_string),
        }
    }

    /// Full Maven id for one release.
    #[must_use]
    pub fn at(&self, version: &str) -> MavenId {
        let id = MavenId::new(&self.group, &self.artifact, version).with_type(&self.extension);
        match &self.classifier {
            Some(classifier) => id.with_classifier(classifier),
            None => id,
        }
    }

    /// Starter feature archive, published since Sling 12.
    pub fn starter() -> Self {
        Self::new(
            "org.apache.sling",
            "org.apache.sling.starter",
            "slingosgifeature",
            Some("oak_tar"),
        )
    }

    /// Provisioning model of the older launchpad builds.
    pub fn legacy_launchpad() -> Self {
        Self::new(
            "org.apache.sling",
            "org.apache.sling.launchpad",
            "txt",
            Some("slingfeature"),
        )
    }
}

/// Coordinates tried in order when fetching a release.
pub fn default_coordinates() -> Vec<ManifestCoordinate> {
    vec![
        ManifestCoordinate::starter(),
        ManifestCoordinate::legacy_launchpad(),
    ]
}

/// Whether `version` names a snapshot build.
#[must_use]
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with("-SNAPSHOT")
}
