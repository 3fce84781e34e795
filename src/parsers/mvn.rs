//! Maven coordinates as they appear inside manifests.

use crate::error::{LaunchpadError, ParseErrorKind, Result};
use crate::model::{ArtifactIdentity, ArtifactRecord};
use std::fmt;

/// Full Maven coordinates of one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenId {
    pub group: String,
    pub name: String,
    pub version: String,
    pub kind: Option<String>,
    pub classifier: Option<String>,
}

impl MavenId {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            kind: None,
            classifier: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    /// Parse a colon separated id: `group:name[:type[:classifier]]:version`.
    pub fn parse_colon(id: &str) -> Result<Self> {
        let parts: Vec<&str> = id.trim().split(':').collect();
        let (group, name, kind, classifier, version) = match parts.as_slice() {
            [g, a, v] => (*g, *a, None, None, *v),
            [g, a, t, v] => (*g, *a, Some(*t), None, *v),
            [g, a, t, c, v] => (*g, *a, Some(*t), Some(*c), *v),
            _ => return Err(invalid(id, "expected 3 to 5 ':' separated parts")),
        };
        Self::build(id, group, name, version, kind, classifier)
    }

    /// Parse a Maven URL: `[mvn:]group/name/version[/type[/classifier]]`.
    pub fn parse_url(url: &str) -> Result<Self> {
        let trimmed = url.trim();
        let path = trimmed.strip_prefix("mvn:").unwrap_or(trimmed);
        let parts: Vec<&str> = path.split('/').collect();
        let (group, name, version, kind, classifier) = match parts.as_slice() {
            [g, a, v] => (*g, *a, *v, None, None),
            [g, a, v, t] => (*g, *a, *v, Some(*t), None),
            [g, a, v, t, c] => (*g, *a, *v, Some(*t), Some(*c)),
            _ => return Err(invalid(url, "expected 3 to 5 '/' separated parts")),
        };
        Self::build(url, group, name, version, kind, classifier)
    }

    fn build(
        raw: &str,
        group: &str,
        name: &str,
        version: &str,
        kind: Option<&str>,
        classifier: Option<&str>,
    ) -> Result<Self> {
        if group.is_empty() || name.is_empty() {
            return Err(invalid(raw, "group and name must not be empty"));
        }
        if version.is_empty() {
            return Err(invalid(raw, "missing version"));
        }
        Ok(Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            kind: kind.filter(|k| !k.is_empty()).map(str::to_string),
            classifier: classifier.filter(|c| !c.is_empty()).map(str::to_string),
        })
    }

    /// Version-independent identity of these coordinates.
    #[must_use]
    pub fn identity(&self) -> ArtifactIdentity {
        ArtifactIdentity::new(
            self.group.as_str(),
            self.name.as_str(),
            self.classifier.as_deref(),
            self.kind.as_deref(),
        )
    }

    #[must_use]
    pub fn into_record(self) -> ArtifactRecord {
        let identity = self.identity();
        ArtifactRecord::new(identity, self.version)
    }

    /// File name inside a Maven repository, for the given file version.
    ///
    /// Snapshot downloads pass their timestamped version here.
    #[must_use]
    pub fn file_name(&self, file_version: &str) -> String {
        let mut name = format!("{}-{}", self.name, file_version);
        if let Some(classifier) = &self.classifier {
            name.push('-');
            name.push_str(classifier);
        }
        name.push('.');
        name.push_str(self.kind.as_deref().unwrap_or(crate::model::DEFAULT_TYPE));
        name
    }

    /// Directory of this version inside a Maven repository layout.
    #[must_use]
    pub fn version_dir(&self) -> String {
        format!("{}/{}", self.artifact_dir(), self.version)
    }

    /// Directory of all versions of this artifact.
    #[must_use]
    pub fn artifact_dir(&self) -> String {
        format!("{}/{}", self.group.replace('.', "/"), self.name)
    }
}

impl fmt::Display for MavenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(kind) = &self.kind {
            write!(f, ":{kind}")?;
            if let Some(classifier) = &self.classifier {
                write!(f, ":{classifier}")?;
            }
        }
        write!(f, ":{}", self.version)
    }
}

fn invalid(id: &str, reason: &str) -> LaunchpadError {
    LaunchpadError::parse(
        "artifact id",
        ParseErrorKind::InvalidArtifactId {
            id: id.to_string(),
            reason: reason.to_string(),
        },
    )
}
