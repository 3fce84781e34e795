//! Version-independent artifact identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging type assumed when a manifest omits it.
pub const DEFAULT_TYPE: &str = "jar";

/// Key identifying an artifact across releases, independent of its version.
///
/// Ordering is structural over `(group, name, classifier, type)`, which gives
/// the report its deterministic sort order. An absent classifier is stored as
/// the empty string so `None` and `""` never become distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactIdentity {
    pub group: String,
    pub name: String,
    pub classifier: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ArtifactIdentity {
    /// Create an identity, normalising a missing classifier or type.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        classifier: Option<&str>,
        kind: Option<&str>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            classifier: classifier.unwrap_or_default().to_string(),
            kind: kind
                .filter(|k| !k.is_empty())
                .unwrap_or(DEFAULT_TYPE)
                .to_string(),
        }
    }

    /// Whether this artifact belongs to the given group (exact match).
    #[must_use]
    pub fn is_in_group(&self, group: &str) -> bool {
        self.group == group
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.kind)?;
        if !self.classifier.is_empty() {
            write!(f, ":{}", self.classifier)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_normalisation() {
        let absent = ArtifactIdentity::new("g", "a", None, Some("jar"));
        let empty = ArtifactIdentity::new("g", "a", Some(""), Some("jar"));
        assert_eq!(absent, empty);
        assert_eq!(absent.classifier, "");
    }

    #[test]
    fn test_default_type() {
        let id = ArtifactIdentity::new("g", "a", None, None);
        assert_eq!(id.kind, "jar");
        assert_eq!(ArtifactIdentity::new("g", "a", None, Some("")).kind, "jar");
    }

    #[test]
    fn test_ordering_is_group_name_classifier_type() {
        let mut ids = vec![
            ArtifactIdentity::new("org.b", "x", None, None),
            ArtifactIdentity::new("org.a", "y", Some("tests"), None),
            ArtifactIdentity::new("org.a", "y", None, Some("zip")),
            ArtifactIdentity::new("org.a", "y", None, None),
            ArtifactIdentity::new("org.a", "b", None, None),
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "org.a:b:jar",
                "org.a:y:jar",
                "org.a:y:zip",
                "org.a:y:jar:tests",
                "org.b:x:jar",
            ]
        );
    }

    #[test]
    fn test_group_match_is_exact() {
        let id = ArtifactIdentity::new("org.apache.sling.extra", "a", None, None);
        assert!(!id.is_in_group("org.apache.sling"));
        assert!(ArtifactIdentity::new("org.apache.sling", "a", None, None)
            .is_in_group("org.apache.sling"));
    }
}
