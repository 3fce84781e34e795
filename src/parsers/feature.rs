//! OSGi feature JSON reader.
//!
//! A feature lists its bundles either as plain Maven ids or as objects
//! carrying an `id` plus metadata such as `start-order`:
//!
//! ```json
//! {
//!   "id": "org.apache.sling:org.apache.sling.starter:slingosgifeature:oak_tar:12",
//!   "bundles": [
//!     "org.apache.sling:org.apache.sling.api:2.16.4",
//!     { "id": "org.apache.sling:org.apache.sling.engine:2.6.20", "start-order": "20" }
//!   ]
//! }
//! ```
//!
//! Feature files may carry `//` and `/* */` comments, and a feature without
//! a `bundles` key has no bundles.

use super::mvn::MavenId;
use super::traits::{FormatConfidence, ManifestReader, RawManifest};
use crate::error::{ErrorContext, Result};
use serde::Deserialize;
use std::borrow::Cow;

/// Bundles of one feature, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureModel {
    pub id: Option<String>,
    pub bundles: Vec<MavenId>,
}

#[derive(Deserialize)]
struct FeatureDocument {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    bundles: Vec<BundleEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BundleEntry {
    Id(String),
    Object { id: String },
}

impl BundleEntry {
    fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

/// Reader for `*.slingosgifeature` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureReader;

impl FeatureReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ManifestReader for FeatureReader {
    fn read_str(&self, content: &str) -> Result<RawManifest> {
        let document: FeatureDocument =
            serde_json::from_str(&strip_comments(content)).context("reading feature JSON")?;

        let bundles = document
            .bundles
            .iter()
            .map(|entry| MavenId::parse_colon(entry.id()))
            .collect::<Result<Vec<_>>>()
            .context("reading feature bundles")?;

        tracing::debug!(
            "Read {} bundles from feature {}",
            bundles.len(),
            document.id.as_deref().unwrap_or("<unnamed>")
        );

        Ok(RawManifest::Feature(FeatureModel {
            id: document.id,
            bundles,
        }))
    }

    fn format_name(&self) -> &'static str {
        "OSGi feature"
    }

    fn detect(&self, content: &str) -> FormatConfidence {
        let stripped = strip_comments(content);
        let trimmed = stripped.trim_start();
        if !trimmed.starts_with('{') {
            return FormatConfidence::NONE;
        }
        if trimmed.contains("\"bundles\"") {
            FormatConfidence::CERTAIN
        } else {
            FormatConfidence::LOW
        }
    }
}

/// Blank out `//` and `/* */` comments outside of JSON strings.
///
/// Line breaks inside comments are kept so parse errors report the right
/// line. An unterminated block comment runs to the end of the input.
fn strip_comments(content: &str) -> Cow<'_, str> {
    if !content.contains('/') {
        return Cow::Borrowed(content);
    }

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                out.push(' ');
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    previous = skipped;
                }
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchpadError;

    const FEATURE: &str = r#"{
        "id": "org.apache.sling:org.apache.sling.starter:slingosgifeature:oak_tar:12",
        "bundles": [
            "org.apache.sling:org.apache.sling.api:2.16.4",
            { "id": "org.apache.sling:org.apache.sling.engine:2.6.20", "start-order": "20" },
            "org.apache.felix:org.apache.felix.scr:jar:tests:2.1.16"
        ],
        "configurations": {}
    }"#;

    #[test]
    fn test_read_mixed_bundle_entries() {
        let RawManifest::Feature(model) = FeatureReader::new().read_str(FEATURE).unwrap() else {
            panic!("expected feature model");
        };
        assert_eq!(model.bundles.len(), 3);
        assert_eq!(model.bundles[1].name, "org.apache.sling.engine");
        assert_eq!(model.bundles[2].classifier.as_deref(), Some("tests"));
        assert!(model.id.unwrap().ends_with(":12"));
    }

    #[test]
    fn test_missing_bundles_is_empty() {
        let RawManifest::Feature(model) = FeatureReader::new()
            .read_str(r#"{"id": "g:a:1", "framework-properties": {"x": "1"}}"#)
            .unwrap()
        else {
            panic!("expected feature model");
        };
        assert!(model.bundles.is_empty());
    }

    #[test]
    fn test_not_json_is_an_error() {
        let err = FeatureReader::new().read_str("{ bundles: oops").unwrap_err();
        assert!(matches!(err, LaunchpadError::ManifestParse { .. }));
    }

    #[test]
    fn test_comments_are_ignored() {
        let content = "// starter\n{\n  /* ids\n     below */\n  \"bundles\": [\"g:a:1.0\"] // one\n}";
        let reader = FeatureReader::new();
        assert_eq!(reader.detect(content), FormatConfidence::CERTAIN);
        let RawManifest::Feature(model) = reader.read_str(content).unwrap() else {
            panic!("expected feature model");
        };
        assert_eq!(model.bundles.len(), 1);
    }

    #[test]
    fn test_strip_comments_keeps_strings() {
        let content = r#"{"url": "http://x/*y*/", "q": "a\"//b"} // c"#;
        assert_eq!(
            strip_comments(content),
            r#"{"url": "http://x/*y*/", "q": "a\"//b"} "#
        );
        assert_eq!(strip_comments("a /* b\n c */ d"), "a  \n d");
        assert!(matches!(strip_comments("{}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_bad_bundle_id_is_an_error() {
        let err = FeatureReader::new()
            .read_str(r#"{"bundles": ["not-an-id"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("reading feature bundles"));
    }

    #[test]
    fn test_detect() {
        let reader = FeatureReader::new();
        assert_eq!(reader.detect(FEATURE), FormatConfidence::CERTAIN);
        assert_eq!(reader.detect("{}"), FormatConfidence::LOW);
        assert_eq!(reader.detect("[feature name=x]"), FormatConfidence::NONE);
    }
}
