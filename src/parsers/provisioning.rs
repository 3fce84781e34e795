//! Provisioning model reader.
//!
//! The provisioning model is a sectioned text format. Artifacts are nested
//! under features and, within a feature, under `[artifacts]` sections that
//! may carry a start level and run modes:
//!
//! ```text
//! [feature name=sling]
//!
//! [variables]
//!   oak.version=1.6.8
//!
//! [artifacts startLevel=15 runModes=oak_tar]
//!   org.apache.jackrabbit/oak-segment-tar/${oak.version}
//! ```

use super::mvn::MavenId;
use super::traits::{FormatConfidence, ManifestReader, RawManifest};
use crate::error::{LaunchpadError, Result};
use std::collections::HashMap;

/// All features of one provisioning file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisioningModel {
    pub features: Vec<ProvisionedFeature>,
}

/// One `[feature]` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionedFeature {
    pub name: Option<String>,
    pub groups: Vec<ArtifactGroup>,
}

/// The artifacts listed under one `[artifacts]` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactGroup {
    pub run_modes: Vec<String>,
    pub start_level: Option<u32>,
    pub artifacts: Vec<MavenId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Artifacts,
    Variables,
    Ignored,
}

/// Reader for `*slingfeature.txt` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisioningReader;

impl ProvisioningReader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ManifestReader for ProvisioningReader {
    fn read_str(&self, content: &str) -> Result<RawManifest> {
        let mut model = ProvisioningModel::default();
        let mut variables: HashMap<String, String> = HashMap::new();
        let mut section: Option<Section> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(header) = section_header(raw_line) {
                let (name, attributes) = parse_header(header);
                section = Some(match name {
                    "feature" => {
                        variables.clear();
                        model.features.push(ProvisionedFeature {
                            name: attributes.get("name").map(ToString::to_string),
                            groups: Vec::new(),
                        });
                        Section::Ignored
                    }
                    "artifacts" => {
                        let feature = model.features.last_mut().ok_or_else(|| {
                            LaunchpadError::syntax(line_no, "[artifacts] outside of a [feature]")
                        })?;
                        feature.groups.push(artifact_group(&attributes, line_no)?);
                        Section::Artifacts
                    }
                    "variables" => Section::Variables,
                    _ => Section::Ignored,
                });
                continue;
            }

            match section {
                None => {
                    return Err(LaunchpadError::syntax(
                        line_no,
                        format!("content before the first section: '{line}'"),
                    ))
                }
                Some(Section::Variables) => {
                    if let Some((key, value)) = line.split_once('=') {
                        variables.insert(key.trim().to_string(), value.trim().to_string());
                    }
                }
                Some(Section::Artifacts) => {
                    let url = line.split_whitespace().next().unwrap_or(line);
                    let id = MavenId::parse_url(&substitute(url, &variables))
                        .map_err(|e| LaunchpadError::syntax(line_no, e.to_string()))?;
                    if let Some(group) = model
                        .features
                        .last_mut()
                        .and_then(|feature| feature.groups.last_mut())
                    {
                        group.artifacts.push(id);
                    }
                }
                Some(Section::Ignored) => {}
            }
        }

        if model.features.is_empty() {
            return Err(LaunchpadError::syntax(0, "no [feature] section found"));
        }

        Ok(RawManifest::Provisioning(model))
    }

    fn format_name(&self) -> &'static str {
        "provisioning model"
    }

    fn detect(&self, content: &str) -> FormatConfidence {
        let mut first = true;
        let mut confidence = FormatConfidence::NONE;
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if first {
                if trimmed.starts_with('{') {
                    return FormatConfidence::NONE;
                }
                if trimmed.starts_with("[feature") {
                    return FormatConfidence::CERTAIN;
                }
                first = false;
            }
            if line.starts_with("[artifacts") {
                return FormatConfidence::HIGH;
            }
            if section_header(line).is_some() {
                confidence = FormatConfidence::LOW;
            }
        }
        confidence
    }
}

/// Section headers start in the first column; indented lines belong to the
/// enclosing section (configuration bodies may contain brackets).
fn section_header(raw_line: &str) -> Option<&str> {
    let line = raw_line.trim_end();
    line.strip_prefix('[')?.strip_suffix(']')
}

fn parse_header(header: &str) -> (&str, HashMap<&str, &str>) {
    let mut tokens = header.split_whitespace();
    let name = tokens.next().unwrap_or_default();
    let attributes = tokens.filter_map(|token| token.split_once('=')).collect();
    (name, attributes)
}

fn artifact_group(attributes: &HashMap<&str, &str>, line_no: usize) -> Result<ArtifactGroup> {
    let start_level = attributes
        .get("startLevel")
        .map(|level| {
            level.parse::<u32>().map_err(|_| {
                LaunchpadError::syntax(line_no, format!("invalid startLevel '{level}'"))
            })
        })
        .transpose()?;
    let run_modes = attributes
        .get("runModes")
        .map(|modes| modes.split(',').map(|m| m.trim().to_string()).collect())
        .unwrap_or_default();

    Ok(ArtifactGroup {
        run_modes,
        start_level,
        artifacts: Vec::new(),
    })
}

/// Replace `${name}` references; unknown names are left untouched.
fn substitute(value: &str, variables: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match variables.get(name) {
                    Some(replacement) => result.push_str(replacement),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "\
# Sling launchpad
[feature name=sling]

[variables]
  oak.version=1.6.8

[artifacts]
  org.apache.sling/org.apache.sling.api/2.16.4
  mvn:org.apache.sling/org.apache.sling.engine/2.6.20

[artifacts startLevel=15 runModes=oak_tar,oak_mongo]
  org.apache.jackrabbit/oak-segment-tar/${oak.version}

[configurations]
  org.apache.sling.jcr.oak.server.internal.OakSlingRepositoryManager
    admin.login.enabled=B\"false\"
[settings]
  sling.run.mode.install.options=oak_tar,oak_mongo

[feature name=extras]
[artifacts]
  org.apache.sling/org.apache.sling.extra/1.0/zip/docs
";

    fn read(content: &str) -> ProvisioningModel {
        match ProvisioningReader::new().read_str(content).unwrap() {
            RawManifest::Provisioning(model) => model,
            other => panic!("expected provisioning model, got {other:?}"),
        }
    }

    #[test]
    fn test_read_nested_groups() {
        let model = read(MODEL);
        assert_eq!(model.features.len(), 2);

        let sling = &model.features[0];
        assert_eq!(sling.name.as_deref(), Some("sling"));
        assert_eq!(sling.groups.len(), 2);
        assert_eq!(sling.groups[0].artifacts.len(), 2);

        let oak = &sling.groups[1];
        assert_eq!(oak.start_level, Some(15));
        assert_eq!(oak.run_modes, vec!["oak_tar", "oak_mongo"]);
        assert_eq!(oak.artifacts[0].version, "1.6.8");

        let extra = &model.features[1].groups[0].artifacts[0];
        assert_eq!(extra.kind.as_deref(), Some("zip"));
        assert_eq!(extra.classifier.as_deref(), Some("docs"));
    }

    #[test]
    fn test_artifacts_outside_feature() {
        let err = ProvisioningReader::new()
            .read_str("[artifacts]\n  g/a/1\n")
            .unwrap_err();
        assert!(err.to_string().contains("provisioning model"));
    }

    #[test]
    fn test_bad_start_level() {
        assert!(ProvisioningReader::new()
            .read_str("[feature name=x]\n[artifacts startLevel=high]\n")
            .is_err());
    }

    #[test]
    fn test_bad_artifact_line() {
        assert!(ProvisioningReader::new()
            .read_str("[feature name=x]\n[artifacts]\n  only/two\n")
            .is_err());
    }

    #[test]
    fn test_substitute() {
        let mut vars = HashMap::new();
        vars.insert("v".to_string(), "1.0".to_string());
        assert_eq!(substitute("g/a/${v}", &vars), "g/a/1.0");
        assert_eq!(substitute("g/a/${missing}", &vars), "g/a/${missing}");
        assert_eq!(substitute("g/a/${open", &vars), "g/a/${open");
    }

    #[test]
    fn test_detect() {
        let reader = ProvisioningReader::new();
        assert_eq!(reader.detect(MODEL), FormatConfidence::CERTAIN);
        assert_eq!(reader.detect("[artifacts]\n g/a/1"), FormatConfidence::HIGH);
        assert_eq!(reader.detect("{\"bundles\": []}"), FormatConfidence::NONE);
        assert_eq!(reader.detect("hello"), FormatConfidence::NONE);
    }
}
