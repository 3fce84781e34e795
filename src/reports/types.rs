//! Report type definitions.

use crate::diff::DeltaSummary;
use crate::model::{ArtifactIdentity, ArtifactRecord, TicketSummary, VersionChange};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Column-aligned text, one section per change kind
    #[default]
    Plaintext,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Plaintext => write!(f, "plaintext"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// What the comparison was run on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub tool: String,
    pub tool_version: String,
    pub generated_at: DateTime<Utc>,
    pub from_version: String,
    pub to_version: String,
    pub first_party_group: String,
}

impl ReportMetadata {
    pub fn new(
        from_version: impl Into<String>,
        to_version: impl Into<String>,
        first_party_group: impl Into<String>,
    ) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            from_version: from_version.into(),
            to_version: to_version.into(),
            first_party_group: first_party_group.into(),
        }
    }
}

/// Outcome of attributing one version change to tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Attribution {
    /// Outside the first-party group; no lookup attempted
    NotFirstParty,
    /// Tickets returned by the issue tracker
    Resolved {
        commits: usize,
        tickets: Vec<TicketSummary>,
    },
    /// Ticket ids from the change log, tracker lookups disabled
    IdsOnly { commits: usize, ids: Vec<String> },
    /// Change log or tracker lookup failed for this artifact
    Failed { reason: String },
}

impl Attribution {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A changed artifact with its attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedArtifact {
    pub identity: ArtifactIdentity,
    pub change: VersionChange,
    pub attribution: Attribution,
}

/// Everything a report renders, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub metadata: ReportMetadata,
    pub summary: DeltaSummary,
    pub added: Vec<ArtifactRecord>,
    pub removed: Vec<ArtifactRecord>,
    pub changed: Vec<ChangedArtifact>,
}

impl ComparisonReport {
    /// Number of changed first-party artifacts whose attribution failed.
    #[must_use]
    pub fn failed_attributions(&self) -> usize {
        self.changed
            .iter()
            .filter(|c| c.attribution.is_failed())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_matches_value() {
        for format in [ReportFormat::Plaintext, ReportFormat::Json] {
            let parsed = ReportFormat::from_str(&format.to_string(), false).unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_attribution_serialization() {
        let json = serde_json::to_value(Attribution::IdsOnly {
            commits: 2,
            ids: vec!["SLING-1".to_string()],
        })
        .unwrap();
        assert_eq!(json["status"], "ids_only");
        assert_eq!(json["ids"][0], "SLING-1");

        let json = serde_json::to_value(Attribution::NotFirstParty).unwrap();
        assert_eq!(json, serde_json::json!({"status": "not_first_party"}));
    }
}
