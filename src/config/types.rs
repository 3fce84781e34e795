//! Configuration types for launchpad-comparer.

use crate::parsers::ManifestFormat;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Settings that can come from a config file, the command line, or both
/// (with the command line overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where launchpad manifests are downloaded from
    pub repositories: RepositoryConfig,
    /// Manifest reading
    pub manifest: ManifestConfig,
    /// Source checkouts used for change logs
    pub changelog: ChangelogConfig,
    /// Ticket extraction and issue tracker
    pub tickets: TicketConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn checkout(mut self, checkout: impl Into<PathBuf>) -> Self {
        self.config.changelog.checkout = checkout.into();
        self
    }

    pub fn first_party_group(mut self, group: impl Into<String>) -> Self {
        self.config.changelog.first_party_group = group.into();
        self
    }

    pub fn ticket_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.tickets.prefix = prefix.into();
        self
    }

    pub fn tracker_url(mut self, url: impl Into<String>) -> Self {
        self.config.tickets.tracker_url = url.into();
        self
    }

    /// Disable issue tracker lookups.
    pub const fn no_tickets(mut self, disabled: bool) -> Self {
        self.config.tickets.enabled = !disabled;
        self
    }

    pub const fn manifest_format(mut self, format: ManifestFormat) -> Self {
        self.config.manifest.format = format;
        self
    }

    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    pub fn cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.repositories.cache_dir = dir;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Maven repositories holding launchpad manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Release repository base URL
    pub release_url: String,
    /// Snapshot repository base URL
    pub snapshot_url: String,
    /// Download cache (platform cache dir when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    /// Download timeout in seconds
    pub timeout_secs: u64,
}

/// Manifest reading options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ManifestConfig {
    /// Manifest format; `auto` sniffs the content
    pub format: ManifestFormat,
}

/// Change-log lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Directory holding one git checkout per first-party artifact
    pub checkout: PathBuf,
    /// Group whose changed artifacts are attributed (exact match)
    pub first_party_group: String,
}

/// Ticket extraction and issue tracker lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TicketConfig {
    /// Look up summaries in the issue tracker
    pub enabled: bool,
    /// Project key commit subjects start with, e.g. `SLING`
    pub prefix: String,
    /// Issue tracker base URL
    pub tracker_url: String,
    /// Maximum ticket ids per tracker request
    pub batch_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries for failed tracker requests
    pub max_retries: u8,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

// ============================================================================
// Comparison run
// ============================================================================

/// One comparison: the two release identifiers plus settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    /// Older release (version or manifest path)
    pub first: String,
    /// Newer release (version or manifest path)
    pub second: String,
    pub app: AppConfig,
}

impl CompareConfig {
    pub fn new(first: impl Into<String>, second: impl Into<String>, app: AppConfig) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            app,
        }
    }
}
