//! Configuration file loading and discovery.

use super::types::{AppConfig, ChangelogConfig, OutputConfig, RepositoryConfig, TicketConfig};
use crate::parsers::ManifestFormat;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".launchpad-comparer.yaml",
    ".launchpad-comparer.yml",
    "launchpad-comparer.yaml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/launchpad-comparer/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let cwd = std::env::current_dir().ok();
    let user_dir = dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")));
    let home = dirs::home_dir();

    [cwd, user_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values of `other` that differ from their defaults override, so
    /// a config built from unset CLI flags leaves file settings alone.
    pub fn merge(&mut self, other: &Self) {
        let repositories = RepositoryConfig::default();
        if other.repositories.release_url != repositories.release_url {
            self.repositories.release_url.clone_from(&other.repositories.release_url);
        }
        if other.repositories.snapshot_url != repositories.snapshot_url {
            self.repositories.snapshot_url.clone_from(&other.repositories.snapshot_url);
        }
        if other.repositories.cache_dir.is_some() {
            self.repositories.cache_dir.clone_from(&other.repositories.cache_dir);
        }
        if other.repositories.timeout_secs != repositories.timeout_secs {
            self.repositories.timeout_secs = other.repositories.timeout_secs;
        }

        if other.manifest.format != ManifestFormat::Auto {
            self.manifest.format = other.manifest.format;
        }

        let changelog = ChangelogConfig::default();
        if other.changelog.checkout != changelog.checkout {
            self.changelog.checkout.clone_from(&other.changelog.checkout);
        }
        if other.changelog.first_party_group != changelog.first_party_group {
            self.changelog
                .first_party_group
                .clone_from(&other.changelog.first_party_group);
        }

        let tickets = TicketConfig::default();
        if !other.tickets.enabled {
            self.tickets.enabled = false;
        }
        if other.tickets.prefix != tickets.prefix {
            self.tickets.prefix.clone_from(&other.tickets.prefix);
        }
        if other.tickets.tracker_url != tickets.tracker_url {
            self.tickets.tracker_url.clone_from(&other.tickets.tracker_url);
        }
        if other.tickets.batch_size != tickets.batch_size {
            self.tickets.batch_size = other.tickets.batch_size;
        }
        if other.tickets.timeout_secs != tickets.timeout_secs {
            self.tickets.timeout_secs = other.tickets.timeout_secs;
        }
        if other.tickets.max_retries != tickets.max_retries {
            self.tickets.max_retries = other.tickets.max_retries;
        }

        let output = OutputConfig::default();
        if other.output.format != ReportFormat::Plaintext {
            self.output.format = other.output.format;
        }
        if other.output.file != output.file {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

/// Example config file content with every default spelled out.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# launchpad-comparer configuration
# Place this file at .launchpad-comparer.yaml in the working directory
# or at ~/.config/launchpad-comparer/launchpad-comparer.yaml.
# CLI arguments always override file settings.

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}
