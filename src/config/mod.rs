//! Configuration for launchpad-comparer.
//!
//! Settings are typed, validated and can be loaded from a YAML file that is
//! discovered automatically. Command-line arguments are merged on top.
//!
//! # Configuration File
//!
//! Place a `.launchpad-comparer.yaml` file in the working directory or in
//! `~/.config/launchpad-comparer/`:
//!
//! ```yaml
//! changelog:
//!   checkout: /home/me/src/sling
//! tickets:
//!   tracker_url: https://issues.apache.org/jira
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_cache_dir, DEFAULT_CHECKOUT, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_FIRST_VERSION,
    DEFAULT_SECOND_VERSION, DEFAULT_TICKET_BATCH_SIZE, DEFAULT_TRACKER_MAX_RETRIES,
    DEFAULT_TRACKER_TIMEOUT_SECS,
};
pub use types::{
    AppConfig, AppConfigBuilder, ChangelogConfig, CompareConfig, ManifestConfig, OutputConfig,
    RepositoryConfig, TicketConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// JSON Schema of the configuration file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
