//! Default values for launchpad-comparer.

use super::types::{ChangelogConfig, RepositoryConfig, TicketConfig};
use crate::fetch::{DEFAULT_RELEASE_URL, DEFAULT_SNAPSHOT_URL};
use crate::reports::DEFAULT_FIRST_PARTY_GROUP;
use crate::tickets::{DEFAULT_TICKET_PREFIX, DEFAULT_TRACKER_URL};
use std::path::PathBuf;

/// Older release compared when none is given.
pub const DEFAULT_FIRST_VERSION: &str = "12";

/// Newer release compared when none is given.
pub const DEFAULT_SECOND_VERSION: &str = "13-SNAPSHOT";

/// Checkout root, relative to the working directory.
pub const DEFAULT_CHECKOUT: &str = "..";

pub const DEFAULT_TICKET_BATCH_SIZE: usize = 50;
pub const DEFAULT_TRACKER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRACKER_MAX_RETRIES: u8 = 3;
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Platform cache directory for downloaded manifests.
#[must_use]
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(env!("CARGO_PKG_NAME"))
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            release_url: DEFAULT_RELEASE_URL.to_string(),
            snapshot_url: DEFAULT_SNAPSHOT_URL.to_string(),
            cache_dir: None,
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}

impl RepositoryConfig {
    /// Configured cache directory, or the platform default.
    #[must_use]
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            checkout: PathBuf::from(DEFAULT_CHECKOUT),
            first_party_group: DEFAULT_FIRST_PARTY_GROUP.to_string(),
        }
    }
}

impl Default for TicketConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefix: DEFAULT_TICKET_PREFIX.to_string(),
            tracker_url: DEFAULT_TRACKER_URL.to_string(),
            batch_size: DEFAULT_TICKET_BATCH_SIZE,
            timeout_secs: DEFAULT_TRACKER_TIMEOUT_SECS,
            max_retries: DEFAULT_TRACKER_MAX_RETRIES,
        }
    }
}
