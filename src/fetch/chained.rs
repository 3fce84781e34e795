//! Fallback across several fetchers.

use super::ManifestFetcher;
use crate::error::{FetchErrorKind, LaunchpadError, Result};
use std::path::PathBuf;

/// Tries each fetcher in order and returns the first manifest found.
///
/// When every fetcher fails the error of the last one is returned.
#[derive(Default)]
pub struct ChainedFetcher {
    fetchers: Vec<Box<dyn ManifestFetcher>>,
}

impl ChainedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, fetcher: impl ManifestFetcher + 'static) -> Self {
        self.fetchers.push(Box::new(fetcher));
        self
    }

    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}

impl ManifestFetcher for ChainedFetcher {
    fn fetch(&self, version: &str) -> Result<PathBuf> {
        let mut last_error = None;
        for fetcher in &self.fetchers {
            match fetcher.fetch(version) {
                Ok(path) => return Ok(path),
                Err(e) => {
                    tracing::debug!("{} fetcher: {e}", fetcher.name());
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| {
            LaunchpadError::fetch(format!("launchpad {version}"), FetchErrorKind::RemoteDisabled)
        }))
    }

    fn name(&self) -> &'static str {
        "chained"
    }
}
