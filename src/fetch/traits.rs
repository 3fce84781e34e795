//! Manifest retrieval abstraction.

use crate::error::Result;
use std::path::PathBuf;

/// Resolves a release identifier to a manifest file on disk.
pub trait ManifestFetcher {
    /// Local path of the manifest for `version`.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::ManifestFetch`] when no manifest can be
    /// resolved or downloaded for the identifier.
    ///
    /// [`LaunchpadError::ManifestFetch`]: crate::error::LaunchpadError::ManifestFetch
    fn fetch(&self, version: &str) -> Result<PathBuf>;

    /// Name of this fetcher (e.g., "local", "maven").
    fn name(&self) -> &'static str;
}

impl<T: ManifestFetcher + ?Sized> ManifestFetcher for Box<T> {
    fn fetch(&self, version: &str) -> Result<PathBuf> {
        (**self).fetch(version)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
