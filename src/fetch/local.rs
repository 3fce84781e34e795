//! Manifests already present on disk.

use super::ManifestFetcher;
use crate::error::{FetchErrorKind, LaunchpadError, Result};
use std::path::{Path, PathBuf};

/// Treats the release identifier as a path to a manifest file.
///
/// Lets two local manifests be compared without any repository access.
#[derive(Debug, Clone, Default)]
pub struct LocalFileFetcher {
    base_dir: Option<PathBuf>,
}

impl LocalFileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative identifiers against `base_dir` instead of the
    /// working directory.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn candidate(&self, version: &str) -> PathBuf {
        let path = Path::new(version);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ManifestFetcher for LocalFileFetcher {
    fn fetch(&self, version: &str) -> Result<PathBuf> {
        let path = self.candidate(version);
        if path.is_file() {
            tracing::debug!("Using local manifest {}", path.display());
            return Ok(path);
        }
        Err(LaunchpadError::fetch(
            format!("launchpad {version}"),
            FetchErrorKind::NotFound {
                version: version.to_string(),
                tried: path.display().to_string(),
            },
        ))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("12.slingosgifeature");
        std::fs::write(&file, "{}").unwrap();

        let fetcher = LocalFileFetcher::with_base_dir(dir.path());
        assert_eq!(fetcher.fetch("12.slingosgifeature").unwrap(), file);
        assert_eq!(
            LocalFileFetcher::new().fetch(file.to_str().unwrap()).unwrap(),
            file
        );
    }

    #[test]
    fn test_plain_version_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFileFetcher::with_base_dir(dir.path());
        let err = fetcher.fetch("13-SNAPSHOT").unwrap_err();
        assert!(matches!(
            err,
            LaunchpadError::ManifestFetch {
                source: FetchErrorKind::NotFound { .. },
                ..
            }
        ));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalFileFetcher::new();
        assert!(fetcher.fetch(dir.path().to_str().unwrap()).is_err());
    }
}
