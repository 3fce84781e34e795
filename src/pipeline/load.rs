//! Fetch and normalize stage.

use crate::config::AppConfig;
use crate::fetch::{ChainedFetcher, LocalFileFetcher, ManifestFetcher};
use crate::model::ManifestSnapshot;
use crate::parsers::ManifestNormalizer;
use anyhow::{Context, Result};

/// Fetcher chain for the configured repositories.
///
/// Local files are always tried first; Maven repositories follow when the
/// `remote` feature is enabled.
pub fn build_fetcher(config: &AppConfig) -> Result<ChainedFetcher> {
    let chain = ChainedFetcher::new().with(LocalFileFetcher::new());

    #[cfg(feature = "remote")]
    let chain = {
        let repositories = &config.repositories;
        let maven = crate::fetch::MavenFetcher::new(crate::fetch::MavenFetcherConfig {
            release_url: repositories.release_url.clone(),
            snapshot_url: repositories.snapshot_url.clone(),
            cache_dir: repositories.effective_cache_dir(),
            timeout: std::time::Duration::from_secs(repositories.timeout_secs),
            coordinates: crate::fetch::default_coordinates(),
        })
        .context("Failed to set up Maven repository access")?;
        chain.with(maven)
    };

    #[cfg(not(feature = "remote"))]
    let _ = config;

    Ok(chain)
}

/// Fetch and normalize the manifest of one release.
pub fn load_snapshot(
    fetcher: &dyn ManifestFetcher,
    normalizer: &ManifestNormalizer,
    version: &str,
) -> Result<ManifestSnapshot> {
    let path = fetcher
        .fetch(version)
        .with_context(|| format!("Failed to retrieve launchpad {version}"))?;
    tracing::debug!("Launchpad {version}: {}", path.display());

    let snapshot = normalizer
        .load(&path)
        .with_context(|| format!("Failed to parse launchpad {version} ({})", path.display()))?;
    tracing::info!("Launchpad {version}: {} artifacts", snapshot.len());
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_local_feature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.json");
        std::fs::write(
            &path,
            r#"{"id":"g:f:1","bundles":["org.apache.sling:org.apache.sling.api:2.0"]}"#,
        )
        .unwrap();

        let snapshot = load_snapshot(
            &LocalFileFetcher::new(),
            &ManifestNormalizer::default(),
            path.to_str().unwrap(),
        )
        .unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_unparseable_manifest_names_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        std::fs::write(&path, "this is not a manifest").unwrap();
        let version = path.to_str().unwrap();

        let err = load_snapshot(&LocalFileFetcher::new(), &ManifestNormalizer::default(), version)
            .unwrap_err();
        assert!(err.to_string().contains(version));
    }
}
