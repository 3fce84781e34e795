//! Launchpad manifests from Maven repositories.

use super::coordinates::{
    default_coordinates, is_snapshot, ManifestCoordinate, DEFAULT_RELEASE_URL, DEFAULT_SNAPSHOT_URL,
};
use super::metadata::SnapshotMetadata;
use super::ManifestFetcher;
use crate::error::{FetchErrorKind, LaunchpadError, Result};
use crate::parsers::MavenId;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Maven fetcher configuration.
#[derive(Debug, Clone)]
pub struct MavenFetcherConfig {
    pub release_url: String,
    pub snapshot_url: String,
    /// Local cache, laid out like a Maven local repository
    pub cache_dir: PathBuf,
    pub timeout: Duration,
    /// Tried in order; the first one published for a version wins
    pub coordinates: Vec<ManifestCoordinate>,
}

impl MavenFetcherConfig {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            release_url: DEFAULT_RELEASE_URL.to_string(),
            snapshot_url: DEFAULT_SNAPSHOT_URL.to_string(),
            cache_dir: cache_dir.into(),
            timeout: Duration::from_secs(60),
            coordinates: default_coordinates(),
        }
    }
}

/// Downloads launchpad manifests into a local cache.
pub struct MavenFetcher {
    client: Client,
    config: MavenFetcherConfig,
}

fn network_error(url: &str, err: reqwest::Error) -> LaunchpadError {
    LaunchpadError::fetch(
        format!("downloading {url}"),
        FetchErrorKind::Network(err.to_string()),
    )
}

impl MavenFetcher {
    pub fn new(config: MavenFetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("(client setup)", e))?;

        Ok(Self { client, config })
    }

    fn repository_url(&self, version: &str) -> &str {
        let url = if is_snapshot(version) {
            &self.config.snapshot_url
        } else {
            &self.config.release_url
        };
        url.trim_end_matches('/')
    }

    /// Cache location of a downloaded file.
    ///
    /// Snapshots are stored under their `-SNAPSHOT` name.
    #[must_use]
    pub fn cache_path(&self, id: &MavenId) -> PathBuf {
        self.config
            .cache_dir
            .join(id.version_dir())
            .join(id.file_name(&id.version))
    }

    /// GET `url`; `None` when the repository answers 404.
    fn get(&self, url: &str) -> Result<Option<Vec<u8>>> {
        tracing::debug!("GET {url}");
        let response = self.client.get(url).send().map_err(|e| network_error(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LaunchpadError::fetch(
                format!("downloading {url}"),
                FetchErrorKind::HttpStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                },
            ));
        }

        let bytes = response.bytes().map_err(|e| network_error(url, e))?;
        Ok(Some(bytes.to_vec()))
    }

    /// Name of the published file version; timestamped for snapshots.
    fn file_version(&self, id: &MavenId, base: &str) -> Result<Option<String>> {
        if !is_snapshot(&id.version) {
            return Ok(Some(id.version.clone()));
        }

        let url = format!("{base}/{}/maven-metadata.xml", id.version_dir());
        let Some(body) = self.get(&url)? else {
            return Ok(None);
        };
        let metadata = SnapshotMetadata::parse(&String::from_utf8_lossy(&body))?;
        let kind = id.kind.as_deref().unwrap_or(crate::model::DEFAULT_TYPE);
        Ok(metadata.resolve(&id.version, kind, id.classifier.as_deref()))
    }

    /// Fetch one artifact; `None` when it is not published.
    fn fetch_artifact(&self, id: &MavenId) -> Result<Option<PathBuf>> {
        let target = self.cache_path(id);
        let snapshot = is_snapshot(&id.version);
        if !snapshot && target.is_file() {
            tracing::debug!("Using cached {}", target.display());
            return Ok(Some(target));
        }

        let base = self.repository_url(&id.version);
        let Some(file_version) = self.file_version(id, base)? else {
            return Ok(None);
        };
        let url = format!("{base}/{}/{}", id.version_dir(), id.file_name(&file_version));

        let Some(body) = self.get(&url)? else {
            return Ok(None);
        };
        store(&target, &body)?;
        tracing::info!("Downloaded {id} to {}", target.display());
        Ok(Some(target))
    }
}

/// Write `body` to a sibling `.part` file and rename it into place, so a
/// failed write never leaves a truncated file at `target`.
fn store(target: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| LaunchpadError::io(parent, e))?;
    }

    let partial = partial_path(target);
    if let Err(e) = fs::write(&partial, body) {
        let _ = fs::remove_file(&partial);
        return Err(LaunchpadError::io(&partial, e));
    }
    fs::rename(&partial, target).map_err(|e| {
        let _ = fs::remove_file(&partial);
        LaunchpadError::io(target, e)
    })
}

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    target.with_file_name(name)
}

impl ManifestFetcher for MavenFetcher {
    fn fetch(&self, version: &str) -> Result<PathBuf> {
        let mut tried = Vec::with_capacity(self.config.coordinates.len());
        for coordinate in &self.config.coordinates {
            let id = coordinate.at(version);
            if let Some(path) = self.fetch_artifact(&id)? {
                return Ok(path);
            }
            tried.push(id.to_string());
        }

        Err(LaunchpadError::fetch(
            format!("launchpad {version}"),
            FetchErrorKind::NotFound {
                version: version.to_string(),
                tried: tried.join(", "),
            },
        ))
    }

    fn name(&self) -> &'static str {
        "maven"
    }
}
