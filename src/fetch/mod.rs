//! Manifest retrieval.
//!
//! A release identifier is either a path to a manifest on disk or a
//! launchpad version, which is downloaded from a Maven repository when the
//! `remote` feature is enabled.

mod chained;
mod coordinates;
mod local;
#[cfg(feature = "remote")]
mod maven;
#[cfg(feature = "remote")]
mod metadata;
mod traits;

pub use chained::ChainedFetcher;
pub use coordinates::{
    default_coordinates, is_snapshot, ManifestCoordinate, DEFAULT_RELEASE_URL, DEFAULT_SNAPSHOT_URL,
};
pub use local::LocalFileFetcher;
#[cfg(feature = "remote")]
pub use maven::{MavenFetcher, MavenFetcherConfig};
#[cfg(feature = "remote")]
pub use metadata::SnapshotMetadata;
pub use traits::ManifestFetcher;
