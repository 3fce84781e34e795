//! Artifact-set delta between two releases.
//!
//! # Example
//!
//! ```
//! use launchpad_comparer::diff::DeltaEngine;
//! use launchpad_comparer::model::{ArtifactIdentity, ArtifactRecord, ManifestSnapshot};
//!
//! let api = ArtifactIdentity::new("org.apache.sling", "org.apache.sling.api", None, None);
//! let from: ManifestSnapshot = vec![ArtifactRecord::new(api.clone(), "2.0")].into_iter().collect();
//! let to: ManifestSnapshot = vec![ArtifactRecord::new(api.clone(), "2.1")].into_iter().collect();
//!
//! let delta = DeltaEngine::new().diff(&from, &to);
//! assert_eq!(delta.changed[&api].to, "2.1");
//! ```

mod engine;
mod result;

pub use engine::{diff, DeltaEngine};
pub use result::{DeltaResult, DeltaSummary};
