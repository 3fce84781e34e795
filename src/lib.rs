//! Differences between two releases of the Apache Sling launchpad.
//!
//! `launchpad-comparer` reads the artifact manifests of two releases, works
//! out which bundles were added, removed or changed version, and attributes
//! every changed first-party bundle to the tickets fixed in between, using
//! the git history of the bundle and the issue tracker.
//!
//! ## Modules
//!
//! - **[`model`]**: [`ArtifactIdentity`], [`ArtifactRecord`] and the
//!   [`ManifestSnapshot`] of one release.
//! - **[`parsers`]**: readers for OSGi feature JSON and provisioning model
//!   manifests, and the [`ManifestNormalizer`] turning either into a snapshot.
//! - **[`fetch`]**: resolving a release to a manifest file, locally or from a
//!   Maven repository.
//! - **[`diff`]**: the [`DeltaEngine`].
//! - **[`changelog`]**: commit subjects between two release tags.
//! - **[`tickets`]**: ticket id extraction and issue tracker lookups.
//! - **[`reports`]**: the [`ReportEmitter`] and its plaintext and JSON output.
//!
//! ## Comparing two manifests
//!
//! ```no_run
//! use launchpad_comparer::changelog::GitChangeLogFinder;
//! use launchpad_comparer::reports::{PlaintextReporter, ReportEmitter, ReportMetadata};
//! use launchpad_comparer::tickets::{NoOpTracker, TicketPattern, TicketResolver};
//! use launchpad_comparer::{DeltaEngine, ManifestNormalizer};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let normalizer = ManifestNormalizer::default();
//!     let from = normalizer.load(Path::new("starter-12.slingosgifeature"))?;
//!     let to = normalizer.load(Path::new("starter-13.slingosgifeature"))?;
//!     let delta = DeltaEngine::new().diff(&from, &to);
//!
//!     let emitter = ReportEmitter::new(
//!         "org.apache.sling",
//!         GitChangeLogFinder::new("/src/sling"),
//!         TicketResolver::new(TicketPattern::default(), NoOpTracker),
//!     );
//!     let metadata = ReportMetadata::new("12", "13", "org.apache.sling");
//!     emitter.emit(&delta, metadata, &PlaintextReporter::new().no_color(), &mut std::io::stdout())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): downloads manifests from Maven repositories and
//!   looks up tickets in JIRA. Adds `reqwest`.

#![warn(clippy::unwrap_used)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

pub mod changelog;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod tickets;

pub use changelog::{ChangeLogSource, GitChangeLogFinder};
pub use diff::{DeltaEngine, DeltaResult};
pub use error::{LaunchpadError, Result};
pub use model::{ArtifactIdentity, ArtifactRecord, ManifestSnapshot, VersionChange};
pub use parsers::ManifestNormalizer;
pub use reports::{ReportEmitter, ReportFormat};
pub use tickets::{IssueTracker, TicketPattern, TicketResolver};
