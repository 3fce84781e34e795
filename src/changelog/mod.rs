//! Commit subjects between two release tags.
//!
//! Each first-party artifact is released from its own repository under a
//! common checkout root. [`GitChangeLogFinder`] opens that repository, peels
//! the two release tags and walks the history in between.

mod git;

pub use git::GitChangeLogFinder;

use crate::error::Result;
use crate::model::CommitEntry;

/// Source of commit subject lines for a release range.
pub trait ChangeLogSource {
    /// Subject lines of the commits in `(from, to]` for `artifact_name`,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchpadError::RepositoryNotFound`] when there is no
    /// repository for the artifact and [`LaunchpadError::TagNotFound`] when
    /// either release tag is missing.
    ///
    /// [`LaunchpadError::RepositoryNotFound`]: crate::error::LaunchpadError::RepositoryNotFound
    /// [`LaunchpadError::TagNotFound`]: crate::error::LaunchpadError::TagNotFound
    fn changes(&self, artifact_name: &str, from: &str, to: &str) -> Result<Vec<CommitEntry>>;
}

impl<T: ChangeLogSource + ?Sized> ChangeLogSource for &T {
    fn changes(&self, artifact_name: &str, from: &str, to: &str) -> Result<Vec<CommitEntry>> {
        (**self).changes(artifact_name, from, to)
    }
}

impl<T: ChangeLogSource + ?Sized> ChangeLogSource for Box<T> {
    fn changes(&self, artifact_name: &str, from: &str, to: &str) -> Result<Vec<CommitEntry>> {
        (**self).changes(artifact_name, from, to)
    }
}

/// Release tag name for an artifact version.
#[must_use]
pub fn tag_name(artifact_name: &str, version: &str) -> String {
    format!("{artifact_name}-{version}")
}
