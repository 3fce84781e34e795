use std::path::{Path, PathBuf};

use git2::{ErrorCode, Oid, Repository, Sort};

use super::{tag_name, ChangeLogSource};
use crate::error::{LaunchpadError, Result};
use crate::model::CommitEntry;

/// Reads change logs from per-artifact git repositories below a checkout root.
#[derive(Debug, Clone)]
pub struct GitChangeLogFinder {
    checkout_root: PathBuf,
}

impl GitChangeLogFinder {
    pub fn new(checkout_root: impl Into<PathBuf>) -> Self {
        Self {
            checkout_root: checkout_root.into(),
        }
    }

    #[must_use]
    pub fn checkout_root(&self) -> &Path {
        &self.checkout_root
    }

    /// Directory holding the repository for `artifact_name`.
    ///
    /// Dots in the artifact name become dashes:
    /// `org.apache.sling.api` lives in `<root>/org-apache-sling-api`.
    #[must_use]
    pub fn repository_path(&self, artifact_name: &str) -> PathBuf {
        self.checkout_root.join(artifact_name.replace('.', "-"))
    }

    fn open(&self, path: &Path) -> Result<Repository> {
        Repository::open(path).map_err(|err| {
            tracing::debug!("Cannot open repository at {}: {err}", path.display());
            LaunchpadError::RepositoryNotFound {
                path: path.to_path_buf(),
            }
        })
    }
}

/// Resolve `refs/tags/<tag>` to the commit it (eventually) points at.
fn tag_commit(repo: &Repository, path: &Path, tag: &str) -> Result<Oid> {
    let reference = match repo.find_reference(&format!("refs/tags/{tag}")) {
        Ok(reference) => reference,
        Err(err) if err.code() == ErrorCode::NotFound => {
            return Err(LaunchpadError::TagNotFound {
                tag: tag.to_string(),
                path: path.to_path_buf(),
            })
        }
        Err(err) => return Err(LaunchpadError::git(format!("reading tag {tag}"), err)),
    };

    reference
        .peel_to_commit()
        .map(|commit| commit.id())
        .map_err(|err| LaunchpadError::git(format!("peeling tag {tag}"), err))
}

fn first_line(message: &[u8]) -> String {
    let line = message
        .split(|b| *b == b'\n')
        .next()
        .unwrap_or_default();
    String::from_utf8_lossy(line).trim_end_matches('\r').to_string()
}

impl ChangeLogSource for GitChangeLogFinder {
    fn changes(&self, artifact_name: &str, from: &str, to: &str) -> Result<Vec<CommitEntry>> {
        let path = self.repository_path(artifact_name);
        let repo = self.open(&path)?;

        let from_tag = tag_name(artifact_name, from);
        let to_tag = tag_name(artifact_name, to);
        let from_commit = tag_commit(&repo, &path, &from_tag)?;
        let to_commit = tag_commit(&repo, &path, &to_tag)?;

        let context = || format!("walking {from_tag}..{to_tag} in {}", path.display());
        let mut revwalk = repo.revwalk().map_err(|e| LaunchpadError::git(context(), e))?;
        revwalk
            .set_sorting(Sort::TIME)
            .map_err(|e| LaunchpadError::git(context(), e))?;
        revwalk
            .push(to_commit)
            .map_err(|e| LaunchpadError::git(context(), e))?;
        revwalk
            .hide(from_commit)
            .map_err(|e| LaunchpadError::git(context(), e))?;

        let mut subjects = Vec::new();
        for oid in revwalk {
            let oid = oid.map_err(|e| LaunchpadError::git(context(), e))?;
            let commit = repo
                .find_commit(oid)
                .map_err(|e| LaunchpadError::git(context(), e))?;
            subjects.push(first_line(commit.message_bytes()));
        }

        tracing::debug!(
            "{} commits between {from_tag} and {to_tag}",
            subjects.len()
        );
        Ok(subjects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_path_replaces_dots() {
        let finder = GitChangeLogFinder::new("/checkout");
        assert_eq!(
            finder.repository_path("org.apache.sling.engine"),
            PathBuf::from("/checkout/org-apache-sling-engine")
        );
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line(b"SLING-1 Fix\n\nLonger body"), "SLING-1 Fix");
        assert_eq!(first_line(b"single"), "single");
        assert_eq!(first_line(b"windows\r\nbody"), "windows");
        assert_eq!(first_line(b""), "");
    }

    #[test]
    fn test_missing_repository() {
        let temp = tempfile::TempDir::new().expect("tempdir");
        let finder = GitChangeLogFinder::new(temp.path());
        let err = finder
            .changes("org.apache.sling.missing", "1.0", "1.1")
            .unwrap_err();
        assert!(matches!(err, LaunchpadError::RepositoryNotFound { .. }));
        assert!(!err.is_fatal());
    }
}
