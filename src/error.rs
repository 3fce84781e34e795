//! Unified error types for launchpad-comparer.
//!
//! Errors fall into two classes. Manifest retrieval and parsing failures are
//! fatal and abort the run. Change-log and issue tracker failures are scoped
//! to a single changed artifact; the report emitter logs them and moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for launchpad-comparer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LaunchpadError {
    /// A required manifest could not be retrieved
    #[error("Failed to fetch manifest: {context}")]
    ManifestFetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// A retrieved manifest could not be read into artifact records
    #[error("Failed to parse manifest: {context}")]
    ManifestParse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// No source-control repository at the derived path
    #[error("No git repository found at {}", path.display())]
    RepositoryNotFound { path: PathBuf },

    /// A release tag is missing from the artifact's repository
    #[error("No tag {tag} found in git repo at {}", path.display())]
    TagNotFound { tag: String, path: PathBuf },

    /// libgit2 failure while reading refs or walking history
    #[error("Git operation failed: {context}")]
    Git {
        context: String,
        #[source]
        source: git2::Error,
    },

    /// Issue tracker lookup failed
    #[error("Issue tracker lookup failed: {context}")]
    IssueTracker {
        context: String,
        #[source]
        source: TrackerErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific manifest retrieval error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("No manifest found for version {version} (tried: {tried})")]
    NotFound { version: String, tried: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Repository returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid maven-metadata.xml: {0}")]
    InvalidMetadata(String),

    #[error("Remote retrieval is disabled in this build")]
    RemoteDisabled,
}

/// Specific manifest parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown manifest format - expected a feature JSON or provisioning model")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Malformed artifact id '{id}': {reason}")]
    InvalidArtifactId { id: String, reason: String },

    #[error("Line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Manifest file is unreadable: {0}")]
    Unreadable(String),
}

/// Specific issue tracker error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrackerErrorKind {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for launchpad-comparer operations
pub type Result<T> = std::result::Result<T, LaunchpadError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl LaunchpadError {
    /// Create a manifest fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::ManifestFetch {
            context: context.into(),
            source,
        }
    }

    /// Create a manifest parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::ManifestParse {
            context: context.into(),
            source,
        }
    }

    /// Create a syntax error for a line of a text manifest
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::parse(
            "provisioning model",
            ParseErrorKind::Syntax {
                line,
                message: message.into(),
            },
        )
    }

    /// Create a git error with context
    pub fn git(context: impl Into<String>, source: git2::Error) -> Self {
        Self::Git {
            context: context.into(),
            source,
        }
    }

    /// Create an issue tracker error with context
    pub fn tracker(context: impl Into<String>, source: TrackerErrorKind) -> Self {
        Self::IssueTracker {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error must abort the whole comparison.
    ///
    /// Change-log and tracker failures only affect the attribution of one
    /// changed artifact.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::RepositoryNotFound { .. }
                | Self::TagNotFound { .. }
                | Self::Git { .. }
                | Self::IssueTracker { .. }
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for LaunchpadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LaunchpadError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// producing a chain like `"reading manifest for 12: JSON deserialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<LaunchpadError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Repository and tag errors carry their own path and are returned as-is.
fn add_context_to_error(err: LaunchpadError, new_ctx: &str) -> LaunchpadError {
    match err {
        LaunchpadError::ManifestFetch {
            context: existing,
            source,
        } => LaunchpadError::ManifestFetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LaunchpadError::ManifestParse {
            context: existing,
            source,
        } => LaunchpadError::ManifestParse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LaunchpadError::Git {
            context: existing,
            source,
        } => LaunchpadError::Git {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LaunchpadError::IssueTracker {
            context: existing,
            source,
        } => LaunchpadError::IssueTracker {
            context: chain_context(new_ctx, &existing),
            source,
        },
        LaunchpadError::Io {
            path,
            message,
            source,
        } => LaunchpadError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        LaunchpadError::Config(msg) => LaunchpadError::Config(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
