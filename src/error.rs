use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Cannot open repository at '{}': {}", .path.display(), .source)]
    RepoOpen {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Repository at '{}' has no commits", .path.display())]
    HeadNotFound { path: PathBuf },

    #[error("Invalid version tag: cannot parse {component} in '{raw}'")]
    InvalidTagFormat { component: &'static str, raw: String },

    #[error("Invalid format pattern: '{0}'")]
    InvalidFormatPattern(String),

    #[error(
        "Pre-release '{0}' does not match the release-candidate format (rc.1, other.1)"
    )]
    InvalidPreReleaseForReleaseCandidate(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }

    /// Create a tag format error for the named version component
    pub fn tag_format(component: &'static str, raw: impl Into<String>) -> Self {
        GitSemverError::InvalidTagFormat {
            component,
            raw: raw.into(),
        }
    }

    /// Create a format pattern error
    pub fn pattern(pattern: impl Into<String>) -> Self {
        GitSemverError::InvalidFormatPattern(pattern.into())
    }
}
