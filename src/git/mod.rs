//! Repository inspection layer
//!
//! This module provides a trait-based abstraction over the single fact the
//! version engine needs from a repository: the nearest reachable tag, the
//! current commit hash and the number of commits since that tag.
//!
//! # Overview
//!
//! The primary abstraction is the [Describe] trait. The concrete implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A fixed-fact implementation for testing
//!
//! # Usage
//!
//! ```rust,no_run
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let head = git_semver::git::describe(".")?;
//! println!("{} commits since '{}'", head.commits_since_tag, head.last_tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Describe result for the current commit of a repository
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoHead {
    /// Short name of the nearest reachable tag, empty if there is none
    pub last_tag: String,
    /// Full hash of the current commit
    pub hash: String,
    /// Commits after the tag up to and including HEAD.
    ///
    /// Counts from the root commit when `last_tag` is empty.
    pub commits_since_tag: u64,
}

impl RepoHead {
    pub fn new(last_tag: impl Into<String>, hash: impl Into<String>, commits_since_tag: u64) -> Self {
        RepoHead {
            last_tag: last_tag.into(),
            hash: hash.into(),
            commits_since_tag,
        }
    }
}

/// Source of [RepoHead] facts
///
/// ## Thread Safety
///
/// Implementors must be `Send`. `git2::Repository` is not `Sync`, so the
/// trait does not require it.
///
/// ## Error Handling
///
/// Implementations map their backend failures onto
/// [crate::error::GitSemverError::RepoOpen] and
/// [crate::error::GitSemverError::HeadNotFound] where they apply.
pub trait Describe: Send {
    /// Describe the current commit
    ///
    /// # Returns
    /// * `Ok(RepoHead)` - Nearest tag, HEAD hash and distance to the tag
    /// * `Err` - If HEAD cannot be resolved or the history cannot be walked
    fn describe(&self) -> Result<RepoHead>;
}

/// Open the repository at `path` (or one of its parents) and describe its HEAD.
pub fn describe<P: AsRef<Path>>(path: P) -> Result<RepoHead> {
    Git2Repository::open(path)?.describe()
}
