use crate::error::{GitSemverError, Result};
use crate::git::{Describe, RepoHead};
use std::path::PathBuf;

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    head: Option<RepoHead>,
}

impl MockRepository {
    /// Create a new mock repository with no commits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository whose HEAD describes as `head`
    pub fn with_head(head: RepoHead) -> Self {
        MockRepository { head: Some(head) }
    }

    /// Replace the described HEAD
    pub fn set_head(&mut self, head: RepoHead) {
        self.head = Some(head);
    }
}

impl Describe for MockRepository {
    fn describe(&self) -> Result<RepoHead> {
        self.head.clone().ok_or_else(|| GitSemverError::HeadNotFound {
            path: PathBuf::from("<mock>"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_without_head() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.describe(),
            Err(GitSemverError::HeadNotFound { .. })
        ));
    }

    #[test]
    fn test_mock_repository_returns_head() {
        let head = RepoHead::new("v1.0.0", "abcdef1234567890", 3);
        let repo = MockRepository::with_head(head.clone());
        assert_eq!(repo.describe().unwrap(), head);
    }

    #[test]
    fn test_mock_repository_set_head() {
        let mut repo = MockRepository::default();
        repo.set_head(RepoHead::new("", "0123456789abcdef", 1));
        assert_eq!(repo.describe().unwrap().commits_since_tag, 1);
    }
}
