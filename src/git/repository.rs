use crate::error::{GitSemverError, Result};
use crate::git::RepoHead;
use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode, Oid, Repository as Git2Repo};
use log::debug;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    path: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = Git2Repo::discover(&path).map_err(|source| GitSemverError::RepoOpen {
            path: path.clone(),
            source,
        })?;

        debug!("opened repository at {}", repo.path().display());
        Ok(Git2Repository { repo, path })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        let path = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();
        Git2Repository { repo, path }
    }

    /// Working directory of the repository, or the git dir for bare repositories
    pub fn root(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(GitSemverError::HeadNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        Ok(head.peel_to_commit()?.id())
    }

    /// Short name of the nearest tag reachable from `oid`.
    fn nearest_tag(&self, oid: Oid) -> Result<Option<String>> {
        if self.repo.tag_names(None)?.is_empty() {
            return Ok(None);
        }

        let mut describe_options = DescribeOptions::new();
        describe_options.describe_tags();

        let object = self.repo.find_object(oid, None)?;
        let description = match object.describe(&describe_options) {
            Ok(description) => description,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut format_options = DescribeFormatOptions::new();
        format_options.abbreviated_size(0);
        Ok(Some(description.format(Some(&format_options))?))
    }

    fn tag_commit_oid(&self, tag_name: &str) -> Result<Oid> {
        let commit = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))?
            .peel_to_commit()?;
        Ok(commit.id())
    }

    /// Count commits reachable from `head` but not from `stop`.
    fn count_commits(&self, head: Oid, stop: Option<Oid>) -> Result<u64> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(head)?;
        if let Some(stop) = stop {
            revwalk.hide(stop)?;
        }

        let mut count = 0;
        for oid in revwalk {
            oid?;
            count += 1;
        }
        Ok(count)
    }
}

impl super::Describe for Git2Repository {
    fn describe(&self) -> Result<RepoHead> {
        let head_oid = self.head_oid()?;
        let last_tag = self.nearest_tag(head_oid)?;

        let stop = match &last_tag {
            Some(tag) => Some(self.tag_commit_oid(tag)?),
            None => None,
        };
        let commits_since_tag = self.count_commits(head_oid, stop)?;

        debug!(
            "HEAD {} is {} commit(s) after tag {:?}",
            head_oid, commits_since_tag, last_tag
        );

        Ok(RepoHead {
            last_tag: last_tag.unwrap_or_default(),
            hash: head_oid.to_string(),
            commits_since_tag,
        })
    }
}
