use crate::domain::version::SHORT_HASH_LEN;
use crate::git::RepoHead;
use std::fmt;

/// Notices about describe results near repository boundaries.
/// These never change the derived version; they are only reported.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag is reachable from HEAD, so the version starts at 0.0.0
    NoReachableTag { hash: String },
    /// Commit hash is shorter than the metadata length and is used whole
    ShortHash { hash: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReachableTag { hash } => {
                let short_hash = hash.get(..7).unwrap_or(hash.as_str());
                write!(
                    f,
                    "No tag reachable from {}; versioning from 0.0.0",
                    short_hash
                )
            }
            BoundaryWarning::ShortHash { hash } => write!(
                f,
                "Commit hash '{}' is shorter than {} characters; using it unabridged",
                hash, SHORT_HASH_LEN
            ),
        }
    }
}

/// Collect the warnings that apply to a describe result.
pub fn inspect(head: &RepoHead) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    if head.last_tag.is_empty() {
        warnings.push(BoundaryWarning::NoReachableTag {
            hash: head.hash.clone(),
        });
    }

    let hash_becomes_meta = head.commits_since_tag > 0 && !head.last_tag.contains('+');
    if hash_becomes_meta && head.hash.len() < SHORT_HASH_LEN {
        warnings.push(BoundaryWarning::ShortHash {
            hash: head.hash.clone(),
        });
    }

    warnings
}
