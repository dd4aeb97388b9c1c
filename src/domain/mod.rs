//! Domain logic - pure versioning rules independent of git operations

pub mod format;
pub mod pattern;
pub mod prerelease;
pub mod version;

pub use format::{format, render};
pub use pattern::{
    FormatPattern, Token, FULL_FORMAT, NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT,
    NO_PRE_FORMAT, RELEASE_CANDIDATE_FORMAT,
};
pub use prerelease::{render_pre_release, render_release_candidate, ReleaseCandidate};
pub use version::{patch_for_commits, short_hash, Version, DEFAULT_PREFIX};
