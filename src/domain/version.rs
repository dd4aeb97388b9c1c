use crate::domain::format;
use crate::domain::pattern::FULL_FORMAT;
use crate::error::{GitSemverError, Result};
use crate::git::RepoHead;
use std::fmt;

/// Tag prefix that is recognized and stripped before parsing
pub const DEFAULT_PREFIX: &str = "v";

/// Number of hash characters used as build metadata
pub const SHORT_HASH_LEN: usize = 8;

/// Version derived from the nearest tag and the commits made since
///
/// Built once from a [RepoHead]; the metadata and prefix can be replaced
/// afterwards through [Version::with_meta] and [Version::with_prefix], which
/// return new values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Version {
    prefix: String,
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: String,
    meta: String,
    commits: u64,
}

impl Version {
    /// Build a version from a describe result
    ///
    /// `v1.2.3-rc.1+build7` yields prefix `v`, `1.2.3`, pre-release `rc.1` and
    /// metadata `build7`. Without explicit metadata, a build with commits after
    /// the tag gets the first eight characters of the commit hash instead.
    /// An empty tag (no tag reachable at all) yields `0.0.0`.
    ///
    /// # Returns
    /// * `Ok(Version)` - The parsed version
    /// * `Err(InvalidTagFormat)` - A non-empty tag that is not `X.Y.Z`
    pub fn from_head(head: &RepoHead) -> Result<Self> {
        let prefix = if head.last_tag.starts_with(DEFAULT_PREFIX) {
            DEFAULT_PREFIX
        } else {
            ""
        };
        let body = &head.last_tag[prefix.len()..];

        let (body, meta) = match body.split_once('+') {
            Some((body, meta)) => (body, meta.to_string()),
            None if head.commits_since_tag > 0 => (body, short_hash(&head.hash).to_string()),
            None => (body, String::new()),
        };

        let (core, pre_release) = match body.split_once('-') {
            Some((core, pre_release)) => (core, pre_release.to_string()),
            None => (body, String::new()),
        };

        let (major, minor, patch) = if core.is_empty() {
            (0, 0, 0)
        } else {
            parse_core(core)?
        };

        Ok(Version {
            prefix: prefix.to_string(),
            major,
            minor,
            patch,
            pre_release,
            meta,
            commits: head.commits_since_tag,
        })
    }

    /// Copy of this version with its build metadata replaced
    pub fn with_meta(&self, meta: impl Into<String>) -> Self {
        Version {
            meta: meta.into(),
            ..self.clone()
        }
    }

    /// Copy of this version with its prefix replaced
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Version {
            prefix: prefix.into(),
            ..self.clone()
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release carried by the tag itself, without any dev suffix
    pub fn pre_release(&self) -> &str {
        &self.pre_release
    }

    pub fn meta(&self) -> &str {
        &self.meta
    }

    /// Commits since the tag
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Render this version with a format pattern such as `x.y.z-p+m`
    pub fn format(&self, pattern: &str) -> Result<String> {
        format::format(self, pattern)
    }
}

impl TryFrom<&RepoHead> for Version {
    type Error = GitSemverError;

    fn try_from(head: &RepoHead) -> Result<Self> {
        Version::from_head(head)
    }
}

/// Renders [FULL_FORMAT]; empty if the version cannot be rendered.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FULL_FORMAT).unwrap_or_default())
    }
}

/// Patch level rendered for a build `commits` commits after its tag
///
/// Untagged work on top of `1.2.3` heads towards `1.2.4`, so the patch is
/// raised by one. A tag that already carries a pre-release keeps its patch.
pub fn patch_for_commits(patch: u64, pre_release: &str, commits: u64) -> u64 {
    if commits > 0 && pre_release.is_empty() {
        patch.saturating_add(1)
    } else {
        patch
    }
}

/// First [SHORT_HASH_LEN] characters of `hash`, or all of it when shorter.
pub fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}

fn parse_core(core: &str) -> Result<(u64, u64, u64)> {
    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return Err(GitSemverError::tag_format("components", core));
    }

    let parse = |component: &'static str, part: &str| {
        part.parse::<u64>()
            .map_err(|_| GitSemverError::tag_format(component, core))
    };

    Ok((
        parse("major", parts[0])?,
        parse("minor", parts[1])?,
        parse("patch", parts[2])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "abcdef1234567890abcdef1234567890abcdef12";

    fn build(tag: &str, commits: u64) -> Result<Version> {
        Version::from_head(&RepoHead::new(tag, HASH, commits))
    }

    #[test]
    fn test_no_tag_is_zero_version() {
        let v = build("", 4).unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (0, 0, 0));
        assert_eq!(v.prefix(), "");
        assert_eq!(v.commits(), 4);
        assert_eq!(v.meta(), "abcdef12");
    }

    #[test]
    fn test_prefixed_tag() {
        let v = build("v1.2.3", 0).unwrap();
        assert_eq!(v.prefix(), "v");
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert_eq!(v.commits(), 0);
        assert_eq!(v.meta(), "");
        assert_eq!(v.pre_release(), "");
    }

    #[test]
    fn test_unprefixed_tag_with_commits_gets_hash_meta() {
        let v = Version::from_head(&RepoHead::new("1.0.0", "abcdef1234567890", 5)).unwrap();
        assert_eq!(v.prefix(), "");
        assert_eq!(v.meta(), "abcdef12");
    }

    #[test]
    fn test_pre_release_and_meta() {
        let v = build("v2.0.0-rc.1+build7", 3).unwrap();
        assert_eq!(v.pre_release(), "rc.1");
        assert_eq!(v.meta(), "build7");
        assert_eq!((v.major(), v.minor(), v.patch()), (2, 0, 0));
    }

    #[test]
    fn test_explicit_meta_wins_over_hash() {
        assert_eq!(build("1.0.0+build7", 0).unwrap().meta(), "build7");
        assert_eq!(build("1.0.0+build7", 2).unwrap().meta(), "build7");
    }

    #[test]
    fn test_split_on_first_separator() {
        let v = build("1.0.0-rc-1+a+b", 0).unwrap();
        assert_eq!(v.pre_release(), "rc-1");
        assert_eq!(v.meta(), "a+b");
    }

    #[test]
    fn test_prefix_only_tag() {
        let v = build("v", 0).unwrap();
        assert_eq!(v.prefix(), "v");
        assert_eq!((v.major(), v.minor(), v.patch()), (0, 0, 0));
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(matches!(
            build("v1.2", 0),
            Err(GitSemverError::InvalidTagFormat { component: "components", ref raw }) if raw == "1.2"
        ));
        assert!(build("1.2.3.4", 0).is_err());
    }

    #[test]
    fn test_non_numeric_component() {
        assert!(matches!(
            build("1.x.3", 0),
            Err(GitSemverError::InvalidTagFormat { component: "minor", .. })
        ));
        assert!(matches!(
            build("1.2.", 0),
            Err(GitSemverError::InvalidTagFormat { component: "patch", .. })
        ));
        assert!(matches!(
            build("release-1.2.3", 0),
            Err(GitSemverError::InvalidTagFormat { component: "components", .. })
        ));
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash(HASH), "abcdef12");
        assert_eq!(short_hash("abc"), "abc");
        assert_eq!(short_hash(""), "");
    }

    #[test]
    fn test_patch_for_commits() {
        assert_eq!(patch_for_commits(3, "", 0), 3);
        assert_eq!(patch_for_commits(3, "", 1), 4);
        assert_eq!(patch_for_commits(3, "rc.1", 5), 3);
    }

    #[test]
    fn test_overrides_return_new_values() {
        let v = build("v1.2.3", 2).unwrap();
        let patched = v.with_meta("ci.42").with_prefix("");
        assert_eq!(patched.meta(), "ci.42");
        assert_eq!(patched.prefix(), "");
        assert_eq!(v.meta(), "abcdef12");
        assert_eq!(v.prefix(), "v");
    }

    #[test]
    fn test_try_from_head() {
        let head = RepoHead::new("0.3.1", HASH, 0);
        let v = Version::try_from(&head).unwrap();
        assert_eq!(v.to_string(), "0.3.1");
    }
}
