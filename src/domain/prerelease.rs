//! Pre-release and release-candidate rendering
//!
//! Both rules are pure functions of the tag's pre-release string and the
//! number of commits made since the tag.

use crate::error::{GitSemverError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Label used when the tag carries no pre-release at all
pub const DEFAULT_RELEASE_CANDIDATE: &str = "rc.1";

fn release_candidate_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^([a-z]+)\.([0-9]+)$").expect("release-candidate pattern is valid")
    })
}

/// Pre-release rendered for a build `commits` commits after its tag
///
/// - `commits == 0`: the tag's own pre-release, possibly empty
/// - no pre-release on the tag: `dev.<commits>`
/// - otherwise: `<pre_release>.dev.<commits>`
pub fn render_pre_release(pre_release: &str, commits: u64) -> String {
    if commits == 0 {
        pre_release.to_string()
    } else if pre_release.is_empty() {
        format!("dev.{}", commits)
    } else {
        format!("{}.dev.{}", pre_release, commits)
    }
}

/// Release-candidate label rendered for a build `commits` commits after its tag
///
/// An empty pre-release yields `rc.1`. Otherwise the pre-release must look like
/// `<label>.<number>`, and the number moves on by one once there are commits
/// after the tag.
pub fn render_release_candidate(pre_release: &str, commits: u64) -> Result<String> {
    if pre_release.is_empty() {
        return Ok(DEFAULT_RELEASE_CANDIDATE.to_string());
    }

    let candidate = ReleaseCandidate::parse(pre_release)?;
    let candidate = if commits > 0 {
        candidate.next().ok_or_else(|| {
            GitSemverError::InvalidPreReleaseForReleaseCandidate(pre_release.to_string())
        })?
    } else {
        candidate
    };

    Ok(candidate.to_string())
}

/// Pre-release of the form `<label>.<number>`, e.g. `rc.2` or `beta.1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCandidate {
    /// Lowercase letters before the dot
    pub label: String,
    /// Iteration after the dot
    pub number: u64,
}

impl ReleaseCandidate {
    pub fn new(label: impl Into<String>, number: u64) -> Self {
        ReleaseCandidate {
            label: label.into(),
            number,
        }
    }

    /// Parse a pre-release that must match `^[a-z]+\.[0-9]+$`
    ///
    /// # Returns
    /// * `Ok(ReleaseCandidate)` - Label and number
    /// * `Err(InvalidPreReleaseForReleaseCandidate)` - Any other shape, or a
    ///   number too large to represent
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || GitSemverError::InvalidPreReleaseForReleaseCandidate(s.to_string());

        let captures = release_candidate_shape().captures(s).ok_or_else(invalid)?;
        let label = captures.get(1).ok_or_else(invalid)?.as_str();
        let number = captures
            .get(2)
            .ok_or_else(invalid)?
            .as_str()
            .parse::<u64>()
            .map_err(|_| invalid())?;

        Ok(ReleaseCandidate::new(label, number))
    }

    /// The following iteration, `None` on overflow
    pub fn next(&self) -> Option<Self> {
        Some(ReleaseCandidate {
            label: self.label.clone(),
            number: self.number.checked_add(1)?,
        })
    }
}

impl fmt::Display for ReleaseCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.number)
    }
}
