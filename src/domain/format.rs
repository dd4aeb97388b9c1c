//! Rendering of a [Version] through a [FormatPattern]

use crate::domain::pattern::{FormatPattern, Token};
use crate::domain::prerelease::{render_pre_release, render_release_candidate};
use crate::domain::version::{patch_for_commits, Version};
use crate::error::Result;

/// Output accumulator that only emits a separator between two non-empty parts.
#[derive(Debug, Default)]
struct Segments {
    buf: String,
}

impl Segments {
    fn push(&mut self, part: &str, separator: char) {
        if part.is_empty() {
            return;
        }
        if !self.buf.is_empty() {
            self.buf.push(separator);
        }
        self.buf.push_str(part);
    }

    fn into_string(self) -> String {
        self.buf
    }
}

/// Render `version` with a pattern string such as `x.y.z-p+m`
///
/// # Returns
/// * `Ok(String)` - The prefix followed by the selected parts
/// * `Err(InvalidFormatPattern)` - If the pattern does not parse
/// * `Err(InvalidPreReleaseForReleaseCandidate)` - If `r` is requested and the
///   pre-release is not of the form `<label>.<number>`
pub fn format(version: &Version, pattern: &str) -> Result<String> {
    render(version, &FormatPattern::parse(pattern)?)
}

/// Render `version` with an already parsed pattern
pub fn render(version: &Version, pattern: &FormatPattern) -> Result<String> {
    let mut segments = Segments::default();

    for &token in pattern.tokens() {
        let part = match token {
            Token::Major => version.major().to_string(),
            Token::Minor => version.minor().to_string(),
            Token::Patch => {
                patch_for_commits(version.patch(), version.pre_release(), version.commits())
                    .to_string()
            }
            Token::PreRelease => render_pre_release(version.pre_release(), version.commits()),
            Token::ReleaseCandidate => {
                render_release_candidate(version.pre_release(), version.commits())?
            }
            Token::Meta => version.meta().to_string(),
        };
        segments.push(&part, token.separator());
    }

    Ok(format!("{}{}", version.prefix(), segments.into_string()))
}
