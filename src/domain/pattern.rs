//! Format pattern language
//!
//! A pattern selects which parts of a [Version](super::Version) are rendered.
//! The grammar is fixed: `x` followed by the optional parts `.y`, `.z`, `-p`,
//! `-r` and `+m`, each at most once and in exactly that order.
//!
//! | token | part              | separator |
//! |-------|-------------------|-----------|
//! | `x`   | major             | `.`       |
//! | `y`   | minor             | `.`       |
//! | `z`   | patch             | `.`       |
//! | `p`   | pre-release       | `-`       |
//! | `r`   | release candidate | `-`       |
//! | `m`   | metadata          | `+`       |

use crate::error::{GitSemverError, Result};
use std::fmt;
use std::str::FromStr;

/// Major, minor, patch, pre-release and metadata
pub const FULL_FORMAT: &str = "x.y.z-p+m";
/// Everything except metadata
pub const NO_META_FORMAT: &str = "x.y.z-p";
/// Plain `major.minor.patch`
pub const NO_PRE_FORMAT: &str = "x.y.z";
/// `major.minor`
pub const NO_PATCH_FORMAT: &str = "x.y";
/// Major only
pub const NO_MINOR_FORMAT: &str = "x";
/// `major.minor.patch` with a release-candidate suffix
pub const RELEASE_CANDIDATE_FORMAT: &str = "x.y.z-r";

/// A renderable part of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Major,
    Minor,
    Patch,
    PreRelease,
    ReleaseCandidate,
    Meta,
}

impl Token {
    /// Separator placed before this part when output precedes it
    pub fn separator(self) -> char {
        match self {
            Token::Major | Token::Minor | Token::Patch => '.',
            Token::PreRelease | Token::ReleaseCandidate => '-',
            Token::Meta => '+',
        }
    }
}

/// Parser states in grammar order, each paired with the literal it consumes.
const TRANSITIONS: [(Token, &str); 6] = [
    (Token::Major, "x"),
    (Token::Minor, ".y"),
    (Token::Patch, ".z"),
    (Token::PreRelease, "-p"),
    (Token::ReleaseCandidate, "-r"),
    (Token::Meta, "+m"),
];

/// A parsed format pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPattern {
    tokens: Vec<Token>,
}

impl FormatPattern {
    /// Parse a pattern such as `x.y.z-p+m`
    ///
    /// Walks the states in order; each state either consumes its literal or
    /// falls through to the next one. The major state is mandatory and the
    /// whole input must be consumed by the time the last state is passed.
    ///
    /// # Returns
    /// * `Ok(FormatPattern)` - The tokens present, in rendering order
    /// * `Err(InvalidFormatPattern)` - Unknown, repeated or out-of-order tokens
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut rest = pattern;
        let mut tokens = Vec::with_capacity(TRANSITIONS.len());

        for (token, literal) in TRANSITIONS {
            match rest.strip_prefix(literal) {
                Some(tail) => {
                    tokens.push(token);
                    rest = tail;
                }
                None if token == Token::Major => {
                    return Err(GitSemverError::pattern(pattern));
                }
                None => {}
            }
        }

        if !rest.is_empty() {
            return Err(GitSemverError::pattern(pattern));
        }

        Ok(FormatPattern { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn contains(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }
}

impl FromStr for FormatPattern {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        FormatPattern::parse(s)
    }
}

impl fmt::Display for FormatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (token, literal) in TRANSITIONS {
            if self.contains(token) {
                write!(f, "{}", literal)?;
            }
        }
        Ok(())
    }
}
