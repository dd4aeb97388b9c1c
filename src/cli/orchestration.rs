//! Main workflow orchestration logic
//!
//! Resolves the repository, loads configuration, describes HEAD and renders
//! the version. Kept apart from `main.rs` so the workflow can be driven
//! programmatically without depending on clap.

use std::path::PathBuf;

use anyhow::Result;
use log::{debug, warn};

use crate::boundary;
use crate::config::{self, Config};
use crate::domain::pattern::{
    FULL_FORMAT, NO_META_FORMAT, NO_MINOR_FORMAT, NO_PATCH_FORMAT, NO_PRE_FORMAT,
    RELEASE_CANDIDATE_FORMAT,
};
use crate::domain::Version;
use crate::git::{Describe, Git2Repository};

/// Arguments for the version workflow
///
/// Mirrors the CLI flags in a form suitable for orchestration logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Repository to describe; the current directory when `None`
    pub repo: Option<PathBuf>,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Explicit format pattern, overriding every other format option
    pub format: Option<String>,

    /// Prefix replacing the detected one
    pub prefix: Option<String>,

    /// Build metadata replacing the derived one
    pub set_meta: Option<String>,

    pub no_hash: bool,
    pub no_meta: bool,
    pub no_pre: bool,
    pub no_patch: bool,
    pub no_minor: bool,
    pub release_candidate: bool,
}

/// Pick the format pattern for a run
///
/// Precedence: explicit pattern, no-minor, no-patch, no-pre, no-hash/no-meta,
/// release-candidate, the configured format, then the full format.
pub fn select_format(args: &RunArgs, config: &Config) -> String {
    if let Some(format) = args.format.as_deref().filter(|f| !f.is_empty()) {
        return format.to_string();
    }

    let selected = if args.no_minor {
        NO_MINOR_FORMAT
    } else if args.no_patch {
        NO_PATCH_FORMAT
    } else if args.no_pre {
        NO_PRE_FORMAT
    } else if args.no_hash || args.no_meta {
        NO_META_FORMAT
    } else if args.release_candidate {
        RELEASE_CANDIDATE_FORMAT
    } else if let Some(format) = config.format.as_deref().filter(|f| !f.is_empty()) {
        format
    } else {
        FULL_FORMAT
    };

    selected.to_string()
}

/// Derive the version string for whatever `source` describes
pub fn derive_version<D: Describe>(source: &D, args: &RunArgs, config: &Config) -> Result<String> {
    let head = source.describe()?;
    debug!("describe: {:?}", head);

    for warning in boundary::inspect(&head) {
        warn!("{}", warning);
    }

    let mut version = Version::from_head(&head)?;

    let meta = non_empty(&args.set_meta).or(non_empty(&config.meta));
    if let Some(meta) = meta {
        version = version.with_meta(meta);
    }

    let prefix = non_empty(&args.prefix).or(non_empty(&config.prefix));
    if let Some(prefix) = prefix {
        version = version.with_prefix(prefix);
    }

    let pattern = select_format(args, config);
    debug!("rendering with pattern {}", pattern);

    Ok(version.format(&pattern)?)
}

/// Main version workflow
///
/// 1. Resolve the repository path (current directory by default)
/// 2. Open the repository
/// 3. Load configuration relative to the repository root
/// 4. Describe HEAD and render the version
pub fn run(args: &RunArgs) -> Result<String> {
    let repo_path = match &args.repo {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let repo = Git2Repository::open(&repo_path)?;
    let config = config::load_config(args.config_path.as_deref(), repo.root())?;

    derive_version(&repo, args, &config)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
