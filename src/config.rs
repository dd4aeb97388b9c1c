use crate::error::{GitSemverError, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "gitsemver.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE_NAME: &str = ".gitsemver.toml";

/// Defaults applied when the command line does not say otherwise.
///
/// Every field is optional; command-line flags always take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Format pattern used when no format flag is given (e.g. `x.y.z-p`)
    #[serde(default)]
    pub format: Option<String>,

    /// Prefix replacing the one detected from the tag
    #[serde(default)]
    pub prefix: Option<String>,

    /// Build metadata replacing the derived one
    #[serde(default)]
    pub meta: Option<String>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in the repository directory
/// 3. `.gitsemver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_dir` - Directory of the repository being versioned
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_dir: &Path) -> Result<Config> {
    match locate_config(config_path, repo_dir) {
        Some(path) => parse_config_file(&path),
        None => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn locate_config(config_path: Option<&Path>, repo_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    let repo_config = repo_dir.join(CONFIG_FILE_NAME);
    if repo_config.exists() {
        return Some(repo_config);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn parse_config_file(path: &Path) -> Result<Config> {
    debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(path)?;
    toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("{}: {}", path.display(), e)))
}
