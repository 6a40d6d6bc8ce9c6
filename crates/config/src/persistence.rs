//! Configuration file discovery and reading.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, with comments and trailing commas) and plain JSON
//! (`.json`) are accepted; the JSON5 parser reads both.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./mo.json5` or `./mo.json`
//! 2. User: `~/.config/mo/config.json5` or `~/.config/mo/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["mo.json5", "mo.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "mo";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Searches in the following order:
///
/// 1. Local directory: `./mo.json5`, `./mo.json`
/// 2. User config directory: `~/.config/mo/config.json5`, `~/.config/mo/config.json`
///
/// # Returns
///
/// Returns `Some(path)` if a config file is found, `None` otherwise.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Same as [`find_config_file`], with explicit local and user directories.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = CONFIG_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.exists())
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use mo_config::persistence::read_config_file;
/// use mo_config::Config;
///
/// # fn main() -> mo_config::Result<()> {
/// let config: Config = read_config_file("mo.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}
