//! Boot Configuration
//!
//! Loads the sidecar boot configuration from `~/.sidecar/boot.json`.
//! Bootstrap must never fail because of a bad config file, so every load
//! error collapses to the built-in defaults.

use std::fs;
use std::path::PathBuf;

use crate::types::{default_config, BootConfig};

/// Directory name under the user's home for all sidecar data.
const SIDECAR_DIR_NAME: &str = ".sidecar";

/// Config file name within the sidecar directory.
const CONFIG_FILENAME: &str = "boot.json";

/// Returns the sidecar base directory: `~/.sidecar`.
pub fn get_sidecar_dir() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
    home.join(SIDECAR_DIR_NAME)
}

/// Returns the full path to the boot config file: `~/.sidecar/boot.json`.
pub fn get_config_path() -> PathBuf {
    get_sidecar_dir().join(CONFIG_FILENAME)
}

/// Load the boot config from disk.
///
/// Missing or unparseable files yield the defaults; unset fields are filled
/// in by serde defaults. Nothing is ever written back.
pub fn load_config() -> BootConfig {
    load_config_from(&get_config_path())
}

/// Load a boot config from an explicit path (split out for tests).
pub fn load_config_from(config_path: &std::path::Path) -> BootConfig {
    if !config_path.exists() {
        return default_config();
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(_) => return default_config(),
    };

    match serde_json::from_str::<BootConfig>(&contents) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "ignoring malformed boot config at {}: {}",
                config_path.display(),
                err
            );
            default_config()
        }
    }
}

/// Resolve a path that may start with `~` to an absolute path.
///
/// If the path starts with `~`, the tilde is replaced with the user's home
/// directory. Otherwise the path is returned as-is.
pub fn resolve_path(p: &str) -> PathBuf {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest)
    } else {
        PathBuf::from(p)
    }
}
