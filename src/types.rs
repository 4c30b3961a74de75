//! Sidecar Boot - Type Definitions
//!
//! Shared types for the bootstrap layer: the two capabilities the process is
//! constructed with (proxy policy and resource resolution), the typed
//! snapshot of the proxy environment, and the boot configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ─── Proxy Discovery ─────────────────────────────────────────────

/// Map from protocol scheme ("http", "https", "socks", "all") to proxy URL.
pub type ProxyTable = HashMap<String, String>;

/// Proxy discovery as the rest of the process sees it.
///
/// HTTP stacks cache proxy settings when the client is first built, so the
/// provider chosen at bootstrap is the one the whole process lives with.
pub trait ProxyProvider: Send + Sync {
    fn proxies(&self) -> ProxyTable;
}

/// Snapshot of the proxy environment taken before the scrub removes it.
///
/// Downstream code reads this struct instead of the ambient environment;
/// after bootstrap the variables themselves are gone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedProxyEnv {
    /// Variable name to value, for each listed proxy variable that was set.
    pub vars: HashMap<String, String>,
}

impl CapturedProxyEnv {
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ─── Resource Resolution ─────────────────────────────────────────

/// Maps a dotted package name (e.g. `sidecar.agent.prompts`) to the
/// directory holding that package's asset files.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, package: &str) -> Result<PathBuf, ResolveError>;
}

/// Resolution failure. In bundled mode the wrapper suppresses these and
/// substitutes the extraction path; only unbundled callers ever see one.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no asset directory for package '{package}' (searched {searched:?})")]
    NotFound {
        package: String,
        searched: Vec<PathBuf>,
    },
}

// ─── Configuration ───────────────────────────────────────────────

/// Boot configuration loaded from `~/.sidecar/boot.json`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootConfig {
    /// Extra asset roots searched before the built-in ones. May start with
    /// `~`, expanded at load time.
    #[serde(default)]
    pub asset_roots: Vec<String>,
    /// Default tracing filter level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The level as a tracing filter directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// Returns the default `BootConfig` used when no config file exists.
pub fn default_config() -> BootConfig {
    BootConfig {
        asset_roots: Vec::new(),
        log_level: LogLevel::Info,
    }
}
