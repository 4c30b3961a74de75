//! Bundle Detection
//!
//! Detect whether this process is a bundled (self-extracting) build and
//! where the launcher extracted the packaged assets. Both signals are
//! supplied by the bundler, never by this crate.

use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable the launcher sets to the extraction directory.
pub const BUNDLE_DIR_VAR: &str = "SIDECAR_BUNDLE_DIR";

/// Environment variable the launcher sets to mark a bundled build when no
/// extraction directory is available.
pub const BUNDLE_FLAG_VAR: &str = "SIDECAR_BUNDLE";

/// Manifest file some bundlers drop next to the executable instead of
/// setting environment variables.
const BUNDLE_MANIFEST: &str = "bundle-manifest.json";

/// Whether the process is a bundled build, and where its assets landed.
#[derive(Clone, Debug)]
pub struct BundleContext {
    /// True when running as a packaged, self-contained executable.
    pub frozen: bool,
    /// The launcher's extraction directory, when known.
    pub extract_dir: Option<PathBuf>,
}

impl BundleContext {
    /// A plain, unbundled run.
    pub fn not_frozen() -> Self {
        BundleContext {
            frozen: false,
            extract_dir: None,
        }
    }

    /// Detect the current bundle context.
    pub fn detect() -> Self {
        // 1. Launcher env var with the extraction directory
        if let Ok(dir) = env::var(BUNDLE_DIR_VAR) {
            if !dir.is_empty() {
                return BundleContext {
                    frozen: true,
                    extract_dir: Some(PathBuf::from(dir)),
                };
            }
        }

        // 2. Flag-only bundles: frozen, but the extraction dir is unknown
        if env::var(BUNDLE_FLAG_VAR).map(|v| v == "1").unwrap_or(false) {
            return BundleContext {
                frozen: true,
                extract_dir: None,
            };
        }

        // 3. Manifest dropped next to the executable
        if let Ok(exe) = env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                let manifest_path = exe_dir.join(BUNDLE_MANIFEST);
                if manifest_path.exists() {
                    if let Ok(contents) = fs::read_to_string(&manifest_path) {
                        if let Ok(data) = serde_json::from_str::<serde_json::Value>(&contents) {
                            let extract_dir = data
                                .get("extractDir")
                                .and_then(|v| v.as_str())
                                .map(PathBuf::from);
                            return BundleContext {
                                frozen: true,
                                extract_dir,
                            };
                        }
                    }
                }
            }
        }

        // 4. Plain interpreter-style run
        Self::not_frozen()
    }
}
