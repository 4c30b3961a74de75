//! Bundled Resolution
//!
//! Redirects package lookups to the launcher's extraction directory,
//! falling back to the wrapped resolver when nothing was extracted for the
//! package.

use std::path::PathBuf;

use tracing::debug;

use crate::resources::search::package_rel_path;
use crate::types::{ResolveError, ResourceResolver};

/// Wraps an inner resolver with the extraction-directory redirect.
pub struct BundledResolver {
    extract_dir: PathBuf,
    inner: Box<dyn ResourceResolver>,
}

impl BundledResolver {
    pub fn new(extract_dir: PathBuf, inner: Box<dyn ResourceResolver>) -> Self {
        BundledResolver { extract_dir, inner }
    }
}

impl ResourceResolver for BundledResolver {
    fn resolve(&self, package: &str) -> Result<PathBuf, ResolveError> {
        let extracted = self.extract_dir.join(package_rel_path(package));

        // Extracted assets win outright when present.
        if extracted.exists() {
            return Ok(extracted);
        }

        match self.inner.resolve(package) {
            Ok(path) => Ok(path),
            Err(err) => {
                // Last resort: hand back the extraction path unchecked. A bad
                // path fails at open time in the caller; resolution itself
                // must never block startup.
                debug!("resolution failed for '{}', using extraction path: {}", package, err);
                Ok(extracted)
            }
        }
    }
}
