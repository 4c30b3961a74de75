//! Search-Path Resolution
//!
//! The unbundled resolution logic: walk an ordered list of asset roots and
//! return the first directory that actually holds the package.

use std::env;
use std::path::PathBuf;

use crate::config::get_sidecar_dir;
use crate::types::{ResolveError, ResourceResolver};

/// Convert a dotted package name to its relative asset path
/// (`sidecar.agent.prompts` -> `sidecar/agent/prompts`).
///
/// The conversion is blind; segments are not validated.
pub fn package_rel_path(package: &str) -> PathBuf {
    package.split('.').collect()
}

/// Resolves packages against an ordered list of on-disk roots.
pub struct SearchPathResolver {
    roots: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        SearchPathResolver { roots }
    }

    /// The roots an unbundled sidecar searches: configured extras first,
    /// then `~/.sidecar/assets`, then `assets/` beside the executable.
    pub fn with_default_roots(extra: &[PathBuf]) -> Self {
        let mut roots: Vec<PathBuf> = extra.to_vec();
        roots.push(get_sidecar_dir().join("assets"));
        if let Ok(exe) = env::current_exe() {
            if let Some(exe_dir) = exe.parent() {
                roots.push(exe_dir.join("assets"));
            }
        }
        SearchPathResolver { roots }
    }
}

impl ResourceResolver for SearchPathResolver {
    fn resolve(&self, package: &str) -> Result<PathBuf, ResolveError> {
        let rel = package_rel_path(package);
        for root in &self.roots {
            let candidate = root.join(&rel);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(ResolveError::NotFound {
            package: package.to_string(),
            searched: self.roots.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_package_rel_path_converts_dots() {
        assert_eq!(
            package_rel_path("sidecar.agent.prompts"),
            PathBuf::from("sidecar/agent/prompts")
        );
        assert_eq!(package_rel_path("single"), PathBuf::from("single"));
    }

    #[test]
    fn test_resolve_returns_first_existing_root() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir_all(second.path().join("sidecar/prompts")).unwrap();

        let resolver = SearchPathResolver::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        let resolved = resolver.resolve("sidecar.prompts").unwrap();
        assert_eq!(resolved, second.path().join("sidecar/prompts"));
    }

    #[test]
    fn test_resolve_prefers_earlier_roots() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir_all(first.path().join("pkg")).unwrap();
        fs::create_dir_all(second.path().join("pkg")).unwrap();

        let resolver = SearchPathResolver::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(resolver.resolve("pkg").unwrap(), first.path().join("pkg"));
    }

    #[test]
    fn test_resolve_missing_package_lists_searched_roots() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SearchPathResolver::new(vec![dir.path().to_path_buf()]);

        let err = resolver.resolve("sidecar.missing").unwrap_err();
        let ResolveError::NotFound { package, searched } = err;
        assert_eq!(package, "sidecar.missing");
        assert_eq!(searched, vec![dir.path().to_path_buf()]);
    }
}
