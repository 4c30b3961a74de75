//! Proxy Environment Scrub
//!
//! The fixed list of case-variant proxy variables, the typed snapshot taken
//! before removal, and the removal itself. Must run before any HTTP stack
//! initializes, since proxy settings are cached at first use.

use std::collections::HashMap;
use std::env;

use crate::types::CapturedProxyEnv;

/// Case-variant proxy variables removed from the process environment.
pub const PROXY_ENV_VARS: [&str; 8] = [
    "ALL_PROXY",
    "all_proxy",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "SOCKS_PROXY",
    "socks_proxy",
];

/// Snapshot every listed variable that is currently set.
///
/// Taken before [`scrub`] so diagnostics can still show what the system
/// would have used.
pub fn capture() -> CapturedProxyEnv {
    let mut vars = HashMap::new();
    for var in PROXY_ENV_VARS {
        if let Ok(value) = env::var(var) {
            vars.insert(var.to_string(), value);
        }
    }
    CapturedProxyEnv { vars }
}

/// Remove the listed variables from the process environment.
///
/// Absent variables are skipped; anything outside the list is untouched.
/// Returns the names actually removed.
pub fn scrub() -> Vec<String> {
    let mut removed = Vec::new();
    for var in PROXY_ENV_VARS {
        if env::var_os(var).is_some() {
            env::remove_var(var);
            removed.push(var.to_string());
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::PoisonError;

    fn clear_all() {
        for var in PROXY_ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_scrub_removes_every_listed_variable() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_all();
        for var in PROXY_ENV_VARS {
            env::set_var(var, "socks5://127.0.0.1:1080");
        }

        let removed = scrub();

        assert_eq!(removed.len(), PROXY_ENV_VARS.len());
        for var in PROXY_ENV_VARS {
            assert!(env::var_os(var).is_none(), "{} survived the scrub", var);
        }
    }

    #[test]
    fn test_scrub_absent_variables_is_a_noop() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_all();

        let removed = scrub();
        assert!(removed.is_empty());
    }

    #[test]
    fn test_scrub_leaves_unlisted_variables_alone() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_all();
        env::set_var("HTTP_PROXY", "http://proxy:3128");
        env::set_var("NO_PROXY_UNRELATED", "keep-me");

        scrub();

        assert_eq!(
            env::var("NO_PROXY_UNRELATED").as_deref(),
            Ok("keep-me")
        );
        env::remove_var("NO_PROXY_UNRELATED");
    }

    #[test]
    fn test_capture_snapshots_before_scrub() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_all();
        env::set_var("https_proxy", "http://proxy:3128");

        let captured = capture();
        scrub();

        assert_eq!(
            captured.vars.get("https_proxy").map(String::as_str),
            Some("http://proxy:3128")
        );
        assert!(env::var_os("https_proxy").is_none());
    }
}
