//! Proxy Providers
//!
//! `NoProxies` is what bootstrap installs; `EnvProxies` is the discovery
//! behavior it replaces, kept for unbundled and diagnostic callers.

use std::env;

use crate::proxy::scrub::PROXY_ENV_VARS;
use crate::types::{ProxyProvider, ProxyTable};

/// Always reports an empty proxy table.
///
/// macOS in particular surfaces system proxy settings that bundled builds
/// must not pick up, so the sidecar opts out of discovery entirely rather
/// than filtering.
pub struct NoProxies;

impl ProxyProvider for NoProxies {
    fn proxies(&self) -> ProxyTable {
        ProxyTable::new()
    }
}

/// Reads the proxy environment variables at call time.
///
/// Uppercase variants win over lowercase when both are set.
pub struct EnvProxies;

impl ProxyProvider for EnvProxies {
    fn proxies(&self) -> ProxyTable {
        let mut table = ProxyTable::new();
        for var in PROXY_ENV_VARS {
            if let Ok(value) = env::var(var) {
                if value.is_empty() {
                    continue;
                }
                table.entry(scheme_for(var).to_string()).or_insert(value);
            }
        }
        table
    }
}

/// Protocol scheme a proxy variable configures (`HTTP_PROXY` -> `http`).
fn scheme_for(var: &str) -> &'static str {
    match var.to_ascii_lowercase().as_str() {
        "http_proxy" => "http",
        "https_proxy" => "https",
        "socks_proxy" => "socks",
        _ => "all",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::PoisonError;

    #[test]
    fn test_no_proxies_is_always_empty() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        env::set_var("HTTP_PROXY", "http://proxy:3128");
        env::set_var("ALL_PROXY", "socks5://127.0.0.1:1080");

        assert!(NoProxies.proxies().is_empty());

        env::remove_var("HTTP_PROXY");
        env::remove_var("ALL_PROXY");
    }

    #[test]
    fn test_env_proxies_maps_schemes() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        for var in PROXY_ENV_VARS {
            env::remove_var(var);
        }
        env::set_var("HTTP_PROXY", "http://proxy:3128");
        env::set_var("socks_proxy", "socks5://127.0.0.1:1080");

        let table = EnvProxies.proxies();
        assert_eq!(table.get("http").map(String::as_str), Some("http://proxy:3128"));
        assert_eq!(
            table.get("socks").map(String::as_str),
            Some("socks5://127.0.0.1:1080")
        );
        assert!(table.get("https").is_none());

        env::remove_var("HTTP_PROXY");
        env::remove_var("socks_proxy");
    }

    #[test]
    fn test_env_proxies_uppercase_wins() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        for var in PROXY_ENV_VARS {
            env::remove_var(var);
        }
        env::set_var("HTTPS_PROXY", "http://upper:3128");
        env::set_var("https_proxy", "http://lower:3128");

        let table = EnvProxies.proxies();
        assert_eq!(table.get("https").map(String::as_str), Some("http://upper:3128"));

        env::remove_var("HTTPS_PROXY");
        env::remove_var("https_proxy");
    }
}
