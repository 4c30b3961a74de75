//! HTTP Client Integration
//!
//! Applies the process proxy policy to a `reqwest::ClientBuilder`. Every
//! client in the sidecar must be constructed through this seam; reqwest
//! resolves proxies when the client is built, not per request.

use anyhow::{Context, Result};

use crate::types::ProxyProvider;

/// Configure `builder` according to the provider's proxy table.
///
/// An empty table disables proxying outright, including reqwest's own
/// environment discovery. Otherwise one proxy is registered per entry.
pub fn apply_proxy_policy(
    builder: reqwest::ClientBuilder,
    provider: &dyn ProxyProvider,
) -> Result<reqwest::ClientBuilder> {
    let table = provider.proxies();
    if table.is_empty() {
        return Ok(builder.no_proxy());
    }

    let mut builder = builder;
    for (scheme, url) in &table {
        let proxy = match scheme.as_str() {
            "http" => reqwest::Proxy::http(url),
            "https" => reqwest::Proxy::https(url),
            _ => reqwest::Proxy::all(url),
        }
        .with_context(|| format!("Invalid {} proxy URL '{}'", scheme, url))?;
        builder = builder.proxy(proxy);
    }
    Ok(builder)
}
