//! Startup Bootstrap
//!
//! The one-shot patch applied before anything else in the process: scrub the
//! proxy environment, fix the proxy policy, detect the bundle context, and
//! wire the resource resolver the rest of the sidecar is constructed with.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::bundle::BundleContext;
use crate::config::resolve_path;
use crate::proxy::provider::NoProxies;
use crate::proxy::scrub;
use crate::resources::bundled::BundledResolver;
use crate::resources::search::SearchPathResolver;
use crate::types::{BootConfig, CapturedProxyEnv, ProxyProvider, ResourceResolver};

/// Everything bootstrap produced. The host process is built from this handle
/// instead of reading globals.
pub struct Bootstrap {
    pub config: BootConfig,
    pub bundle: BundleContext,
    /// Proxy environment as it looked before the scrub.
    pub captured: CapturedProxyEnv,
    /// Names of the proxy variables the scrub actually removed.
    pub scrubbed: Vec<String>,
    pub proxies: Arc<dyn ProxyProvider>,
    pub resources: Arc<dyn ResourceResolver>,
}

impl Bootstrap {
    /// Apply the startup patch.
    ///
    /// Runs synchronously, to completion, before any worker threads or HTTP
    /// clients exist. Safe to run again -- child processes re-enter here, and
    /// scrubbing already-absent variables is a no-op.
    pub fn apply(config: BootConfig) -> Self {
        let captured = scrub::capture();
        let scrubbed = scrub::scrub();
        if !scrubbed.is_empty() {
            debug!("removed proxy variables: {}", scrubbed.join(", "));
        }

        let bundle = BundleContext::detect();
        let resources = build_resolver(&config, &bundle);

        Bootstrap {
            config,
            bundle,
            captured,
            scrubbed,
            proxies: Arc::new(NoProxies),
            resources,
        }
    }
}

/// Wire the resource resolver for the detected context.
///
/// The extraction redirect is applied only when the process is frozen AND
/// the extraction directory is known; in every other case the plain search
/// resolver is used unmodified.
fn build_resolver(config: &BootConfig, bundle: &BundleContext) -> Arc<dyn ResourceResolver> {
    let extra_roots: Vec<PathBuf> = config
        .asset_roots
        .iter()
        .map(|root| resolve_path(root))
        .collect();
    let search = SearchPathResolver::with_default_roots(&extra_roots);

    match (bundle.frozen, bundle.extract_dir.as_ref()) {
        (true, Some(dir)) => {
            info!("bundled mode, assets extracted to {}", dir.display());
            Arc::new(BundledResolver::new(dir.clone(), Box::new(search)))
        }
        (true, None) => {
            debug!("bundled mode without an extraction dir, resolver left as-is");
            Arc::new(search)
        }
        _ => Arc::new(search),
    }
}
