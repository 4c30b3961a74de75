//! Sidecar Boot -- Startup Patch for the Bundled Browser-Agent Sidecar
//!
//! Runs before any application code in the sidecar process: disables system
//! proxy discovery (stale SOCKS settings cause spurious connect errors in
//! bundled builds) and redirects packaged-asset lookups to the launcher's
//! extraction directory so prompt templates can be found.

pub mod types;
pub mod config;
pub mod logging;
pub mod bundle;
pub mod proxy;
pub mod resources;
pub mod bootstrap;

// The process environment is global, so tests that touch it must not
// interleave. Every env-mutating test takes this lock first.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
