//! Proxy Module
//!
//! The process-wide proxy policy: providers implementing proxy discovery,
//! the environment scrub that keeps other libraries from caching stale
//! settings, and the seam that applies the policy to an HTTP client.

pub mod http;
pub mod provider;
pub mod scrub;
