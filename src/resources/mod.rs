//! Resources Module
//!
//! Maps dotted package names to on-disk asset directories. Unbundled runs
//! walk a list of search roots; bundled runs are redirected to the
//! launcher's extraction directory first.

pub mod bundled;
pub mod search;
