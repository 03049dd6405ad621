//! Paste link prober library.
//!
//! Discovers hosted-file links of known sharing services inside arbitrary
//! paste text, rewrites stale mirror domains to each service's active
//! domain, and confirms liveness with a bounded network probe. Only links
//! that are both well-formed and currently reachable are surfaced.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod probe;
pub mod report;
pub mod services;
