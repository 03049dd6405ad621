//! Shared constants used across the application.

/// User agent string used for liveness probes.
///
/// A realistic browser user agent; several of the probed hosts answer
/// obvious bot agents with interstitial error pages instead of real status
/// codes.
pub const PROBE_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
