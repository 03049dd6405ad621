//! Reporting seam for confirmed links.

/// Receives each link the moment it is confirmed alive.
///
/// Confirmation itself is a plain result of `delegate`; rendering it is the
/// embedder's business. Implementations must tolerate concurrent calls.
pub trait ConfirmationSink: Send + Sync {
    /// Called once per confirmed-alive link, at confirmation time.
    fn confirmed(&self, service_name: &str, url: &str);
}

/// Prints each confirmation to stdout as `NAME: <url>`.
pub struct ConsoleSink;

impl ConfirmationSink for ConsoleSink {
    fn confirmed(&self, service_name: &str, url: &str) {
        println!("{}: {url}", service_name.to_uppercase());
    }
}

/// Discards confirmations. Useful for tests and library embedders that only
/// want the returned link lists.
pub struct NullSink;

impl ConfirmationSink for NullSink {
    fn confirmed(&self, _service_name: &str, _url: &str) {}
}
