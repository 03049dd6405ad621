use async_trait::async_trait;
use futures_util::StreamExt;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::probe::{self, HttpProbe, Liveness, ProbeError};
use crate::report::ConfirmationSink;

/// How many candidate probes a single delegate call keeps in flight.
/// The probe client bounds total concurrency across all services.
const CANDIDATE_BUFFER: usize = 8;

/// A link confirmed alive, in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Identifier of the service the link belongs to.
    pub service: &'static str,
    /// Canonical URL, always on the service's active domain.
    pub url: String,
}

/// Structural failures raised before any probing begins.
///
/// Per-link probe failures are never represented here: a link that cannot
/// be probed is skipped, and its absence from the result is the signal.
#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("service {service} is misconfigured: {message}")]
    Misconfigured {
        service: &'static str,
        message: String,
    },
}

/// Trait for site-specific link extractors.
///
/// A service supplies its identity, its URL pattern, and any deprecated
/// domain aliases; the provided methods compose those into the full
/// canonicalize/extract/validate pipeline, so most services implement
/// nothing beyond the three accessors.
#[async_trait]
pub trait ServiceExtractor: Send + Sync {
    /// Unique identifier for this service.
    fn service_id(&self) -> &'static str;

    /// Human-readable name used when reporting confirmations.
    fn service_name(&self) -> &'static str {
        self.service_id()
    }

    /// Compiled pattern matching this service's link shape.
    fn link_pattern(&self) -> &Regex;

    /// Deprecated domains, each paired with the active domain to probe
    /// instead. Empty for services without domain churn.
    fn domain_aliases(&self) -> &[(&'static str, &'static str)] {
        &[]
    }

    /// Rewrite every stale domain occurrence to the active one.
    ///
    /// Pure text transform over the whole input, applied before extraction
    /// so links on dead mirrors are still recognized and probed against the
    /// live host. Idempotent; identity for services without aliases.
    fn canonicalize(&self, text: &str) -> String {
        let mut canonical = text.to_string();
        for (alias, active) in self.domain_aliases() {
            canonical = canonical.replace(alias, active);
        }
        canonical
    }

    /// All candidate links in the text, in order of appearance.
    fn extract(&self, text: &str) -> Vec<String> {
        self.link_pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Probe one candidate link.
    ///
    /// # Errors
    ///
    /// Propagates the probe's failure; the link stays unclassified.
    async fn validate(
        &self,
        http: &dyn HttpProbe,
        url: &str,
    ) -> Result<Liveness, ProbeError> {
        probe::check(http, url).await
    }

    /// Run the full pipeline over `text` and return the confirmed-alive
    /// links.
    ///
    /// Candidates are probed concurrently but reported and returned in
    /// order of appearance. A candidate whose probe fails is skipped and
    /// the rest of the batch continues; a dead candidate is dropped. Each
    /// confirmation goes to the sink the moment it is made.
    ///
    /// # Errors
    ///
    /// Returns an error only for structural problems detected before any
    /// probing; probe failures never propagate.
    async fn delegate(
        &self,
        http: &dyn HttpProbe,
        sink: &dyn ConfirmationSink,
        text: &str,
    ) -> Result<Vec<Link>, DelegateError> {
        let canonical = self.canonicalize(text);
        let candidates = self.extract(&canonical);
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            service = self.service_id(),
            candidates = candidates.len(),
            "probing candidates"
        );

        let mut outcomes = futures_util::stream::iter(candidates)
            .map(|url| async move {
                let outcome = self.validate(http, &url).await;
                (url, outcome)
            })
            .buffered(CANDIDATE_BUFFER);

        let mut confirmed = Vec::new();
        while let Some((url, outcome)) = outcomes.next().await {
            match outcome {
                Ok(Liveness::Alive) => {
                    info!(service = self.service_id(), url = %url, "link confirmed alive");
                    sink.confirmed(self.service_name(), &url);
                    confirmed.push(Link {
                        service: self.service_id(),
                        url,
                    });
                }
                Ok(Liveness::Dead) => {
                    debug!(service = self.service_id(), url = %url, "link dead");
                }
                Err(e) => {
                    warn!(service = self.service_id(), url = %url, error = %e, "probe failed, skipping link");
                }
            }
        }
        Ok(confirmed)
    }
}
