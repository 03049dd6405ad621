//! Fan-out of one input text across every registered service.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::join_all;
use serde::Serialize;
use tracing::{debug, warn};

use crate::probe::HttpProbe;
use crate::report::ConfirmationSink;
use crate::services::{DelegateError, Link, ServiceRegistry};

/// Aggregate outcome of one sweep across every registered service.
#[derive(Debug, Default, Serialize)]
pub struct SweepOutcome {
    /// Confirmed-alive links keyed by service id, in order of appearance.
    /// A service that ran but confirmed nothing has an empty entry.
    pub links: BTreeMap<&'static str, Vec<Link>>,
    /// Structural errors keyed by service id. One service failing to run
    /// never affects the others.
    #[serde(serialize_with = "serialize_errors")]
    pub errors: BTreeMap<&'static str, DelegateError>,
}

impl SweepOutcome {
    /// Total number of confirmed links across all services.
    #[must_use]
    pub fn total_links(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }
}

fn serialize_errors<S>(
    errors: &BTreeMap<&'static str, DelegateError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(errors.iter().map(|(service, e)| (service, e.to_string())))
}

/// Runs every registered service against the same input text.
pub struct Dispatcher {
    registry: ServiceRegistry,
    probe: Arc<dyn HttpProbe>,
}

impl Dispatcher {
    /// Create a dispatcher over `registry`, probing through `probe`.
    #[must_use]
    pub fn new(registry: ServiceRegistry, probe: Arc<dyn HttpProbe>) -> Self {
        Self { registry, probe }
    }

    /// Sweep `text` with every registered service.
    ///
    /// Services run concurrently and share nothing mutable; each service's
    /// confirmed links land under its id, and a service that fails
    /// structurally is recorded under `errors` without disturbing the rest.
    pub async fn run(&self, text: &str, sink: &dyn ConfirmationSink) -> SweepOutcome {
        let probe = self.probe.as_ref();
        let sweeps = self.registry.services().iter().map(|service| async move {
            let result = service.delegate(probe, sink, text).await;
            (service.service_id(), result)
        });

        let mut outcome = SweepOutcome::default();
        for (service_id, result) in join_all(sweeps).await {
            match result {
                Ok(links) => {
                    debug!(
                        service = service_id,
                        links = links.len(),
                        "service sweep finished"
                    );
                    outcome.links.insert(service_id, links);
                }
                Err(e) => {
                    warn!(service = service_id, error = %e, "service could not run");
                    outcome.errors.insert(service_id, e);
                }
            }
        }
        outcome
    }
}
