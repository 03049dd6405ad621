//! Liveness probing.
//!
//! The [`HttpProbe`] trait is the only network capability the rest of the
//! crate consumes: perform one GET, report the status code. [`ProbeClient`]
//! is the production implementation on top of a shared `reqwest` pool.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::debug;
use url::Url;

use crate::config::Config;

/// Errors from a single liveness probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("not a probeable URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Liveness classification of a probed URL.
///
/// A probe that fails outright (connection, DNS, timeout) has no
/// classification; it surfaces as a [`ProbeError`] and the caller decides
/// whether to skip the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// The host answered 200 for this URL.
    Alive,
    /// The host answered, but with a non-success status.
    Dead,
}

/// Minimal network capability: perform a single GET, report the status code.
///
/// Implementations must release the response body on every path, whatever
/// the status, and must be safe to call concurrently.
#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// Perform one GET against `url`. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or the request cannot
    /// complete.
    async fn get_status(&self, url: &str) -> Result<StatusCode, ProbeError>;
}

/// Classify a URL by probing it once.
///
/// Exactly status 200 counts as alive; every other status is dead.
///
/// # Errors
///
/// Propagates the probe's failure unchanged; no classification is made.
pub async fn check(probe: &dyn HttpProbe, url: &str) -> Result<Liveness, ProbeError> {
    let status = probe.get_status(url).await?;
    if status == StatusCode::OK {
        Ok(Liveness::Alive)
    } else {
        Ok(Liveness::Dead)
    }
}

/// Probe client backed by a shared `reqwest` connection pool.
///
/// In-flight probes are bounded by a semaphore so a large paste cannot fan
/// out into an unbounded burst of requests. The per-request timeout cancels
/// the in-flight request and releases the connection when it expires.
pub struct ProbeClient {
    client: Client,
    permits: Semaphore,
}

impl ProbeClient {
    /// Build a probe client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.probe_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            permits: Semaphore::new(config.probe_concurrency),
        })
    }
}

#[async_trait]
impl HttpProbe for ProbeClient {
    async fn get_status(&self, url: &str) -> Result<StatusCode, ProbeError> {
        let parsed = Url::parse(url).map_err(|source| ProbeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        // The semaphore is never closed, so acquire cannot fail.
        let _permit = self
            .permits
            .acquire()
            .await
            .expect("probe semaphore closed");

        debug!(url = %parsed, "probing");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| ProbeError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        // Dropping the response releases the connection without reading the body.
        drop(response);
        Ok(status)
    }
}
