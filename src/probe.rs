//! Client-side probing of running instances.
//!
//! Used by the `lb-probe` binary to poll one server directly, or the load
//! balancer in front of several, and tally which instance answered.

use reqwest::StatusCode;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Errors raised while probing.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Connection or protocol failure.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something that is not JSON.
    #[error("{url} returned a non-JSON body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One of the server's defined endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Health,
    Status,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Root => "/",
            Endpoint::Health => "/health",
            Endpoint::Status => "/status",
        }
    }
}

/// Status code and decoded body of a probe.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ProbeResponse {
    /// `serverId` field of the body, if present.
    pub fn server_id(&self) -> Option<&str> {
        self.body.get("serverId").and_then(Value::as_str)
    }
}

/// HTTP client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProbeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// GET one endpoint and decode its JSON body.
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<ProbeResponse, ProbeError> {
        let url = self.url(endpoint);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ProbeError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|source| ProbeError::Decode { url, source })?;

        Ok(ProbeResponse { status, body })
    }

    /// Send `requests` sequential `GET /` and tally the answering instances.
    ///
    /// Individual failures are counted, not returned, so a flapping backend
    /// shows up in the result instead of aborting the run.
    pub async fn spread(&self, requests: usize) -> Spread {
        let mut spread = Spread::default();
        for _ in 0..requests {
            match self.fetch(Endpoint::Root).await {
                Ok(response) if response.status.is_success() => spread.record(response.server_id()),
                Ok(response) => {
                    tracing::debug!(status = %response.status, "Probe got non-success status");
                    spread.record_failure();
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Probe request failed");
                    spread.record_failure();
                }
            }
        }
        spread
    }
}

/// Per-instance answer counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spread {
    counts: BTreeMap<String, usize>,
    failures: usize,
}

/// Bucket for answers without a `serverId`.
pub const MISSING_ID: &str = "<missing serverId>";

impl Spread {
    pub fn record(&mut self, server_id: Option<&str>) {
        let key = server_id.unwrap_or(MISSING_ID);
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Counts sorted by identity.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.failures
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total().max(1) as f64;
        for (server_id, count) in &self.counts {
            writeln!(
                f,
                "{server_id:<24} {count:>6}  ({:5.1}%)",
                *count as f64 * 100.0 / total
            )?;
        }
        if self.failures > 0 {
            writeln!(f, "{:<24} {:>6}", "failed", self.failures)?;
        }
        write!(f, "{:<24} {:>6}", "total", self.total())
    }
}
