//! HTTP reachability probe backed by `reqwest`

use async_trait::async_trait;
use brewenv_application::{ProbeOutcome, ProbeParams, ProbeTarget, ReachabilityProbe};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Maximum redirects followed before giving up on a target.
const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Error)]
pub enum ProbeBuildError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Probes targets with a plain `GET`.
#[derive(Debug, Clone)]
pub struct HttpReachabilityProbe {
    client: reqwest::Client,
}

impl HttpReachabilityProbe {
    pub fn new(params: &ProbeParams) -> Result<Self, ProbeBuildError> {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachabilityProbe {
    async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        let start = Instant::now();
        let result = self.client.get(target.url.clone()).send().await;
        let latency_ms = whole_millis(start.elapsed());

        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url = %target.url, status, latency_ms, "probe answered");
                ProbeOutcome::responded(target.clone(), status, latency_ms)
            }
            Err(e) => {
                let reason = if e.is_timeout() {
                    "timed out".to_string()
                } else if e.is_connect() {
                    format!("connection failed: {e}")
                } else {
                    e.to_string()
                };
                debug!(url = %target.url, error = %reason, "probe failed");
                ProbeOutcome::failed(target.clone(), reason, latency_ms)
            }
        }
    }
}

/// Milliseconds in `elapsed`, saturating at `u64::MAX`.
fn whole_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
