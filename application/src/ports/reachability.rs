//! Reachability probe port.
//!
//! Misconfiguration surfaces late: a wrong API origin fails the first
//! request, a wrong tenant fails the first login. The probe checks the
//! configured origins up front. Infrastructure adapters implement the
//! actual network call.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use url::Url;

/// What a probe target stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    /// Public backend route
    Api,
    /// OpenID Connect discovery document of the tenant
    Discovery,
    /// Signing keys of the tenant
    Jwks,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeKind::Api => "api",
            ProbeKind::Discovery => "discovery",
            ProbeKind::Jwks => "jwks",
        };
        f.pad(name)
    }
}

/// A URL to probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeTarget {
    pub kind: ProbeKind,
    pub url: Url,
}

impl ProbeTarget {
    pub fn new(kind: ProbeKind, url: Url) -> Self {
        Self { kind, url }
    }
}

/// Result of probing one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub target: ProbeTarget,
    /// HTTP status, if a response arrived
    pub status: Option<u16>,
    pub latency_ms: u64,
    /// Transport error, if no response arrived
    pub error: Option<String>,
}

impl ProbeOutcome {
    pub fn responded(target: ProbeTarget, status: u16, latency_ms: u64) -> Self {
        Self {
            target,
            status: Some(status),
            latency_ms,
            error: None,
        }
    }

    pub fn failed(target: ProbeTarget, error: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            target,
            status: None,
            latency_ms,
            error: Some(error.into()),
        }
    }

    /// A target is reachable when it answered with a 2xx status.
    pub fn is_reachable(&self) -> bool {
        matches!(self.status, Some(status) if (200..300).contains(&status))
    }
}

/// Port for checking that a URL answers.
///
/// Implementations never fail: transport errors are reported through
/// [`ProbeOutcome::failed`].
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome;
}
