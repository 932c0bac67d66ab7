//! Probe endpoints use case
//!
//! Checks that the configured origins answer: the backend's public route,
//! and the tenant's discovery and JWKS documents. Targets are probed
//! concurrently; the report keeps them in target order.

use crate::ports::progress::{NoProbeProgress, ProbeProgressNotifier};
use crate::ports::reachability::{ProbeKind, ProbeOutcome, ProbeTarget, ReachabilityProbe};
use brewenv_domain::{ApiRoute, DeploymentConfiguration, DomainError, Environment};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur before probing starts.
#[derive(Error, Debug)]
pub enum ProbeEndpointsError {
    /// A target URL could not be derived from the record.
    #[error("Cannot derive probe targets: {0}")]
    InvalidConfig(#[from] DomainError),
}

/// Result of a probe run.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub environment: Environment,
    pub checked_at: DateTime<Utc>,
    pub outcomes: Vec<ProbeOutcome>,
}

impl ProbeReport {
    pub fn all_reachable(&self) -> bool {
        self.outcomes.iter().all(ProbeOutcome::is_reachable)
    }

    pub fn unreachable(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter().filter(|o| !o.is_reachable())
    }
}

/// Use case for probing the configured endpoints
pub struct ProbeEndpointsUseCase<P: ReachabilityProbe + ?Sized> {
    probe: Arc<P>,
}

impl<P: ReachabilityProbe + ?Sized> ProbeEndpointsUseCase<P> {
    pub fn new(probe: Arc<P>) -> Self {
        Self { probe }
    }

    /// Targets derived from a record, in report order.
    pub fn targets(config: &DeploymentConfiguration) -> Result<Vec<ProbeTarget>, DomainError> {
        let auth0 = config.auth0();
        Ok(vec![
            ProbeTarget::new(ProbeKind::Api, ApiRoute::health_check().url(config, None)?),
            ProbeTarget::new(ProbeKind::Discovery, auth0.discovery_uri()?),
            ProbeTarget::new(ProbeKind::Jwks, auth0.jwks_uri()?),
        ])
    }

    pub async fn execute(
        &self,
        config: &DeploymentConfiguration,
    ) -> Result<ProbeReport, ProbeEndpointsError> {
        self.execute_with_progress(config, &NoProbeProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        config: &DeploymentConfiguration,
        progress: &dyn ProbeProgressNotifier,
    ) -> Result<ProbeReport, ProbeEndpointsError> {
        let targets = Self::targets(config)?;
        progress.on_probe_start(targets.len());

        let probes = targets.iter().map(|target| async move {
            let outcome = self.probe.probe(target).await;
            progress.on_probe_complete(target, outcome.is_reachable());
            outcome
        });
        let outcomes = join_all(probes).await;
        progress.on_finish();

        let report = ProbeReport {
            environment: config.environment(),
            checked_at: Utc::now(),
            outcomes,
        };
        for outcome in report.unreachable() {
            warn!(
                kind = %outcome.target.kind,
                url = %outcome.target.url,
                status = ?outcome.status,
                error = ?outcome.error,
                "endpoint unreachable"
            );
        }
        info!(
            environment = %report.environment,
            reachable = report.all_reachable(),
            "probe finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brewenv_domain::IdentityProviderSettings;
    use std::sync::Mutex;

    /// Answers 200 for every URL except those containing `fail_on`.
    struct FakeProbe {
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl ReachabilityProbe for FakeProbe {
        async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
            match self.fail_on {
                Some(needle) if target.url.as_str().contains(needle) => {
                    ProbeOutcome::failed(target.clone(), "connection refused", 1)
                }
                _ => ProbeOutcome::responded(target.clone(), 200, 1),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProbeProgressNotifier for RecordingProgress {
        fn on_probe_start(&self, total_targets: usize) {
            self.events.lock().unwrap().push(format!("start:{total_targets}"));
        }

        fn on_probe_complete(&self, target: &ProbeTarget, reachable: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:{reachable}", target.kind));
        }

        fn on_finish(&self) {
            self.events.lock().unwrap().push("finish".to_string());
        }
    }

    #[test]
    fn test_targets_for_development() {
        let targets =
            ProbeEndpointsUseCase::<FakeProbe>::targets(&DeploymentConfiguration::development())
                .unwrap();
        let urls: Vec<_> = targets.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://127.0.0.1:5000/drinks",
                "https://tsitokely.us.auth0.com/.well-known/openid-configuration",
                "https://tsitokely.us.auth0.com/.well-known/jwks.json",
            ]
        );
    }

    #[tokio::test]
    async fn test_all_reachable() {
        let use_case = ProbeEndpointsUseCase::new(Arc::new(FakeProbe { fail_on: None }));
        let report = use_case
            .execute(&DeploymentConfiguration::development())
            .await
            .unwrap();
        assert_eq!(report.environment, Environment::Development);
        assert_eq!(report.outcomes.len(), 3);
        assert!(report.all_reachable());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_reported() {
        let use_case = ProbeEndpointsUseCase::new(Arc::new(FakeProbe {
            fail_on: Some("127.0.0.1"),
        }));
        let progress = RecordingProgress::default();
        let report = use_case
            .execute_with_progress(&DeploymentConfiguration::development(), &progress)
            .await
            .unwrap();

        assert!(!report.all_reachable());
        let unreachable: Vec<_> = report.unreachable().map(|o| o.target.kind).collect();
        assert_eq!(unreachable, vec![ProbeKind::Api]);

        let events = progress.events.lock().unwrap();
        assert_eq!(events.first().map(String::as_str), Some("start:3"));
        assert_eq!(events.last().map(String::as_str), Some("finish"));
        assert!(events.contains(&"api:false".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_record_fails_before_probing() {
        let config = DeploymentConfiguration::new(
            false,
            "http://127.0.0.1:5000",
            IdentityProviderSettings::new("https://bad", "a", "b", "http://localhost:8100"),
        );
        let use_case = ProbeEndpointsUseCase::new(Arc::new(FakeProbe { fail_on: None }));
        let err = use_case.execute(&config).await.unwrap_err();
        assert!(matches!(
            err,
            ProbeEndpointsError::InvalidConfig(DomainError::InvalidTenant(_))
        ));
    }
}
