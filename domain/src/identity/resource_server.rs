//! Backend view of the identity-provider settings
//!
//! The API validates bearer tokens against the same tenant and audience the
//! client requests them for. It reads them as `AUTH0_DOMAIN` and
//! `API_AUDIENCE`.

use super::endpoints::SIGNING_ALGORITHMS;
use crate::core::error::DomainError;
use crate::deployment::entities::DeploymentConfiguration;
use serde::Serialize;
use url::Url;

/// Settings the resource server needs to validate tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceServerSettings {
    /// Tenant host, without scheme (`AUTH0_DOMAIN`)
    pub auth0_domain: String,
    /// Expected `aud` claim (`API_AUDIENCE`)
    pub api_audience: String,
    /// Expected `iss` claim
    pub issuer: Url,
    /// Where signing keys are published
    pub jwks_uri: Url,
    pub algorithms: Vec<String>,
}

impl ResourceServerSettings {
    pub fn from_config(config: &DeploymentConfiguration) -> Result<Self, DomainError> {
        let auth0 = config.auth0();
        if auth0.audience().trim().is_empty() {
            return Err(DomainError::EmptyField("auth0.audience"));
        }
        Ok(Self {
            auth0_domain: auth0.tenant_host()?,
            api_audience: auth0.audience().to_string(),
            issuer: auth0.issuer()?,
            jwks_uri: auth0.jwks_uri()?,
            algorithms: SIGNING_ALGORITHMS.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Environment variables as the backend reads them.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            ("AUTH0_DOMAIN", self.auth0_domain.clone()),
            ("API_AUDIENCE", self.api_audience.clone()),
        ]
    }
}
