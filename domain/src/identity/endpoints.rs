//! Tenant endpoint derivation

use crate::core::error::DomainError;
use crate::deployment::entities::IdentityProviderSettings;
use serde::Serialize;
use url::Url;

/// Hosted Auth0 domain the tenant prefix is appended to.
pub const AUTH0_DOMAIN_SUFFIX: &str = ".auth0.com";

/// Algorithms the API accepts on tenant-issued access tokens.
pub const SIGNING_ALGORITHMS: &[&str] = &["RS256"];

/// Every endpoint of a tenant, resolved once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantEndpoints {
    pub host: String,
    pub issuer: Url,
    pub authorize: Url,
    pub token: Url,
    pub userinfo: Url,
    pub logout: Url,
    pub jwks: Url,
    pub discovery: Url,
}

impl IdentityProviderSettings {
    /// Fully qualified tenant host.
    ///
    /// A bare prefix gets [`AUTH0_DOMAIN_SUFFIX`] appended; a value that
    /// already ends with it is used as is.
    pub fn tenant_host(&self) -> Result<String, DomainError> {
        let prefix = self.url().trim().trim_end_matches('.');
        if prefix.is_empty() {
            return Err(DomainError::EmptyField("auth0.url"));
        }
        if prefix.contains("://")
            || prefix.contains('/')
            || prefix.contains('?')
            || prefix.contains('#')
            || prefix.chars().any(char::is_whitespace)
        {
            return Err(DomainError::InvalidTenant(self.url().to_string()));
        }

        let host = prefix.to_ascii_lowercase();
        if host.ends_with(AUTH0_DOMAIN_SUFFIX) {
            Ok(host)
        } else {
            Ok(format!("{host}{AUTH0_DOMAIN_SUFFIX}"))
        }
    }

    /// `https://{tenant}/`: also the `iss` claim of issued tokens.
    pub fn issuer(&self) -> Result<Url, DomainError> {
        let host = self.tenant_host()?;
        Url::parse(&format!("https://{host}/"))
            .map_err(|_| DomainError::InvalidTenant(self.url().to_string()))
    }

    pub fn authorize_endpoint(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint("authorize")
    }

    pub fn token_endpoint(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint("oauth/token")
    }

    pub fn userinfo_endpoint(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint("userinfo")
    }

    pub fn logout_endpoint(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint("v2/logout")
    }

    pub fn jwks_uri(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint(".well-known/jwks.json")
    }

    pub fn discovery_uri(&self) -> Result<Url, DomainError> {
        self.tenant_endpoint(".well-known/openid-configuration")
    }

    /// Resolve all tenant endpoints at once.
    pub fn endpoints(&self) -> Result<TenantEndpoints, DomainError> {
        Ok(TenantEndpoints {
            host: self.tenant_host()?,
            issuer: self.issuer()?,
            authorize: self.authorize_endpoint()?,
            token: self.token_endpoint()?,
            userinfo: self.userinfo_endpoint()?,
            logout: self.logout_endpoint()?,
            jwks: self.jwks_uri()?,
            discovery: self.discovery_uri()?,
        })
    }

    fn tenant_endpoint(&self, path: &str) -> Result<Url, DomainError> {
        self.issuer()?
            .join(path)
            .map_err(|_| DomainError::InvalidTenant(self.url().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::entities::DeploymentConfiguration;

    fn settings(url: &str) -> IdentityProviderSettings {
        IdentityProviderSettings::new(url, "Coffee-Shop", "client", "http://localhost:8100")
    }

    #[test]
    fn test_prefix_gets_auth0_suffix() {
        let config = DeploymentConfiguration::development();
        assert_eq!(config.auth0().tenant_host().unwrap(), "tsitokely.us.auth0.com");
    }

    #[test]
    fn test_full_domain_is_kept() {
        assert_eq!(
            settings("Coffee.EU.auth0.com").tenant_host().unwrap(),
            "coffee.eu.auth0.com"
        );
    }

    #[test]
    fn test_rejects_scheme_and_path() {
        assert!(matches!(
            settings("https://tsitokely.us").tenant_host(),
            Err(DomainError::InvalidTenant(_))
        ));
        assert!(matches!(
            settings("tsitokely.us/authorize").tenant_host(),
            Err(DomainError::InvalidTenant(_))
        ));
        assert_eq!(
            settings("").tenant_host().unwrap_err(),
            DomainError::EmptyField("auth0.url")
        );
    }

    #[test]
    fn test_development_endpoints() {
        let endpoints = DeploymentConfiguration::development()
            .auth0()
            .endpoints()
            .unwrap();
        assert_eq!(endpoints.issuer.as_str(), "https://tsitokely.us.auth0.com/");
        assert_eq!(
            endpoints.authorize.as_str(),
            "https://tsitokely.us.auth0.com/authorize"
        );
        assert_eq!(
            endpoints.token.as_str(),
            "https://tsitokely.us.auth0.com/oauth/token"
        );
        assert_eq!(
            endpoints.jwks.as_str(),
            "https://tsitokely.us.auth0.com/.well-known/jwks.json"
        );
        assert_eq!(
            endpoints.discovery.as_str(),
            "https://tsitokely.us.auth0.com/.well-known/openid-configuration"
        );
        assert_eq!(
            endpoints.logout.as_str(),
            "https://tsitokely.us.auth0.com/v2/logout"
        );
    }
}
