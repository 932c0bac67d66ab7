//! Authorization and logout links

use crate::core::error::DomainError;
use crate::core::http_url::parse_http_url;
use crate::deployment::entities::{DeploymentConfiguration, IdentityProviderSettings};
use url::Url;

/// The client uses the implicit flow: the access token comes back in the
/// redirect fragment.
pub const RESPONSE_TYPE: &str = "token";

/// Builder for the `/authorize` redirect.
///
/// # Examples
///
/// ```
/// use brewenv_domain::{AuthorizeRequest, DeploymentConfiguration};
///
/// let link = AuthorizeRequest::from_config(&DeploymentConfiguration::development())
///     .with_callback_path("/tabs/user-page")
///     .build()
///     .unwrap();
/// assert!(link.as_str().contains("client_id=Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk"));
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizeRequest {
    auth0: IdentityProviderSettings,
    callback_path: String,
    state: Option<String>,
}

impl AuthorizeRequest {
    pub fn new(auth0: IdentityProviderSettings) -> Self {
        Self {
            auth0,
            callback_path: String::new(),
            state: None,
        }
    }

    pub fn from_config(config: &DeploymentConfiguration) -> Self {
        Self::new(config.auth0().clone())
    }

    /// Application route appended to the callback URL (e.g. `/tabs/user-page`).
    pub fn with_callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = path.into();
        self
    }

    /// Opaque value echoed back by the provider in the redirect.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// The exact redirect target sent as `redirect_uri`.
    ///
    /// The configured callback URL is kept byte for byte: the provider
    /// compares it against its allow list without normalizing.
    pub fn redirect_uri(&self) -> Result<String, DomainError> {
        let base = self.auth0.callback_url().trim();
        let redirect = if self.callback_path.is_empty() {
            base.to_string()
        } else {
            if !self.callback_path.starts_with('/') {
                return Err(DomainError::InvalidCallbackPath(self.callback_path.clone()));
            }
            format!("{}{}", base.trim_end_matches('/'), self.callback_path)
        };
        parse_http_url("auth0.callback_url", &redirect)?;
        Ok(redirect)
    }

    pub fn build(&self) -> Result<Url, DomainError> {
        let audience = self.auth0.audience().trim();
        if audience.is_empty() {
            return Err(DomainError::EmptyField("auth0.audience"));
        }
        let client_id = self.auth0.client_id().trim();
        if client_id.is_empty() {
            return Err(DomainError::EmptyField("auth0.client_id"));
        }
        let redirect_uri = self.redirect_uri()?;

        let mut url = self.auth0.authorize_endpoint()?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("audience", audience)
                .append_pair("response_type", RESPONSE_TYPE)
                .append_pair("client_id", client_id)
                .append_pair("redirect_uri", &redirect_uri);
            if let Some(state) = &self.state {
                query.append_pair("state", state);
            }
        }
        Ok(url)
    }
}

/// Builder for the `/v2/logout` redirect.
#[derive(Debug, Clone)]
pub struct LogoutRequest {
    auth0: IdentityProviderSettings,
}

impl LogoutRequest {
    pub fn from_config(config: &DeploymentConfiguration) -> Self {
        Self {
            auth0: config.auth0().clone(),
        }
    }

    pub fn build(&self) -> Result<Url, DomainError> {
        let client_id = self.auth0.client_id().trim();
        if client_id.is_empty() {
            return Err(DomainError::EmptyField("auth0.client_id"));
        }
        let return_to = self.auth0.callback_url().trim();
        parse_http_url("auth0.callback_url", return_to)?;

        let mut url = self.auth0.logout_endpoint()?;
        url.query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("returnTo", return_to);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_development_login_link() {
        let config = DeploymentConfiguration::development();
        let link = AuthorizeRequest::from_config(&config).build().unwrap();

        assert_eq!(link.host_str(), Some("tsitokely.us.auth0.com"));
        assert_eq!(link.path(), "/authorize");
        assert!(link.as_str().contains("client_id=Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk"));
        assert!(link.as_str().contains("audience=Coffee-Shop"));

        let params = query(&link);
        assert_eq!(params["redirect_uri"], "http://localhost:8100");
        assert_eq!(params["response_type"], "token");
        assert!(!params.contains_key("state"));
    }

    #[test]
    fn test_parameter_order_matches_client() {
        let link = AuthorizeRequest::from_config(&DeploymentConfiguration::development())
            .build()
            .unwrap();
        let names: Vec<String> = link.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(
            names,
            vec!["audience", "response_type", "client_id", "redirect_uri"]
        );
    }

    #[test]
    fn test_callback_path_and_state() {
        let link = AuthorizeRequest::from_config(&DeploymentConfiguration::development())
            .with_callback_path("/tabs/user-page")
            .with_state("xyz 1")
            .build()
            .unwrap();
        let params = query(&link);
        assert_eq!(params["redirect_uri"], "http://localhost:8100/tabs/user-page");
        assert_eq!(params["state"], "xyz 1");
    }

    #[test]
    fn test_callback_trailing_slash_is_not_doubled() {
        let auth0 = IdentityProviderSettings::new(
            "tsitokely.us",
            "Coffee-Shop",
            "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk",
            "https://coffee.example.com/",
        );
        let request = AuthorizeRequest::new(auth0.clone()).with_callback_path("/tabs");
        assert_eq!(request.redirect_uri().unwrap(), "https://coffee.example.com/tabs");
        assert_eq!(
            AuthorizeRequest::new(auth0).redirect_uri().unwrap(),
            "https://coffee.example.com/"
        );
    }

    #[test]
    fn test_relative_callback_path_is_rejected() {
        let err = AuthorizeRequest::from_config(&DeploymentConfiguration::development())
            .with_callback_path("tabs")
            .build()
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidCallbackPath("tabs".to_string()));
    }

    #[test]
    fn test_missing_client_id_is_rejected() {
        let auth0 =
            IdentityProviderSettings::new("tsitokely.us", "Coffee-Shop", "", "http://localhost:8100");
        assert_eq!(
            AuthorizeRequest::new(auth0).build().unwrap_err(),
            DomainError::EmptyField("auth0.client_id")
        );
    }

    #[test]
    fn test_invalid_callback_is_rejected() {
        let auth0 =
            IdentityProviderSettings::new("tsitokely.us", "Coffee-Shop", "abc", "localhost:8100");
        assert!(AuthorizeRequest::new(auth0).build().is_err());
    }

    #[test]
    fn test_logout_link() {
        let link = LogoutRequest::from_config(&DeploymentConfiguration::development())
            .build()
            .unwrap();
        assert_eq!(link.path(), "/v2/logout");
        let params = query(&link);
        assert_eq!(params["client_id"], "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk");
        assert_eq!(params["returnTo"], "http://localhost:8100");
    }
}
