//! Deployment configuration entities
//!
//! [`DeploymentConfiguration`] is the single record the client build reads:
//! a variant flag, the backend origin, and the identity-provider settings.
//! Records are built once per variant and only read afterwards, so fields are
//! private and exposed through accessors.

use super::value_objects::Environment;
use crate::core::error::DomainError;
use crate::core::http_url::parse_http_url;
use serde::{Deserialize, Serialize};
use url::Url;

/// Backend origin of the development record (the local Flask server).
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Auth0 tenant prefix of the development record.
pub const DEV_AUTH0_URL: &str = "tsitokely.us";
/// Audience registered for the Coffee Shop API.
pub const DEV_AUTH0_AUDIENCE: &str = "Coffee-Shop";
/// Client id Auth0 generated for the Coffee Shop front end.
pub const DEV_AUTH0_CLIENT_ID: &str = "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk";
/// Base URL of the locally served Ionic application.
pub const DEV_AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

/// Identity-provider (Auth0) parameters of a deployment.
///
/// Input accepts both the snake_case keys and the camelCase keys used by
/// the front-end `environment.ts` (`clientId`, `callbackURL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProviderSettings {
    /// Tenant domain prefix (e.g. `tsitokely.us` for `tsitokely.us.auth0.com`)
    url: String,
    /// Identifier of the API the issued tokens must target
    audience: String,
    /// Public identifier of this application at the identity provider
    #[serde(alias = "clientId")]
    client_id: String,
    /// Redirect target after login; must be allow-listed at the provider
    #[serde(alias = "callbackURL", alias = "callbackUrl")]
    callback_url: String,
}

impl IdentityProviderSettings {
    pub fn new(
        url: impl Into<String>,
        audience: impl Into<String>,
        client_id: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            audience: audience.into(),
            client_id: client_id.into(),
            callback_url: callback_url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }
}

/// Configuration record for one build variant of the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfiguration {
    /// Selects production behavior in the consuming application
    production: bool,
    /// Origin prepended to every backend request
    #[serde(alias = "apiServerUrl")]
    api_server_url: String,
    /// Identity-provider settings
    auth0: IdentityProviderSettings,
}

impl DeploymentConfiguration {
    pub fn new(
        production: bool,
        api_server_url: impl Into<String>,
        auth0: IdentityProviderSettings,
    ) -> Self {
        Self {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        }
    }

    /// The development record shipped with the front end.
    pub fn development() -> Self {
        Self::new(
            false,
            DEV_API_SERVER_URL,
            IdentityProviderSettings::new(
                DEV_AUTH0_URL,
                DEV_AUTH0_AUDIENCE,
                DEV_AUTH0_CLIENT_ID,
                DEV_AUTH0_CALLBACK_URL,
            ),
        )
    }

    /// Built-in preset for a variant.
    ///
    /// The production preset starts from the development values with the
    /// flag flipped; deployers override the values, never the shape.
    pub fn for_environment(env: Environment) -> Self {
        Self {
            production: env.is_production(),
            ..Self::development()
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn environment(&self) -> Environment {
        Environment::from_flag(self.production)
    }

    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    pub fn auth0(&self) -> &IdentityProviderSettings {
        &self.auth0
    }

    /// Parsed backend origin.
    pub fn api_base_url(&self) -> Result<Url, DomainError> {
        parse_http_url("api_server_url", &self.api_server_url)
    }

    /// Parsed post-login redirect target.
    pub fn callback_url(&self) -> Result<Url, DomainError> {
        parse_http_url("auth0.callback_url", &self.auth0.callback_url)
    }

    /// Resolve a backend request path against the API origin.
    ///
    /// Any path prefix on the origin is kept, and leading slashes on `path`
    /// never reset it to the root.
    pub fn api_url(&self, path: &str) -> Result<Url, DomainError> {
        let mut base = self.api_base_url()?;
        if !base.path().ends_with('/') {
            let prefixed = format!("{}/", base.path());
            base.set_path(&prefixed);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| DomainError::InvalidUrl {
                field: "api_server_url",
                reason: e.to_string(),
            })
    }
}

impl Default for DeploymentConfiguration {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_development_record_values() {
        let config = DeploymentConfiguration::development();
        assert!(!config.production());
        assert_eq!(config.environment(), Environment::Development);
        assert_eq!(config.api_server_url(), "http://127.0.0.1:5000");
        assert_eq!(config.auth0().url(), "tsitokely.us");
        assert_eq!(config.auth0().audience(), "Coffee-Shop");
        assert_eq!(config.auth0().client_id(), "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk");
        assert_eq!(config.auth0().callback_url(), "http://localhost:8100");
    }

    #[test]
    fn test_urls_are_valid() {
        let config = DeploymentConfiguration::development();
        assert_eq!(config.api_base_url().unwrap().port(), Some(5000));
        assert_eq!(
            config.callback_url().unwrap().host_str(),
            Some("localhost")
        );
    }

    #[test]
    fn test_exposes_exactly_six_fields() {
        let value = serde_json::to_value(DeploymentConfiguration::development()).unwrap();
        let root = value.as_object().unwrap();
        assert_eq!(root.len(), 3);
        assert!(root["production"].is_boolean());
        assert!(root["api_server_url"].is_string());

        let auth0 = root["auth0"].as_object().unwrap();
        assert_eq!(auth0.len(), 4);
        assert!(auth0.values().all(Value::is_string));
    }

    #[test]
    fn test_production_preset_keeps_shape() {
        let dev = serde_json::to_value(DeploymentConfiguration::for_environment(
            Environment::Development,
        ))
        .unwrap();
        let prod = serde_json::to_value(DeploymentConfiguration::for_environment(
            Environment::Production,
        ))
        .unwrap();

        fn keys(value: &Value) -> Vec<String> {
            let mut keys = Vec::new();
            for (key, inner) in value.as_object().unwrap() {
                keys.push(key.clone());
                if let Some(obj) = inner.as_object() {
                    keys.extend(obj.keys().map(|k| format!("{key}.{k}")));
                }
            }
            keys.sort();
            keys
        }

        assert_eq!(keys(&dev), keys(&prod));
        assert_eq!(prod["production"], Value::Bool(true));
        assert_eq!(dev["production"], Value::Bool(false));
    }

    #[test]
    fn test_deserialize_frontend_keys() {
        let json = r#"{
            "production": false,
            "apiServerUrl": "http://127.0.0.1:5000",
            "auth0": {
                "url": "tsitokely.us",
                "audience": "Coffee-Shop",
                "clientId": "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk",
                "callbackURL": "http://localhost:8100"
            }
        }"#;
        let config: DeploymentConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(config, DeploymentConfiguration::development());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{ "production": true, "api_server_url": "https://api.example.com" }"#;
        assert!(serde_json::from_str::<DeploymentConfiguration>(json).is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DeploymentConfiguration::development();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("[auth0]"));
        let parsed: DeploymentConfiguration = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_api_url_joins_paths() {
        let config = DeploymentConfiguration::development();
        assert_eq!(
            config.api_url("/drinks").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks"
        );
        assert_eq!(
            config.api_url("drinks/3").unwrap().as_str(),
            "http://127.0.0.1:5000/drinks/3"
        );
    }

    #[test]
    fn test_api_url_keeps_base_prefix() {
        let config = DeploymentConfiguration::new(
            true,
            "https://coffee.example.com/api",
            DeploymentConfiguration::development().auth0().clone(),
        );
        assert_eq!(
            config.api_url("//drinks-detail").unwrap().as_str(),
            "https://coffee.example.com/api/drinks-detail"
        );
    }

    #[test]
    fn test_api_url_invalid_base() {
        let config = DeploymentConfiguration::new(
            false,
            "not a url",
            DeploymentConfiguration::development().auth0().clone(),
        );
        assert!(matches!(
            config.api_url("/drinks"),
            Err(DomainError::InvalidUrl { field: "api_server_url", .. })
        ));
    }
}
