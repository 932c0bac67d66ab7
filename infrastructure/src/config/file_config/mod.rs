//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! environment = "production"
//!
//! [production]
//! api_server_url = "https://api.coffee.example.com"
//!
//! [production.auth0]
//! callback_url = "https://coffee.example.com"
//! ```
//!
//! Keys are snake_case. Sections left out fall back to the built-in presets.

mod output;
mod probe;

pub use output::FileOutputConfig;
pub use probe::FileProbeConfig;

use brewenv_application::{ValidateConfigInput, ValidateConfigUseCase, ValidationReport};
use brewenv_domain::{DeploymentConfiguration, Environment};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("probe.timeout_seconds cannot be 0")]
    InvalidTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Active build variant
    pub environment: Environment,
    /// Development record
    pub development: DeploymentConfiguration,
    /// Production record
    pub production: DeploymentConfiguration,
    /// Output settings
    pub output: FileOutputConfig,
    /// Reachability probe settings
    pub probe: FileProbeConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            development: DeploymentConfiguration::for_environment(Environment::Development),
            production: DeploymentConfiguration::for_environment(Environment::Production),
            output: FileOutputConfig::default(),
            probe: FileProbeConfig::default(),
        }
    }
}

impl FileConfig {
    /// Record stored under `env`.
    pub fn variant(&self, env: Environment) -> &DeploymentConfiguration {
        match env {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }

    /// Record of the active variant.
    pub fn active(&self) -> &DeploymentConfiguration {
        self.variant(self.environment)
    }

    /// Select another active variant.
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.environment = env;
        self
    }

    /// Every variant with its record, in declaration order.
    pub fn variants(&self) -> Vec<(Environment, DeploymentConfiguration)> {
        Environment::ALL
            .iter()
            .map(|env| (*env, self.variant(*env).clone()))
            .collect()
    }

    /// Validate the active variant and the flags of all variants.
    pub fn validate(&self) -> ValidationReport {
        let input = self
            .variants()
            .into_iter()
            .fold(ValidateConfigInput::new(self.environment), |input, (env, config)| {
                input.with_variant(env, config)
            });
        ValidateConfigUseCase::execute(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewenv_domain::{ConfigIssueCode, OutputFormat};

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.active(), &DeploymentConfiguration::development());
        assert!(config.production.production());
        assert!(config.output.color);
        assert_eq!(config.probe.timeout_seconds, 5);
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
environment = "prod"

[development]
production = false
api_server_url = "http://127.0.0.1:5000"

[development.auth0]
url = "tsitokely.us"
audience = "Coffee-Shop"
client_id = "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk"
callback_url = "http://localhost:8100"

[production]
production = true
api_server_url = "https://api.coffee.example.com"

[production.auth0]
url = "tsitokely.us"
audience = "Coffee-Shop"
client_id = "Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk"
callback_url = "https://coffee.example.com"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.active().api_server_url(), "https://api.coffee.example.com");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
        assert_eq!(config.validate().warning_count(), 0);
    }

    #[test]
    fn test_deserialize_output_only() {
        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert_eq!(config.active(), &DeploymentConfiguration::development());
        assert!(!config.output.color);
    }

    #[test]
    fn test_variants_cover_both_environments() {
        let config = FileConfig::default();
        let envs: Vec<_> = config.variants().into_iter().map(|(env, _)| env).collect();
        assert_eq!(envs, vec![Environment::Development, Environment::Production]);
    }

    #[test]
    fn test_validate_default_config() {
        let report = FileConfig::default().validate();
        assert!(report.is_ok());
        assert_eq!(report.warning_count(), 0);

        let report = FileConfig::default()
            .with_environment(Environment::Production)
            .validate();
        assert!(report.is_ok());
        assert_eq!(report.warning_count(), 4);
    }

    #[test]
    fn test_validate_flag_mismatch() {
        let mut config = FileConfig::default();
        config.production = DeploymentConfiguration::development();
        let report = config.validate();
        assert!(!report.is_ok());
        assert!(report.issues().any(|i| i.code
            == ConfigIssueCode::FlagMismatch {
                variant: Environment::Production
            }));
    }
}
