//! Deployment record validation.
//!
//! Loading never rejects a record: values are trusted as the deployer wrote
//! them. Validation is a separate pass that reports structured issues with
//! severity levels, so `brewenv validate` can flag a mismatched callback URL
//! before the identity provider does.
//!
//! # Examples
//!
//! ```
//! use brewenv_domain::DeploymentConfiguration;
//!
//! let issues = DeploymentConfiguration::development().validate();
//! assert!(issues.is_empty());
//! ```

use crate::core::error::DomainError;
use crate::core::http_url::{is_loopback, parse_http_url};
use crate::deployment::entities::DeploymentConfiguration;
use crate::deployment::value_objects::Environment;

/// Length of client ids Auth0 generates.
const AUTH0_CLIENT_ID_LEN: usize = 32;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the consuming application cannot work with this value.
    Error,
    /// Non-fatal: works, but probably not what the deployer meant.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A URL field is not an absolute http(s) URL.
    InvalidUrl { field: String },
    /// A required string is empty.
    EmptyField { field: String },
    /// The tenant prefix carries a scheme, path or whitespace.
    InvalidTenant { value: String },
    /// The client id does not look like an Auth0 client id.
    UnusualClientId { length: usize },
    /// Production record talks plain http.
    InsecureUrl { field: String },
    /// Production record points at the local machine.
    LoopbackUrl { field: String },
    /// The `production` flag disagrees with the variant the record is stored under.
    FlagMismatch { variant: Environment },
}

/// A detected issue in a deployment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl DeploymentConfiguration {
    /// Validate the record, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. URL fields
        let urls = [
            ("api_server_url", self.api_server_url()),
            ("auth0.callback_url", self.auth0().callback_url()),
        ];
        for (field, value) in urls {
            match parse_http_url(field, value) {
                Ok(url) if self.production() => {
                    if url.scheme() == "http" {
                        issues.push(ConfigIssue::warning(
                            ConfigIssueCode::InsecureUrl {
                                field: field.to_string(),
                            },
                            format!("{field}: production record uses plain http ({value})"),
                        ));
                    }
                    if is_loopback(&url) {
                        issues.push(ConfigIssue::warning(
                            ConfigIssueCode::LoopbackUrl {
                                field: field.to_string(),
                            },
                            format!("{field}: production record points at the local machine ({value})"),
                        ));
                    }
                }
                Ok(_) => {}
                Err(DomainError::EmptyField(_)) => issues.push(empty(field)),
                Err(e) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidUrl {
                        field: field.to_string(),
                    },
                    e.to_string(),
                )),
            }
        }

        // 2. Required strings
        let auth0 = self.auth0();
        for (field, value) in [
            ("auth0.audience", auth0.audience()),
            ("auth0.client_id", auth0.client_id()),
        ] {
            if value.trim().is_empty() {
                issues.push(empty(field));
            }
        }

        // 3. Tenant prefix
        match auth0.tenant_host() {
            Ok(_) => {}
            Err(DomainError::EmptyField(field)) => issues.push(empty(field)),
            Err(e) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidTenant {
                    value: auth0.url().to_string(),
                },
                e.to_string(),
            )),
        }

        // 4. Client id shape
        let client_id = auth0.client_id().trim();
        if !client_id.is_empty()
            && (client_id.len() != AUTH0_CLIENT_ID_LEN
                || !client_id.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnusualClientId {
                    length: client_id.len(),
                },
                format!(
                    "auth0.client_id: expected {AUTH0_CLIENT_ID_LEN} alphanumeric characters, got '{client_id}'"
                ),
            ));
        }

        issues
    }

    /// Validate the record as stored under `variant`.
    ///
    /// Adds a [`ConfigIssueCode::FlagMismatch`] error when the record's
    /// `production` flag disagrees with the variant.
    pub fn validate_as(&self, variant: Environment) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.environment() != variant {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::FlagMismatch { variant },
                format!(
                    "[{variant}] production = {} does not match the variant",
                    self.production()
                ),
            ));
        }
        issues.extend(self.validate());
        issues
    }
}

fn empty(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::EmptyField {
            field: field.to_string(),
        },
        format!("{field} cannot be empty"),
    )
}
