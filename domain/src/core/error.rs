//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid URL in {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("Unsupported URL scheme in {field}: {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("Field {0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Invalid identity provider domain: {0}")]
    InvalidTenant(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("Invalid callback path: {0}")]
    InvalidCallbackPath(String),
}
