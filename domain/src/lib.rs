//! Domain layer for brewenv
//!
//! This crate contains the deployment configuration record, its build
//! variants, and everything derived from it: identity-provider endpoints,
//! login links, backend request URLs and validation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deployment configuration
//!
//! One immutable record per build variant (development, production) with six
//! fields: the `production` flag, the backend origin, and four Auth0 settings.
//! Variants differ in values only, never in shape.
//!
//! ## Derived views
//!
//! - **Tenant endpoints**: authorize, token, JWKS, issuer
//! - **Resource server**: what the API checks on incoming tokens
//! - **Login links**: the `/authorize` redirect the client opens

pub mod api;
pub mod config;
pub mod core;
pub mod deployment;
pub mod identity;
pub mod login;

// Re-export commonly used types
pub use api::{ApiRoute, HttpMethod};
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigKeyInfo, OutputFormat, Severity, ValueKind, known_keys,
    lookup_key,
};
pub use core::error::DomainError;
pub use deployment::{
    entities::{DeploymentConfiguration, IdentityProviderSettings},
    value_objects::Environment,
};
pub use identity::{ResourceServerSettings, SIGNING_ALGORITHMS, TenantEndpoints};
pub use login::{AuthorizeRequest, CallbackFragment, LogoutRequest, TokenFragment};
