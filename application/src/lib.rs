//! Application layer for brewenv
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ProbeParams;
pub use ports::{
    config_accessor::{ConfigAccessError, ConfigAccessorPort, ConfigValue},
    progress::{NoProbeProgress, ProbeProgressNotifier},
    reachability::{ProbeKind, ProbeOutcome, ProbeTarget, ReachabilityProbe},
};
pub use use_cases::build_login_link::{
    BuildLoginLinkError, BuildLoginLinkInput, BuildLoginLinkUseCase, LoginLinks,
};
pub use use_cases::probe_endpoints::{ProbeEndpointsError, ProbeEndpointsUseCase, ProbeReport};
pub use use_cases::validate_config::{
    ValidateConfigInput, ValidateConfigUseCase, ValidationReport, VariantIssues,
};
