//! Infrastructure layer for brewenv
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod probe;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, ConfigSource, ConfigValidationError, FileConfig,
    FileOutputConfig, FileProbeConfig, SourceKind,
};
#[cfg(feature = "probe")]
pub use probe::{HttpReachabilityProbe, ProbeBuildError};
