//! **Reachability probe** adapters
//!
//! Implements [`ReachabilityProbe`](brewenv_application::ReachabilityProbe)
//! over HTTP, gated behind the `probe` Cargo feature flag:
//!
//! ```toml
//! # infrastructure/Cargo.toml
//! [features]
//! probe = ["dep:reqwest"]
//!
//! # cli/Cargo.toml (enabled by default for end users)
//! [features]
//! default = ["probe"]
//! probe = ["brewenv-infrastructure/probe"]
//! ```

#[cfg(feature = "probe")]
mod http;

#[cfg(feature = "probe")]
pub use http::{HttpReachabilityProbe, ProbeBuildError};
