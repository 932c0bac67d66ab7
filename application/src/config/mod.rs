//! Application-level configuration.
//!
//! - [`ProbeParams`]: reachability probe control (timeout, user agent)

pub mod probe_params;

pub use probe_params::ProbeParams;
