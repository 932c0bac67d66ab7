//! Use cases (application services)
//!
//! Each use case takes the deployment record(s) it needs as input and
//! returns a report; none of them reads files or the environment.

pub mod build_login_link;
pub mod probe_endpoints;
pub mod validate_config;
