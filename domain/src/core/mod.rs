//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`http_url::parse_http_url`]: strict parsing of the URL-valued fields

pub mod error;
pub mod http_url;
