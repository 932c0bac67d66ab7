//! Identity-provider endpoints derived from the Auth0 settings.
//!
//! The client and the API talk to the same tenant: the client sends users to
//! the authorize endpoint, the API fetches signing keys and checks the issuer.
//! Both views are computed here so they can never drift apart.

pub mod endpoints;
pub mod resource_server;

pub use endpoints::{AUTH0_DOMAIN_SUFFIX, SIGNING_ALGORITHMS, TenantEndpoints};
pub use resource_server::ResourceServerSettings;
