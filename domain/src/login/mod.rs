//! Browser-side login flow against the identity provider.
//!
//! - [`authorize::AuthorizeRequest`]: the link that starts a login
//! - [`authorize::LogoutRequest`]: the link that ends the provider session
//! - [`callback::CallbackFragment`]: what the provider hands back on redirect

pub mod authorize;
pub mod callback;

pub use authorize::{AuthorizeRequest, LogoutRequest, RESPONSE_TYPE};
pub use callback::{CallbackFragment, TokenFragment};
