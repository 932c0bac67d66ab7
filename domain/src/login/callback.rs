//! Redirect fragment returned by the identity provider
//!
//! With the implicit flow the provider redirects to the callback URL with
//! the outcome in the fragment, e.g.
//! `http://localhost:8100/tabs/user-page#access_token=…&expires_in=7200&token_type=Bearer`.
//! The fragment is only decoded here; the token is opaque to this crate.

use serde::Serialize;
use url::form_urlencoded;

/// Token fields carried by a successful redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenFragment {
    pub access_token: String,
    pub expires_in: Option<u64>,
    pub token_type: Option<String>,
    pub state: Option<String>,
}

/// Decoded callback fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallbackFragment {
    Token(TokenFragment),
    Error {
        error: String,
        description: Option<String>,
        state: Option<String>,
    },
    /// No token and no error (e.g. a plain navigation to the callback URL)
    Empty,
}

impl CallbackFragment {
    /// Decode a full callback URL or a bare fragment (with or without `#`).
    pub fn parse(input: &str) -> Self {
        let fragment = match input.split_once('#') {
            Some((_, fragment)) => fragment,
            None if input.contains("://") => "",
            None => input,
        };

        let mut access_token = None;
        let mut expires_in = None;
        let mut token_type = None;
        let mut state = None;
        let mut error = None;
        let mut description = None;

        for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
            match key.as_ref() {
                "access_token" if !value.is_empty() => access_token = Some(value.into_owned()),
                "expires_in" => expires_in = value.parse().ok(),
                "token_type" => token_type = Some(value.into_owned()),
                "state" => state = Some(value.into_owned()),
                "error" if !value.is_empty() => error = Some(value.into_owned()),
                "error_description" => description = Some(value.into_owned()),
                _ => {}
            }
        }

        if let Some(access_token) = access_token {
            CallbackFragment::Token(TokenFragment {
                access_token,
                expires_in,
                token_type,
                state,
            })
        } else if let Some(error) = error {
            CallbackFragment::Error {
                error,
                description,
                state,
            }
        } else {
            CallbackFragment::Empty
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            CallbackFragment::Token(token) => Some(&token.access_token),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CallbackFragment::Error { .. })
    }
}
