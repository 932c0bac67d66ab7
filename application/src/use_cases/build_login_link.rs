//! Build login link use case
//!
//! Produces the `/authorize` link the client opens to start a login, and
//! the matching logout link. A record with validation errors never yields a
//! link: the identity provider would reject it with a far less helpful
//! message.

use brewenv_domain::{
    AuthorizeRequest, ConfigIssue, DeploymentConfiguration, DomainError, LogoutRequest,
};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors that can occur while building login links.
#[derive(Error, Debug)]
pub enum BuildLoginLinkError {
    /// The record has validation errors; the first message is included.
    #[error("Configuration is invalid: {}", .0.first().map(|i| i.message.as_str()).unwrap_or("unknown issue"))]
    InvalidConfig(Vec<ConfigIssue>),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the BuildLoginLink use case.
#[derive(Debug, Clone, Default)]
pub struct BuildLoginLinkInput {
    /// Route appended to the callback URL
    pub callback_path: Option<String>,
    /// Opaque value echoed back in the redirect
    pub state: Option<String>,
}

impl BuildLoginLinkInput {
    pub fn with_callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = Some(path.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Output of the BuildLoginLink use case.
#[derive(Debug, Clone)]
pub struct LoginLinks {
    pub login: Url,
    pub logout: Url,
    /// Exact `redirect_uri` sent to the provider
    pub redirect_uri: String,
}

/// Use case for building login and logout links
pub struct BuildLoginLinkUseCase;

impl BuildLoginLinkUseCase {
    pub fn execute(
        config: &DeploymentConfiguration,
        input: BuildLoginLinkInput,
    ) -> Result<LoginLinks, BuildLoginLinkError> {
        let errors: Vec<ConfigIssue> = config
            .validate()
            .into_iter()
            .filter(ConfigIssue::is_error)
            .collect();
        if !errors.is_empty() {
            return Err(BuildLoginLinkError::InvalidConfig(errors));
        }

        let mut request = AuthorizeRequest::from_config(config);
        if let Some(path) = input.callback_path {
            request = request.with_callback_path(path);
        }
        if let Some(state) = input.state {
            request = request.with_state(state);
        }

        let links = LoginLinks {
            login: request.build()?,
            logout: LogoutRequest::from_config(config).build()?,
            redirect_uri: request.redirect_uri()?,
        };
        debug!(redirect_uri = %links.redirect_uri, "built login link");
        Ok(links)
    }
}
