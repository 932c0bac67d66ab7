//! Route catalog of the Coffee Shop backend
//!
//! Each route carries the permission the backend checks in the access
//! token's `permissions` claim. Public routes carry none.

use crate::core::error::DomainError;
use crate::deployment::entities::DeploymentConfiguration;
use serde::Serialize;
use std::fmt;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.pad(name)
    }
}

/// A backend route and the permission guarding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiRoute {
    pub method: HttpMethod,
    /// Path template; `{id}` is the drink id
    pub path: &'static str,
    pub permission: Option<&'static str>,
    pub description: &'static str,
}

static ROUTES: [ApiRoute; 5] = [
    ApiRoute {
        method: HttpMethod::Get,
        path: "/drinks",
        permission: None,
        description: "List drinks (short form)",
    },
    ApiRoute {
        method: HttpMethod::Get,
        path: "/drinks-detail",
        permission: Some("get:drinks-detail"),
        description: "List drinks with full recipes",
    },
    ApiRoute {
        method: HttpMethod::Post,
        path: "/drinks",
        permission: Some("post:drinks"),
        description: "Create a drink",
    },
    ApiRoute {
        method: HttpMethod::Patch,
        path: "/drinks/{id}",
        permission: Some("patch:drinks"),
        description: "Update a drink",
    },
    ApiRoute {
        method: HttpMethod::Delete,
        path: "/drinks/{id}",
        permission: Some("delete:drinks"),
        description: "Delete a drink",
    },
];

impl ApiRoute {
    /// All backend routes.
    pub fn all() -> &'static [ApiRoute] {
        &ROUTES
    }

    /// The public route used to check that the API is up.
    pub fn health_check() -> &'static ApiRoute {
        &ROUTES[0]
    }

    pub fn is_public(&self) -> bool {
        self.permission.is_none()
    }

    /// Concrete request path, substituting `{id}` when the route has one.
    pub fn path_for(&self, id: Option<u64>) -> String {
        match id {
            Some(id) => self.path.replace("{id}", &id.to_string()),
            None => self.path.to_string(),
        }
    }

    /// Absolute request URL against the configured API origin.
    pub fn url(&self, config: &DeploymentConfiguration, id: Option<u64>) -> Result<Url, DomainError> {
        config.api_url(&self.path_for(id))
    }
}
