//! Config key registry.
//!
//! Defines metadata for the six fields of a deployment record: the dotted
//! key, the name the front end uses, the environment variable that
//! overrides it, and the kind of value. Used by the config accessor and by
//! `brewenv keys`.

/// Kind of value a key holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Boolean,
    /// Absolute http(s) URL
    Url,
    /// Free-form string
    Text,
}

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Dotted key path (e.g., `"auth0.client_id"`).
    pub key: &'static str,
    /// Key path in the front-end environment object (e.g., `"auth0.clientId"`).
    pub frontend_key: &'static str,
    /// Field suffix of the environment override (after `BREWENV_<VARIANT>__`).
    pub env_suffix: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    pub kind: ValueKind,
}

impl ConfigKeyInfo {
    /// Environment variable overriding this key for a variant
    /// (e.g. `BREWENV_PRODUCTION__AUTH0__CLIENT_ID`).
    pub fn env_var(&self, variant: &str) -> String {
        format!(
            "BREWENV_{}__{}",
            variant.to_ascii_uppercase(),
            self.env_suffix
        )
    }
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its dotted path or its front-end path.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS
        .iter()
        .find(|k| k.key == key || k.frontend_key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 6] = [
    ConfigKeyInfo {
        key: "production",
        frontend_key: "production",
        env_suffix: "PRODUCTION",
        description: "Selects production behavior in the client",
        kind: ValueKind::Boolean,
    },
    ConfigKeyInfo {
        key: "api_server_url",
        frontend_key: "apiServerUrl",
        env_suffix: "API_SERVER_URL",
        description: "Origin prepended to every backend request",
        kind: ValueKind::Url,
    },
    ConfigKeyInfo {
        key: "auth0.url",
        frontend_key: "auth0.url",
        env_suffix: "AUTH0__URL",
        description: "Auth0 tenant domain prefix",
        kind: ValueKind::Text,
    },
    ConfigKeyInfo {
        key: "auth0.audience",
        frontend_key: "auth0.audience",
        env_suffix: "AUTH0__AUDIENCE",
        description: "API identifier issued tokens must target",
        kind: ValueKind::Text,
    },
    ConfigKeyInfo {
        key: "auth0.client_id",
        frontend_key: "auth0.clientId",
        env_suffix: "AUTH0__CLIENT_ID",
        description: "Client id Auth0 assigned to the application",
        kind: ValueKind::Text,
    },
    ConfigKeyInfo {
        key: "auth0.callback_url",
        frontend_key: "auth0.callbackURL",
        env_suffix: "AUTH0__CALLBACK_URL",
        description: "Allow-listed redirect URL after login",
        kind: ValueKind::Url,
    },
];
