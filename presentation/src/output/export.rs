//! Renderers for the consumers of the deployment record
//!
//! The front end reads an Angular `environment.ts` module whose object
//! literal uses camelCase keys; the backend reads `AUTH0_DOMAIN` and
//! `API_AUDIENCE` from its environment.

use crate::cli::commands::ExportTarget;
use brewenv_domain::{DeploymentConfiguration, DomainError, ResourceServerSettings};
use serde_json::json;

/// Render `config` for `target`.
pub fn render_export(
    target: ExportTarget,
    config: &DeploymentConfiguration,
) -> Result<String, DomainError> {
    match target {
        ExportTarget::FrontendTs => Ok(frontend_ts(config)),
        ExportTarget::FrontendJson => Ok(frontend_json(config)),
        ExportTarget::BackendEnv => backend_env(config),
    }
}

/// `environment.ts` module exporting the record as `environment`.
pub fn frontend_ts(config: &DeploymentConfiguration) -> String {
    let auth0 = config.auth0();
    format!(
        "export const environment = {{\n  \
           production: {},\n  \
           apiServerUrl: '{}', // the running FLASK api server url\n  \
           auth0: {{\n    \
             url: '{}', // the auth0 domain prefix\n    \
             audience: '{}', // the audience set for the auth0 app\n    \
             clientId: '{}', // the client id generated for the auth0 app\n    \
             callbackURL: '{}', // the base url of the running ionic application.\n  \
           }}\n\
         }};\n",
        config.production(),
        ts_string(config.api_server_url()),
        ts_string(auth0.url()),
        ts_string(auth0.audience()),
        ts_string(auth0.client_id()),
        ts_string(auth0.callback_url()),
    )
}

/// The record as JSON with the front-end key names.
pub fn frontend_json(config: &DeploymentConfiguration) -> String {
    let auth0 = config.auth0();
    let value = json!({
        "production": config.production(),
        "apiServerUrl": config.api_server_url(),
        "auth0": {
            "url": auth0.url(),
            "audience": auth0.audience(),
            "clientId": auth0.client_id(),
            "callbackURL": auth0.callback_url(),
        }
    });
    let mut out = serde_json::to_string_pretty(&value).unwrap_or_default();
    out.push('\n');
    out
}

/// `.env` lines for the resource server.
pub fn backend_env(config: &DeploymentConfiguration) -> Result<String, DomainError> {
    let settings = ResourceServerSettings::from_config(config)?;
    let mut out = String::new();
    for (name, value) in settings.env_vars() {
        out.push_str(&format!("{}={}\n", name, env_value(&value)));
    }
    Ok(out)
}

fn ts_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn env_value(value: &str) -> String {
    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'')) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewenv_domain::{Environment, IdentityProviderSettings};

    #[test]
    fn test_frontend_ts_matches_environment_module() {
        let ts = frontend_ts(&DeploymentConfiguration::development());
        assert!(ts.starts_with("export const environment = {\n"));
        assert!(ts.contains("  production: false,\n"));
        assert!(ts.contains("  apiServerUrl: 'http://127.0.0.1:5000',"));
        assert!(ts.contains("    url: 'tsitokely.us',"));
        assert!(ts.contains("    audience: 'Coffee-Shop',"));
        assert!(ts.contains("    clientId: 'Nww3Snu0GAaSwoMPg6nH6ovBFmY1GQpk',"));
        assert!(ts.contains("    callbackURL: 'http://localhost:8100',"));
        assert!(ts.ends_with("  }\n};\n"));
    }

    #[test]
    fn test_frontend_ts_escapes_quotes() {
        let config = DeploymentConfiguration::new(
            true,
            "https://api.example.com",
            IdentityProviderSettings::new("t", "Bob's API", "id", "https://app.example.com"),
        );
        let ts = frontend_ts(&config);
        assert!(ts.contains("  production: true,\n"));
        assert!(ts.contains(r"audience: 'Bob\'s API',"));
    }

    #[test]
    fn test_frontend_json_reads_back_as_record() {
        let config = DeploymentConfiguration::for_environment(Environment::Production);
        let json = frontend_json(&config);
        assert!(json.contains("\"clientId\""));
        assert!(json.contains("\"callbackURL\""));
        let parsed: DeploymentConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backend_env() {
        let env = backend_env(&DeploymentConfiguration::development()).unwrap();
        assert_eq!(env, "AUTH0_DOMAIN=tsitokely.us.auth0.com\nAPI_AUDIENCE=Coffee-Shop\n");
    }

    #[test]
    fn test_backend_env_quotes_spaces() {
        let config = DeploymentConfiguration::new(
            false,
            "http://127.0.0.1:5000",
            IdentityProviderSettings::new("tsitokely.us", "Coffee Shop", "id", "http://localhost:8100"),
        );
        let env = backend_env(&config).unwrap();
        assert!(env.contains("API_AUDIENCE=\"Coffee Shop\"\n"));
    }

    #[test]
    fn test_backend_env_needs_valid_tenant() {
        let config = DeploymentConfiguration::new(
            false,
            "http://127.0.0.1:5000",
            IdentityProviderSettings::new("", "Coffee-Shop", "id", "http://localhost:8100"),
        );
        assert!(render_export(ExportTarget::BackendEnv, &config).is_err());
        assert!(render_export(ExportTarget::FrontendTs, &config).is_ok());
    }
}
