//! JSON and TOML formatters
//!
//! JSON renders every command result. TOML only has a natural shape for the
//! deployment record, which it renders as a `[<variant>]` table that can be
//! pasted into `brewenv.toml`; other results fall back to JSON.

use super::console::SourceLine;
use super::formatter::OutputFormatter;
use brewenv_application::{LoginLinks, ProbeReport, ValidationReport};
use brewenv_domain::{
    ApiRoute, CallbackFragment, ConfigIssue, ConfigIssueCode, DeploymentConfiguration,
    Environment, ResourceServerSettings, Severity, ValueKind, known_keys,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Formats command results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &Value) -> String {
        let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn issue(issue: &ConfigIssue) -> Value {
        let mut value = json!({
            "severity": match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            },
            "code": issue_code(&issue.code),
            "message": issue.message,
        });
        let field = match &issue.code {
            ConfigIssueCode::InvalidUrl { field }
            | ConfigIssueCode::EmptyField { field }
            | ConfigIssueCode::InsecureUrl { field }
            | ConfigIssueCode::LoopbackUrl { field } => Some(field.as_str()),
            ConfigIssueCode::InvalidTenant { .. } => Some("auth0.url"),
            ConfigIssueCode::UnusualClientId { .. } => Some("auth0.client_id"),
            ConfigIssueCode::FlagMismatch { .. } => Some("production"),
        };
        if let Some(field) = field {
            value["field"] = json!(field);
        }
        value
    }
}

/// Stable machine-readable name of an issue code.
fn issue_code(code: &ConfigIssueCode) -> &'static str {
    match code {
        ConfigIssueCode::InvalidUrl { .. } => "invalid_url",
        ConfigIssueCode::EmptyField { .. } => "empty_field",
        ConfigIssueCode::InvalidTenant { .. } => "invalid_tenant",
        ConfigIssueCode::UnusualClientId { .. } => "unusual_client_id",
        ConfigIssueCode::InsecureUrl { .. } => "insecure_url",
        ConfigIssueCode::LoopbackUrl { .. } => "loopback_url",
        ConfigIssueCode::FlagMismatch { .. } => "flag_mismatch",
    }
}

fn value_kind(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Boolean => "boolean",
        ValueKind::Url => "url",
        ValueKind::Text => "text",
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_config(&self, _env: Environment, config: &DeploymentConfiguration) -> String {
        Self::render(&json!(config))
    }

    fn format_keys(&self, env: Environment) -> String {
        let keys: Vec<Value> = known_keys()
            .iter()
            .map(|info| {
                json!({
                    "key": info.key,
                    "frontend_key": info.frontend_key,
                    "env_var": info.env_var(env.as_str()),
                    "kind": value_kind(info.kind),
                    "description": info.description,
                })
            })
            .collect();
        Self::render(&Value::Array(keys))
    }

    fn format_validation(&self, report: &ValidationReport) -> String {
        let variants: Vec<Value> = report
            .variants
            .iter()
            .map(|v| {
                json!({
                    "variant": v.variant,
                    "issues": v.issues.iter().map(Self::issue).collect::<Vec<_>>(),
                })
            })
            .collect();
        Self::render(&json!({
            "selected": report.selected,
            "ok": report.is_ok(),
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "variants": variants,
        }))
    }

    fn format_endpoints(&self, config: &DeploymentConfiguration) -> String {
        let api: Vec<Value> = ApiRoute::all()
            .iter()
            .map(|route| {
                let mut value = json!(route);
                match route.url(config, None) {
                    Ok(url) => value["url"] = json!(url),
                    Err(e) => value["error"] = json!(e.to_string()),
                }
                value
            })
            .collect();
        let identity_provider = match config.auth0().endpoints() {
            Ok(endpoints) => json!(endpoints),
            Err(e) => json!({ "error": e.to_string() }),
        };
        let resource_server = match ResourceServerSettings::from_config(config) {
            Ok(settings) => json!(settings),
            Err(e) => json!({ "error": e.to_string() }),
        };
        Self::render(&json!({
            "api": api,
            "identity_provider": identity_provider,
            "resource_server": resource_server,
        }))
    }

    fn format_login(&self, links: &LoginLinks) -> String {
        Self::render(&json!({
            "login": links.login,
            "logout": links.logout,
            "redirect_uri": links.redirect_uri,
        }))
    }

    fn format_callback(&self, fragment: &CallbackFragment) -> String {
        Self::render(&json!(fragment))
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        Self::render(&json!(report))
    }

    fn format_sources(&self, sources: &[SourceLine]) -> String {
        let sources: Vec<Value> = sources
            .iter()
            .map(|s| json!({ "kind": s.label, "location": s.location, "found": s.found }))
            .collect();
        Self::render(&Value::Array(sources))
    }
}

/// Formats the deployment record as a TOML table
pub struct TomlFormatter;

impl OutputFormatter for TomlFormatter {
    fn format_config(&self, env: Environment, config: &DeploymentConfiguration) -> String {
        let table = BTreeMap::from([(env.as_str(), config)]);
        toml::to_string(&table).unwrap_or_default()
    }

    fn format_keys(&self, env: Environment) -> String {
        JsonFormatter.format_keys(env)
    }

    fn format_validation(&self, report: &ValidationReport) -> String {
        JsonFormatter.format_validation(report)
    }

    fn format_endpoints(&self, config: &DeploymentConfiguration) -> String {
        JsonFormatter.format_endpoints(config)
    }

    fn format_login(&self, links: &LoginLinks) -> String {
        JsonFormatter.format_login(links)
    }

    fn format_callback(&self, fragment: &CallbackFragment) -> String {
        JsonFormatter.format_callback(fragment)
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        JsonFormatter.format_probe(report)
    }

    fn format_sources(&self, sources: &[SourceLine]) -> String {
        JsonFormatter.format_sources(sources)
    }
}
