//! Console output formatter for brewenv

use crate::output::formatter::OutputFormatter;
use brewenv_application::{ConfigAccessorPort, LoginLinks, ProbeReport, ValidationReport};
use brewenv_domain::{
    ApiRoute, CallbackFragment, DeploymentConfiguration, Environment, ResourceServerSettings,
    Severity, known_keys,
};
use colored::Colorize;

/// One configuration source as listed by `brewenv sources`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub label: String,
    pub location: String,
    pub found: bool,
}

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the deployment record, one key per line
    pub fn format_config(env: Environment, config: &DeploymentConfiguration) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Deployment: {}", env)));
        output.push('\n');

        for info in known_keys() {
            let value = config
                .config_get(info.key)
                .map(|v| v.to_string())
                .unwrap_or_default();
            output.push_str(&format!("{} {}\n", format!("{:<20}", info.key).cyan(), value));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_keys(env: Environment) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Known keys"));
        for info in known_keys() {
            output.push_str(&format!("\n{}", info.key.cyan().bold()));
            if info.frontend_key != info.key {
                output.push_str(&format!(" ({})", info.frontend_key));
            }
            output.push('\n');
            output.push_str(&format!("  {}\n", info.description));
            output.push_str(&format!(
                "  {} {}\n",
                "env:".dimmed(),
                info.env_var(env.as_str())
            ));
        }
        output
    }

    pub fn format_validation(report: &ValidationReport) -> String {
        let mut output = String::new();

        for variant in &report.variants {
            if variant.issues.is_empty() {
                continue;
            }
            output.push_str(&Self::section_header(&format!("[{}]", variant.variant)));
            for issue in &variant.issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("  {}: {}\n", label, issue.message));
            }
        }

        let summary = format!(
            "{} error(s), {} warning(s) in {}",
            report.error_count(),
            report.warning_count(),
            report.selected
        );
        if report.is_ok() {
            output.push_str(&format!("\n{} {}\n", "v".green(), summary));
        } else {
            output.push_str(&format!("\n{} {}\n", "x".red(), summary));
        }
        output
    }

    pub fn format_endpoints(config: &DeploymentConfiguration) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Backend API"));
        for route in ApiRoute::all() {
            let target = match route.url(config, None) {
                Ok(url) => url.to_string(),
                Err(e) => format!("{} {}", "!".red(), e),
            };
            let permission = route.permission.unwrap_or("public");
            output.push_str(&format!(
                "  {} {:<40} {}\n",
                format!("{:<7}", route.method).bold(),
                target,
                permission.dimmed()
            ));
        }

        output.push_str(&Self::section_header("Identity provider"));
        match config.auth0().endpoints() {
            Ok(endpoints) => {
                let rows = [
                    ("issuer", endpoints.issuer.as_str()),
                    ("authorize", endpoints.authorize.as_str()),
                    ("token", endpoints.token.as_str()),
                    ("userinfo", endpoints.userinfo.as_str()),
                    ("logout", endpoints.logout.as_str()),
                    ("jwks", endpoints.jwks.as_str()),
                    ("discovery", endpoints.discovery.as_str()),
                ];
                for (name, url) in rows {
                    output.push_str(&format!("  {} {}\n", format!("{:<10}", name).cyan(), url));
                }
            }
            Err(e) => output.push_str(&format!("  {} {}\n", "!".red(), e)),
        }

        if let Ok(settings) = ResourceServerSettings::from_config(config) {
            output.push_str(&Self::section_header("Resource server"));
            for (name, value) in settings.env_vars() {
                output.push_str(&format!("  {}={}\n", name, value));
            }
            output.push_str(&format!(
                "  {} {}\n",
                "algorithms:".dimmed(),
                settings.algorithms.join(", ")
            ));
        }

        output
    }

    /// The login link alone, so the output can be piped
    pub fn format_login(links: &LoginLinks) -> String {
        format!("{}\n", links.login)
    }

    pub fn format_callback(fragment: &CallbackFragment) -> String {
        match fragment {
            CallbackFragment::Token(token) => {
                let mut output = format!("{} access token received\n", "v".green());
                output.push_str(&format!(
                    "  {} {}\n",
                    Self::label("token_type"),
                    token.token_type.as_deref().unwrap_or("-")
                ));
                let expires = token
                    .expires_in
                    .map(|s| format!("{}s", s))
                    .unwrap_or_else(|| "-".to_string());
                output.push_str(&format!("  {} {}\n", Self::label("expires_in"), expires));
                if let Some(state) = &token.state {
                    output.push_str(&format!("  {} {}\n", Self::label("state"), state));
                }
                output.push_str(&format!("  {} {}\n", Self::label("access_token"), token.access_token));
                output
            }
            CallbackFragment::Error {
                error,
                description,
                state,
            } => {
                let mut output = format!("{} {}\n", "x".red(), error.red().bold());
                if let Some(description) = description {
                    output.push_str(&format!("  {}\n", description));
                }
                if let Some(state) = state {
                    output.push_str(&format!("  {} {}\n", Self::label("state"), state));
                }
                output
            }
            CallbackFragment::Empty => {
                format!("{} no token or error in the callback\n", "-".dimmed())
            }
        }
    }

    pub fn format_probe(report: &ProbeReport) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(&format!(
            "Reachability ({})",
            report.environment
        )));

        for outcome in &report.outcomes {
            let mark = if outcome.is_reachable() {
                "v".green()
            } else {
                "x".red()
            };
            let status = match (&outcome.status, &outcome.error) {
                (Some(code), _) => code.to_string(),
                (None, Some(error)) => error.clone(),
                (None, None) => "-".to_string(),
            };
            output.push_str(&format!(
                "  {} {} {} {} ({} ms)\n",
                mark,
                format!("{:<10}", outcome.target.kind).bold(),
                outcome.target.url,
                status,
                outcome.latency_ms
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "checked at".dimmed(),
            report.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output
    }

    pub fn format_sources(sources: &[SourceLine]) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Configuration sources"));
        for source in sources {
            let mark = if source.found {
                "v".green()
            } else {
                "-".dimmed()
            };
            output.push_str(&format!(
                "  {} {} {}\n",
                mark,
                format!("{:<12}", source.label).bold(),
                source.location
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}", line.cyan(), format!("{:^60}", title).bold(), line.cyan())
    }

    /// Field name padded to a fixed column, then colored
    fn label(name: &str) -> colored::ColoredString {
        format!("{:<12}", name).cyan()
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_config(&self, env: Environment, config: &DeploymentConfiguration) -> String {
        Self::format_config(env, config)
    }

    fn format_keys(&self, env: Environment) -> String {
        Self::format_keys(env)
    }

    fn format_validation(&self, report: &ValidationReport) -> String {
        Self::format_validation(report)
    }

    fn format_endpoints(&self, config: &DeploymentConfiguration) -> String {
        Self::format_endpoints(config)
    }

    fn format_login(&self, links: &LoginLinks) -> String {
        Self::format_login(links)
    }

    fn format_callback(&self, fragment: &CallbackFragment) -> String {
        Self::format_callback(fragment)
    }

    fn format_probe(&self, report: &ProbeReport) -> String {
        Self::format_probe(report)
    }

    fn format_sources(&self, sources: &[SourceLine]) -> String {
        Self::format_sources(sources)
    }
}
