//! Output formatter trait

use super::console::{ConsoleFormatter, SourceLine};
use super::structured::{JsonFormatter, TomlFormatter};
use brewenv_application::{LoginLinks, ProbeReport, ValidationReport};
use brewenv_domain::{CallbackFragment, DeploymentConfiguration, Environment, OutputFormat};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Format the active deployment record
    fn format_config(&self, env: Environment, config: &DeploymentConfiguration) -> String;

    /// Format the known configuration keys
    fn format_keys(&self, env: Environment) -> String;

    /// Format a validation report
    fn format_validation(&self, report: &ValidationReport) -> String;

    /// Format backend routes and identity-provider endpoints
    fn format_endpoints(&self, config: &DeploymentConfiguration) -> String;

    /// Format login and logout links
    fn format_login(&self, links: &LoginLinks) -> String;

    /// Format a decoded callback fragment
    fn format_callback(&self, fragment: &CallbackFragment) -> String;

    /// Format a reachability report
    fn format_probe(&self, report: &ProbeReport) -> String;

    /// Format the configuration sources
    fn format_sources(&self, sources: &[SourceLine]) -> String;
}

/// Formatter for a `--format` value.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Toml => Box::new(TomlFormatter),
    }
}
