//! CLI command definitions

use brewenv_domain::{Environment, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render target for `brewenv export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Angular `environment.ts` module
    FrontendTs,
    /// The same object as JSON, with front-end key names
    FrontendJson,
    /// `.env` lines for the backend (AUTH0_DOMAIN, API_AUDIENCE)
    BackendEnv,
}

/// CLI arguments for brewenv
#[derive(Parser, Debug)]
#[command(name = "brewenv")]
#[command(author, version, about = "Deployment configuration for the Coffee Shop client")]
#[command(long_about = r#"
brewenv manages the deployment record the Coffee Shop front end is built
with: the production flag, the backend origin and the Auth0 parameters.

Configuration files are loaded from (lowest to highest priority):
1. Built-in development and production presets
2. ~/.config/brewenv/config.toml   Global config
3. ./brewenv.toml or ./.brewenv.toml   Project-level config
4. --config <path>     Explicit config file
5. BREWENV_* environment variables (e.g. BREWENV_PRODUCTION__AUTH0__CLIENT_ID)

Example:
  brewenv show
  brewenv -e production validate
  brewenv login-url --callback-path /tabs/user-page
  brewenv export frontend-ts > src/environments/environment.ts
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Build variant to operate on (overrides `environment` in config)
    #[arg(short, long, global = true, value_name = "ENV", value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Output format (defaults to `output.format` in config, then text)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// `--format` values, mapped onto [`OutputFormat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Toml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Toml => OutputFormat::Toml,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the active deployment record
    Show,

    /// Print a single field (canonical or front-end key, e.g. auth0.clientId)
    Get {
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List known keys with their front-end names and environment variables
    Keys,

    /// Check the record; exits non-zero when errors are found
    Validate,

    /// Print the Auth0 authorize URL for the active record
    LoginUrl {
        /// Path appended to the callback URL (e.g. /tabs/user-page)
        #[arg(long, value_name = "PATH")]
        callback_path: Option<String>,

        /// Opaque value echoed back by the provider
        #[arg(long)]
        state: Option<String>,
    },

    /// Print the Auth0 logout URL for the active record
    LogoutUrl,

    /// Print backend routes and identity-provider endpoints
    Endpoints,

    /// Decode the fragment of a login redirect
    ParseCallback {
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Render the record for a consumer
    Export {
        #[arg(value_enum)]
        target: ExportTarget,
    },

    /// Check that the API and the Auth0 tenant respond
    Probe,

    /// List configuration sources and whether they exist
    Sources,
}

fn parse_environment(value: &str) -> Result<Environment, String> {
    value.parse().map_err(|e: brewenv_domain::DomainError| e.to_string())
}
