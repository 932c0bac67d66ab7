//! CLI entrypoint for brewenv
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use brewenv_application::{
    BuildLoginLinkInput, BuildLoginLinkUseCase, ConfigAccessorPort, LoginLinks,
};
use brewenv_domain::{CallbackFragment, DeploymentConfiguration, OutputFormat};
use brewenv_infrastructure::{ConfigLoader, FileConfig};
use brewenv_presentation::{
    Cli, Command, OutputFormatter, SourceLine, formatter_for, render_export,
};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting brewenv");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    if let Some(env) = cli.env {
        config = config.with_environment(env);
    }
    debug!(environment = %config.environment, "configuration loaded");

    if !config.output.color_enabled(cli.no_color) {
        colored::control::set_override(false);
    }

    let format = config.output.resolve_format(cli.format.map(OutputFormat::from));
    let formatter = formatter_for(format);

    run(&cli, &config, format, formatter.as_ref()).await
}

async fn run(
    cli: &Cli,
    config: &FileConfig,
    format: OutputFormat,
    formatter: &dyn OutputFormatter,
) -> Result<ExitCode> {
    let env = config.environment;
    let active = config.active();

    match &cli.command {
        Command::Show => print!("{}", formatter.format_config(env, active)),

        Command::Get { key } => {
            let value = active.config_get(key)?;
            println!("{}", value);
        }

        Command::Keys => print!("{}", formatter.format_keys(env)),

        Command::Validate => {
            let report = config.validate();
            print!("{}", formatter.format_validation(&report));
            if !report.is_ok() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::LoginUrl {
            callback_path,
            state,
        } => {
            let mut input = BuildLoginLinkInput::default();
            if let Some(path) = callback_path {
                input = input.with_callback_path(path.clone());
            }
            if let Some(state) = state {
                input = input.with_state(state.clone());
            }
            let links = BuildLoginLinkUseCase::execute(active, input)?;
            print!("{}", formatter.format_login(&links));
        }

        Command::LogoutUrl => {
            let links = build_links(active)?;
            match format {
                OutputFormat::Text => println!("{}", links.logout),
                _ => print!("{}", formatter.format_login(&links)),
            }
        }

        Command::Endpoints => print!("{}", formatter.format_endpoints(active)),

        Command::ParseCallback { url } => {
            let fragment = CallbackFragment::parse(url);
            print!("{}", formatter.format_callback(&fragment));
            if fragment.is_error() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Command::Export { target } => {
            let rendered = render_export(*target, active)
                .with_context(|| format!("Cannot export the {} record", env))?;
            print!("{}", rendered);
        }

        Command::Probe => return probe(cli, config, formatter).await,

        Command::Sources => {
            let sources: Vec<SourceLine> = ConfigLoader::config_sources(cli.config.as_ref())
                .into_iter()
                .map(|source| SourceLine {
                    label: source.kind.as_str().to_string(),
                    location: source.location,
                    found: source.found,
                })
                .collect();
            print!("{}", formatter.format_sources(&sources));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_links(config: &DeploymentConfiguration) -> Result<LoginLinks> {
    Ok(BuildLoginLinkUseCase::execute(
        config,
        BuildLoginLinkInput::default(),
    )?)
}

#[cfg(feature = "probe")]
async fn probe(cli: &Cli, config: &FileConfig, formatter: &dyn OutputFormatter) -> Result<ExitCode> {
    use brewenv_application::{NoProbeProgress, ProbeEndpointsUseCase, ProbeProgressNotifier};
    use brewenv_infrastructure::HttpReachabilityProbe;
    use brewenv_presentation::{ProbeSpinner, SimpleProbeProgress};
    use std::io::IsTerminal;
    use std::sync::Arc;

    let params = config.probe.to_probe_params()?;
    let probe = Arc::new(HttpReachabilityProbe::new(&params)?);
    let use_case = ProbeEndpointsUseCase::new(probe);

    let progress: Box<dyn ProbeProgressNotifier> = if cli.quiet {
        Box::new(NoProbeProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProbeSpinner::new())
    } else {
        Box::new(SimpleProbeProgress)
    };

    let report = use_case
        .execute_with_progress(config.active(), progress.as_ref())
        .await?;
    print!("{}", formatter.format_probe(&report));

    Ok(if report.all_reachable() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(not(feature = "probe"))]
async fn probe(
    _cli: &Cli,
    _config: &FileConfig,
    _formatter: &dyn OutputFormatter,
) -> Result<ExitCode> {
    anyhow::bail!("brewenv was built without the `probe` feature")
}
