//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use super::keys::{CanonicalKeys, EnvOverrides};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "BREWENV_";

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_FILES: [&str; 2] = ["brewenv.toml", ".brewenv.toml"];

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly requested file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A source could not be read or did not match the schema.
    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

/// Kind of configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Explicit,
    Project,
    Global,
    Environment,
    Default,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Explicit => "explicit",
            SourceKind::Project => "project",
            SourceKind::Global => "global",
            SourceKind::Environment => "environment",
            SourceKind::Default => "default",
        }
    }
}

/// One configuration source and whether it is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    pub kind: SourceKind,
    /// File path or description of the source
    pub location: String,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `BREWENV_*` environment variables (`__` separates nesting levels)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./brewenv.toml` or `./.brewenv.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/brewenv/config.toml`
    /// 5. Built-in presets
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigLoadError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "merging global config");
                figment = figment.merge(CanonicalKeys(Toml::file(&global_path)));
            }
        }

        // Add project-level config file
        if let Some(path) = Self::project_config_path() {
            debug!(path = %path.display(), "merging project config");
            figment = figment.merge(CanonicalKeys(Toml::file(&path)));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigLoadError::NotFound(path.clone()));
            }
            debug!(path = %path.display(), "merging explicit config");
            figment = figment.merge(CanonicalKeys(Toml::file(path)));
        }

        figment = figment.merge(EnvOverrides::new(ENV_PREFIX));

        figment.extract().map_err(|e| ConfigLoadError::from(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/brewenv/config.toml if set,
    /// otherwise falls back to ~/.config/brewenv/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("brewenv").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Configuration sources in priority order, highest first.
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        let overrides: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        sources.push(ConfigSource {
            kind: SourceKind::Environment,
            location: if overrides.is_empty() {
                format!("{ENV_PREFIX}* environment variables")
            } else {
                overrides.join(", ")
            },
            found: !overrides.is_empty(),
        });

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                kind: SourceKind::Explicit,
                location: path.display().to_string(),
                found: path.exists(),
            });
        }

        sources.push(match Self::project_config_path() {
            Some(path) => ConfigSource {
                kind: SourceKind::Project,
                location: path.display().to_string(),
                found: true,
            },
            None => ConfigSource {
                kind: SourceKind::Project,
                location: "./brewenv.toml or ./.brewenv.toml".to_string(),
                found: false,
            },
        });

        if let Some(path) = Self::global_config_path() {
            sources.push(ConfigSource {
                kind: SourceKind::Global,
                found: path.exists(),
                location: path.display().to_string(),
            });
        }

        sources.push(ConfigSource {
            kind: SourceKind::Default,
            location: "built-in presets".to_string(),
            found: true,
        });

        sources
    }
}
