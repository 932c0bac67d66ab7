//! Configuration file loading for brewenv
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BREWENV_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./brewenv.toml` or `./.brewenv.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/brewenv/config.toml`
//! 5. Built-in presets

mod file_config;
mod keys;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileProbeConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader, ConfigSource, ENV_PREFIX, SourceKind};
