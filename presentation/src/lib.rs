//! Presentation layer for brewenv
//!
//! This crate contains CLI definitions, output formatters, export
//! renderers and the probe progress spinner.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ExportTarget, FormatArg};
pub use output::console::{ConsoleFormatter, SourceLine};
pub use output::export::render_export;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::structured::{JsonFormatter, TomlFormatter};
pub use progress::reporter::{ProbeSpinner, SimpleProbeProgress};
