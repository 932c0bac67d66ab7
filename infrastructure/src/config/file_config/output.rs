//! `[output]` section: how command results are rendered
//!
//! ```toml
//! [output]
//! format = "json"   # text | json | toml; `--format` wins
//! color = false     # `--no-color` also turns it off
//! ```

use brewenv_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Preferred format when `--format` is not given
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Format for this run: the command line, then the file, then text.
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }

    /// Whether console output may be colored.
    pub fn color_enabled(&self, no_color_flag: bool) -> bool {
        self.color && !no_color_flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_format_precedence() {
        let unset = FileOutputConfig::default();
        assert_eq!(unset.resolve_format(None), OutputFormat::Text);
        assert_eq!(unset.resolve_format(Some(OutputFormat::Json)), OutputFormat::Json);

        let from_file = FileOutputConfig {
            format: Some(OutputFormat::Toml),
            color: true,
        };
        assert_eq!(from_file.resolve_format(None), OutputFormat::Toml);
        assert_eq!(from_file.resolve_format(Some(OutputFormat::Text)), OutputFormat::Text);
    }

    #[test]
    fn test_color_switches() {
        let config = FileOutputConfig::default();
        assert!(config.color_enabled(false));
        assert!(!config.color_enabled(true));

        let config: FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert!(!config.output.color_enabled(false));
    }

    #[test]
    fn test_section_reads_format() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"toml\"\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Toml));
        assert!(config.output.color);
    }
}
