//! Parser and help-rendering settings.

use serde::{Deserialize, Serialize};

/// Settings shared by the parser and the help renderer.
///
/// The defaults reproduce the classic layout: `--help`, `-h` and `-?` request
/// help, labels are padded to at least 14 columns, and the usage banner ends
/// in `[OPTIONS] [FILE]...`.
///
/// # Examples
///
/// ```
/// use command_parser_core::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert!(config.is_help("-?"));
/// assert!(!config.is_help("--halp"));
/// assert_eq!(config.min_label_width, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Tokens that request help wherever a token is expected.
    pub help_flags: Vec<String>,
    /// Label printed for the synthetic help line.
    pub help_label: String,
    /// Description printed for the synthetic help line.
    pub help_description: String,
    /// Minimum width of the option label column.
    pub min_label_width: usize,
    /// Text following the program name in the usage banner.
    pub usage_placeholder: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            help_flags: vec!["--help".into(), "-h".into(), "-?".into()],
            help_label: "-?, -h, --help".into(),
            help_description: "produce this help message".into(),
            min_label_width: 14,
            usage_placeholder: "[OPTIONS] [FILE]...".into(),
        }
    }
}

impl ParserConfig {
    /// Returns `true` if `token` is one of the help spellings.
    pub fn is_help(&self, token: &str) -> bool {
        self.help_flags.iter().any(|flag| flag == token)
    }
}
