//! User-facing diagnostics written to stderr.

use std::fmt;
use std::io::IsTerminal;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    /// A problem with the user's input.
    Error,
    /// A bug in flex itself.
    Fatal,
}

impl Severity {
    fn marker(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error | Self::Fatal => "Error",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Warning => YELLOW,
            Self::Error | Self::Fatal => RED,
        }
    }
}

/// A message with a severity and, for warnings, an optional source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            line: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, message)
    }

    #[cfg(test)]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Formats the diagnostic, wrapping the marker in ANSI color when asked.
    pub fn render(&self, color: bool) -> String {
        let marker = if color {
            format!("{}{}{RESET}", self.severity.color(), self.severity.marker())
        } else {
            self.severity.marker().to_string()
        };

        match (self.severity, self.line) {
            (Severity::Fatal, _) => format!("{marker}: fatal internal error, {}", self.message),
            (Severity::Warning, Some(line)) => format!("{marker}:{line}: {}", self.message),
            _ => format!("{marker}: {}", self.message),
        }
    }

    /// Writes the diagnostic to stderr.
    pub fn emit(&self) {
        eprintln!("{}", self.render(stderr_supports_color()));
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Color is used only on a terminal and never when `NO_COLOR` is set.
pub fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}
