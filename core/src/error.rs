//! Error types for declaration and parsing failures.
//!
//! Help requests are not errors; they are reported through
//! [`ParseOutcome::HelpRequested`](crate::ParseOutcome::HelpRequested).

use thiserror::Error;

use crate::validate::DeclarationError;

/// Errors that stop a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The declaration itself is malformed.
    #[error("invalid declaration: {0}")]
    Declaration(#[from] DeclarationError),

    /// A token could not be absorbed by any option or remaining positional.
    ///
    /// `usage` carries the rendered help text shown as context.
    #[error("too many arguments")]
    TooManyArguments { token: String, usage: String },

    /// A single-valued option was the last token on the command line.
    #[error("option '{0}' requires a value")]
    MissingValue(String),
}

impl ParseError {
    /// Process exit code the caller should terminate with.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Help text rendered alongside the error, if any.
    pub fn usage(&self) -> Option<&str> {
        match self {
            Self::TooManyArguments { usage, .. } => Some(usage),
            _ => None,
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
