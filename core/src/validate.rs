//! Declaration validation.
//!
//! Validates the structural invariants of an option declaration before any
//! input is parsed, catching duplicate names, malformed flag spellings and
//! names that could never be matched.
//!
//! # Examples
//!
//! ```
//! use command_parser_core::*;
//!
//! let config = ParserConfig::default();
//! let options = vec![
//!     OptionSpec::flag("--verbose", "be chatty", Some("-v")),
//!     OptionSpec::positional("files", "input files", Arity::Unbounded),
//! ];
//! assert!(validate_declarations(&options, &config).is_empty());
//!
//! // Invalid: alias reused by a second flag
//! let options = vec![
//!     OptionSpec::flag("--verbose", "", Some("-v")),
//!     OptionSpec::flag("--version", "", Some("-v")),
//! ];
//! assert_eq!(
//!     validate_declarations(&options, &config),
//!     vec![DeclarationError::DuplicateOption("-v".to_string())]
//! );
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{Arity, LONG_PREFIX, OptionSpec, ParserConfig};

static NAME_PATTERNS: LazyLock<NamePatterns> = LazyLock::new(NamePatterns::new);

struct NamePatterns {
    long_name: Regex,
    alias: Regex,
}

impl NamePatterns {
    fn new() -> Self {
        Self {
            // --outfile, --no-compress, --header-file
            long_name: Regex::new(r"^--[A-Za-z0-9][-A-Za-z0-9_.]*$")
                .expect("static regex must compile"),
            // -o, -V, -Cem
            alias: Regex::new(r"^-[A-Za-z0-9?@][-A-Za-z0-9_.]*$")
                .expect("static regex must compile"),
        }
    }
}

/// Declaration errors.
///
/// Each variant names the offending spelling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// Two optionals share a spelling (canonical name or alias).
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
    /// A positional shares its name with another positional or an optional.
    #[error("name shared with a positional argument: {0}")]
    PositionalConflict(String),
    /// An optional is spelled like a help flag, which always wins.
    #[error("reserved help spelling: {0}")]
    ReservedName(String),
    /// Canonical name is not `--` followed by a word.
    #[error("invalid long option name: {0}")]
    InvalidLongName(String),
    /// Alias is not a single dash followed by a word.
    #[error("invalid option alias: {0}")]
    InvalidAlias(String),
    /// Positional name is empty or looks like a flag.
    #[error("invalid positional name: {0:?}")]
    InvalidPositionalName(String),
    /// `UpTo(n)` with fewer than two values.
    #[error("bounded arity must allow at least two values: {0}")]
    InvalidArity(String),
}

/// Validates an ordered declaration list.
///
/// Stops at the first problem, so the returned list holds at most one error.
pub fn validate_declarations(
    options: &[OptionSpec],
    config: &ParserConfig,
) -> Vec<DeclarationError> {
    let mut errors = Vec::new();
    let mut optional_names: HashSet<&str> = HashSet::new();
    let mut positional_names: HashSet<&str> = HashSet::new();

    for option in options {
        match option {
            OptionSpec::Optional {
                name, arity, alias, ..
            } => {
                if !NAME_PATTERNS.long_name.is_match(name) {
                    errors.push(DeclarationError::InvalidLongName(name.clone()));
                    return errors;
                }
                if let Some(alias) = alias {
                    if !NAME_PATTERNS.alias.is_match(alias) {
                        errors.push(DeclarationError::InvalidAlias(alias.clone()));
                        return errors;
                    }
                }
                if let Err(err) = check_arity(name, *arity) {
                    errors.push(err);
                    return errors;
                }

                for spelling in std::iter::once(name).chain(alias) {
                    if config.is_help(spelling) {
                        errors.push(DeclarationError::ReservedName(spelling.clone()));
                        return errors;
                    }
                    if !optional_names.insert(spelling.as_str()) {
                        errors.push(DeclarationError::DuplicateOption(spelling.clone()));
                        return errors;
                    }
                }

                // `lookup("files")` falls back to `--files`, so the bare form must stay unique
                let bare = name.strip_prefix(LONG_PREFIX).unwrap_or(name);
                if positional_names.contains(bare) {
                    errors.push(DeclarationError::PositionalConflict(name.clone()));
                    return errors;
                }
            }
            OptionSpec::Positional { name, arity, .. } => {
                if name.trim().is_empty() || name.starts_with('-') {
                    errors.push(DeclarationError::InvalidPositionalName(name.clone()));
                    return errors;
                }
                if let Err(err) = check_arity(name, *arity) {
                    errors.push(err);
                    return errors;
                }
                let prefixed = format!("{LONG_PREFIX}{name}");
                if optional_names.contains(prefixed.as_str()) || !positional_names.insert(name) {
                    errors.push(DeclarationError::PositionalConflict(name.clone()));
                    return errors;
                }
            }
            OptionSpec::Message { .. } => {}
        }
    }

    errors
}

fn check_arity(name: &str, arity: Arity) -> Result<(), DeclarationError> {
    match arity {
        Arity::UpTo(n) if n < 2 => Err(DeclarationError::InvalidArity(name.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(options: &[OptionSpec]) -> Vec<DeclarationError> {
        validate_declarations(options, &ParserConfig::default())
    }

    #[test]
    fn test_validate_accepts_flex_style_aliases() {
        let options = vec![
            OptionSpec::message("Table Compression:"),
            OptionSpec::flag("--align", "", Some("-Ca")),
            OptionSpec::flag("--default", "", Some("-Cem")),
            OptionSpec::optional("--outfile", "", Arity::One, Some("-o")),
            OptionSpec::flag("--yylineno", "", None),
            OptionSpec::positional("files", "", Arity::Unbounded),
        ];

        assert!(validate(&options).is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicate_canonical_name() {
        let options = vec![
            OptionSpec::flag("--debug", "", Some("-d")),
            OptionSpec::optional("--debug", "", Arity::One, None),
        ];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::DuplicateOption("--debug".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_alias_matching_other_name() {
        let options = vec![
            OptionSpec::flag("--trace", "", Some("-T")),
            OptionSpec::flag("--tables", "", Some("--trace")),
        ];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::InvalidAlias("--trace".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_help_spellings() {
        let options = vec![OptionSpec::flag("--hidden", "", Some("-h"))];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::ReservedName("-h".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_positional_conflicts() {
        let options = vec![
            OptionSpec::positional("files", "", Arity::Unbounded),
            OptionSpec::positional("files", "", Arity::One),
        ];
        assert_eq!(
            validate(&options),
            vec![DeclarationError::PositionalConflict("files".to_string())]
        );

        let options = vec![
            OptionSpec::flag("--files", "", None),
            OptionSpec::positional("files", "", Arity::One),
        ];
        assert_eq!(
            validate(&options),
            vec![DeclarationError::PositionalConflict("files".to_string())]
        );

        let options = vec![
            OptionSpec::positional("files", "", Arity::Unbounded),
            OptionSpec::flag("--files", "", None),
        ];
        assert_eq!(
            validate(&options),
            vec![DeclarationError::PositionalConflict("--files".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_flag_shaped_positional() {
        let options = vec![OptionSpec::positional("-f", "", Arity::One)];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::InvalidPositionalName("-f".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_bad_long_name() {
        let options = vec![OptionSpec::flag("outfile", "", Some("-o"))];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::InvalidLongName("outfile".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_degenerate_bounded_arity() {
        let options = vec![OptionSpec::optional("--pair", "", Arity::UpTo(1), None)];

        assert_eq!(
            validate(&options),
            vec![DeclarationError::InvalidArity("--pair".to_string())]
        );
    }
}
