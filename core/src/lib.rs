//! Declarative command-line surface and single-pass argument parser.
//!
//! This crate describes what a program accepts and parses an argument vector
//! against that description:
//!
//! - [`OptionSpec`]: one declared entry, either a positional argument, an optional
//!   flag with an [`Arity`] and alias, or a free-text help [`Message`](OptionSpec::Message).
//! - [`CommandSpec`]: the ordered declaration plus a description and
//!   [`ParserConfig`].
//! - [`CommandParser`]: validates a declaration once, then parses argument
//!   vectors into [`Bindings`] in one left-to-right pass.
//! - [`render_help`]: the aligned help screen shown when `--help`, `-h` or
//!   `-?` is seen, or when an argument has nowhere to go.
//!
//! Help requests are reported as [`ParseOutcome::HelpRequested`] rather than
//! terminating the process; the caller decides how to exit, using
//! [`ParseOutcome::exit_code`] and [`ParseError::exit_code`].
//!
//! # Example
//!
//! ```
//! use command_parser_core::*;
//!
//! let spec = CommandSpec::from_options(
//!     [
//!         OptionSpec::message("Files:"),
//!         OptionSpec::optional("--outfile", "write output to NAME", Arity::One, Some("-o")),
//!         OptionSpec::flag("--stdout", "write scanner on stdout", Some("-t")),
//!         OptionSpec::positional("files", "input files", Arity::Unbounded),
//!     ],
//!     "Generates programs that perform pattern-matching on text",
//! );
//! let parser = CommandParser::new(spec).unwrap();
//!
//! let bindings = parser
//!     .parse(["flex", "a.l", "-t", "b.l"])
//!     .unwrap()
//!     .into_bindings()
//!     .unwrap();
//! assert_eq!(bindings.lookup("stdout"), Some(&Value::Absent));
//! assert_eq!(bindings.lookup("files").and_then(Value::as_multi).map(|f| f.len()), Some(2));
//!
//! let err = CommandParser::new(CommandSpec::new("no positionals"))
//!     .unwrap()
//!     .parse(["tool", "extra.txt"])
//!     .unwrap_err();
//! assert!(matches!(err, ParseError::TooManyArguments { .. }));
//! assert_eq!(err.to_string(), "too many arguments");
//! ```

mod bindings;
mod config;
mod error;
mod help;
mod model;
mod parser;
mod types;
mod validate;

pub use bindings::Bindings;
pub use config::ParserConfig;
pub use error::{ParseError, Result};
pub use help::{option_label, render_help};
pub use model::CommandSpec;
pub use parser::{CommandParser, ParseOutcome};
pub use types::*;
pub use validate::{DeclarationError, validate_declarations};
