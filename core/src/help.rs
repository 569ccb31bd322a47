//! Usage text rendering.
//!
//! Produces the help screen for a [`CommandSpec`]: a usage banner, the
//! description, one aligned line per optional and the message lines in
//! declaration order. Positionals only appear in the banner placeholder.

use std::fmt::Write;
use std::path::Path;

use crate::{Arity, CommandSpec, OptionSpec};

/// Renders the help screen for `spec` as invoked through `program`.
///
/// Only the file name of `program` is shown in the banner.
///
/// # Examples
///
/// ```
/// use command_parser_core::{Arity, CommandSpec, OptionSpec, render_help};
///
/// let spec = CommandSpec::new("Generates programs that perform pattern-matching on text")
///     .with_option(OptionSpec::message("Files:"))
///     .with_option(OptionSpec::optional("--outfile", "write output to NAME", Arity::One, Some("-o")));
///
/// let help = render_help(&spec, "/usr/bin/flex");
/// assert!(help.starts_with("Usage: flex [OPTIONS] [FILE]...\n"));
/// assert!(help.contains("\nFiles:\n"));
/// assert!(help.contains("  -o, --outfile=NAME write output to NAME\n"));
/// ```
pub fn render_help(spec: &CommandSpec, program: impl AsRef<Path>) -> String {
    let config = &spec.config;
    let program = program.as_ref();
    let program_name = program
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| program.to_string_lossy());

    let mut out = String::new();
    let _ = writeln!(out, "Usage: {program_name} {}", config.usage_placeholder);
    let _ = writeln!(out, "{}", spec.description);

    let width = label_width(spec);
    for option in &spec.options {
        match option {
            OptionSpec::Optional { description, .. } => {
                if let Some(label) = option_label(option) {
                    write_row(&mut out, &label, width, description);
                }
            }
            OptionSpec::Message { text } => {
                out.push('\n');
                let _ = writeln!(out, "{text}");
            }
            OptionSpec::Positional { .. } => {}
        }
    }
    write_row(&mut out, &config.help_label, width, &config.help_description);
    out.push('\n');
    out
}

/// Label shown for an optional: `alias, name` plus `=NAME` for single values.
pub fn option_label(option: &OptionSpec) -> Option<String> {
    let OptionSpec::Optional {
        name, arity, alias, ..
    } = option
    else {
        return None;
    };

    let mut label = String::new();
    if let Some(alias) = alias {
        label.push_str(alias);
        label.push_str(", ");
    }
    label.push_str(name);
    if *arity == Arity::One {
        label.push_str("=NAME");
    }
    Some(label)
}

fn label_width(spec: &CommandSpec) -> usize {
    spec.options
        .iter()
        .filter_map(option_label)
        .map(|label| label.chars().count())
        .chain(std::iter::once(spec.config.help_label.chars().count()))
        .fold(spec.config.min_label_width, usize::max)
}

fn write_row(out: &mut String, label: &str, width: usize, description: &str) {
    let pad = width.saturating_sub(label.chars().count()) + 1;
    let _ = writeln!(out, "  {label}{:pad$}{description}", "");
}
