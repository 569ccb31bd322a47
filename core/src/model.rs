//! The declared command-line surface and its lookup indices.

use std::collections::{HashMap, VecDeque};

use crate::{Arity, OptionSpec, ParserConfig};

/// Ordered declaration of everything a program accepts.
///
/// # Examples
///
/// ```
/// use command_parser_core::{Arity, CommandSpec, OptionSpec};
///
/// let spec = CommandSpec::new("Generates programs that perform pattern-matching on text")
///     .with_option(OptionSpec::message("Files:"))
///     .with_option(OptionSpec::optional("--outfile", "write output to NAME", Arity::One, Some("-o")))
///     .with_option(OptionSpec::positional("files", "input files", Arity::Unbounded));
///
/// assert_eq!(spec.options.len(), 3);
/// assert_eq!(spec.positionals().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Top-level description printed under the usage banner.
    pub description: String,
    /// Declarations in caller-chosen order.
    pub options: Vec<OptionSpec>,
    /// Help spellings and rendering settings.
    pub config: ParserConfig,
}

impl CommandSpec {
    /// Creates an empty declaration with the given description.
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Creates a declaration from an ordered list.
    pub fn from_options(options: impl IntoIterator<Item = OptionSpec>, description: &str) -> Self {
        Self::new(description).with_options(options)
    }

    /// Appends one declaration.
    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several declarations, keeping their order.
    pub fn with_options(mut self, options: impl IntoIterator<Item = OptionSpec>) -> Self {
        self.options.extend(options);
        self
    }

    /// Replaces the parser settings.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Positional declarations in order.
    pub fn positionals(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options
            .iter()
            .filter(|option| matches!(option, OptionSpec::Positional { .. }))
    }

    /// Finds an optional declaration by canonical name or alias.
    pub fn find_optional(&self, token: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.matches(token))
    }
}

/// A named entry together with its effective arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) name: String,
    pub(crate) arity: Arity,
}

/// Lookup tables derived once from a [`CommandSpec`].
#[derive(Debug, Clone, Default)]
pub(crate) struct SpecIndex {
    positionals: Vec<Slot>,
    optionals: Vec<Slot>,
    /// Canonical names and aliases, both pointing into `optionals`.
    spellings: HashMap<String, usize>,
}

impl SpecIndex {
    pub(crate) fn build(spec: &CommandSpec) -> Self {
        let mut index = Self::default();
        for option in &spec.options {
            match option {
                OptionSpec::Positional { name, arity, .. } => index.positionals.push(Slot {
                    name: name.clone(),
                    arity: arity.at_least_one(),
                }),
                OptionSpec::Optional {
                    name, arity, alias, ..
                } => {
                    let slot = index.optionals.len();
                    index.optionals.push(Slot {
                        name: name.clone(),
                        arity: *arity,
                    });
                    index.spellings.insert(name.clone(), slot);
                    if let Some(alias) = alias {
                        index.spellings.insert(alias.clone(), slot);
                    }
                }
                OptionSpec::Message { .. } => {}
            }
        }
        index
    }

    /// Resolves a token to the optional it spells, if any.
    pub(crate) fn resolve(&self, token: &str) -> Option<&Slot> {
        self.spellings.get(token).map(|&slot| &self.optionals[slot])
    }

    /// Fresh queue of positional slots for one parse.
    pub(crate) fn positional_queue(&self) -> VecDeque<&Slot> {
        self.positionals.iter().collect()
    }
}
