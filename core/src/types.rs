//! Declaration and value types for the command-line surface.
//!
//! An ordered list of [`OptionSpec`] entries describes what a program accepts.
//! Parsing produces one [`Value`] per bound entry, whose shape is fixed by the
//! entry's [`Arity`].

use serde::{Deserialize, Serialize};

/// Prefix that marks a canonical long option (e.g. `--outfile`).
pub const LONG_PREFIX: &str = "--";

/// Legacy count that stands for "no upper bound" in [`Arity::from_count`].
pub const UNBOUNDED: u32 = u32::MAX;

/// Number of value tokens an entry consumes.
///
/// # Examples
///
/// ```
/// use command_parser_core::{Arity, UNBOUNDED};
///
/// assert_eq!(Arity::from_count(0), Arity::Zero);
/// assert_eq!(Arity::from_count(1), Arity::One);
/// assert_eq!(Arity::from_count(3), Arity::UpTo(3));
/// assert_eq!(Arity::from_count(UNBOUNDED), Arity::Unbounded);
/// assert!(Arity::Unbounded.is_multi());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Presence-only; binds [`Value::Absent`].
    #[default]
    Zero,
    /// Exactly one value; binds [`Value::Single`].
    One,
    /// Greedily takes up to `n` values; binds [`Value::Multi`].
    UpTo(u32),
    /// Greedily takes every value up to the next option; binds [`Value::Multi`].
    Unbounded,
}

impl Arity {
    /// Maps a legacy unsigned count onto an arity.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Zero,
            1 => Self::One,
            UNBOUNDED => Self::Unbounded,
            n => Self::UpTo(n),
        }
    }

    /// Returns `true` when values are collected into a [`Value::Multi`] list.
    pub fn is_multi(&self) -> bool {
        matches!(self, Self::UpTo(_) | Self::Unbounded)
    }

    /// Maximum number of values this arity accepts.
    pub fn limit(&self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::UpTo(n) => *n as usize,
            Self::Unbounded => usize::MAX,
        }
    }

    /// Positional arguments always consume at least one token.
    pub(crate) fn at_least_one(self) -> Self {
        match self {
            Self::Zero => Self::One,
            other => other,
        }
    }
}

impl From<u32> for Arity {
    fn from(count: u32) -> Self {
        Self::from_count(count)
    }
}

/// One entry of a command-line declaration.
///
/// Entries are kept in declaration order: positionals are filled in that
/// order and messages are rendered between the options that surround them.
///
/// # Examples
///
/// ```
/// use command_parser_core::{Arity, OptionSpec};
///
/// let outfile = OptionSpec::optional("--outfile", "write output to NAME", Arity::One, Some("-o"));
/// assert!(outfile.matches("-o"));
/// assert!(outfile.matches("--outfile"));
/// assert_eq!(outfile.name(), Some("--outfile"));
///
/// let files = OptionSpec::positional("files", "input files", Arity::Zero);
/// assert_eq!(files.arity(), Some(Arity::One));
///
/// let header = OptionSpec::message("Files:");
/// assert_eq!(header.name(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionSpec {
    /// Argument identified by its position among non-option tokens.
    Positional {
        name: String,
        #[serde(default)]
        description: String,
        arity: Arity,
    },
    /// Flag introduced by its canonical long name or its alias.
    Optional {
        name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        arity: Arity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
    },
    /// Free-text help line, never matched against input.
    Message { text: String },
}

impl OptionSpec {
    /// Creates a positional argument. [`Arity::Zero`] is normalized to [`Arity::One`].
    pub fn positional(name: &str, description: &str, arity: Arity) -> Self {
        Self::Positional {
            name: name.to_string(),
            description: description.to_string(),
            arity: arity.at_least_one(),
        }
    }

    /// Creates a presence-only flag.
    pub fn flag(name: &str, description: &str, alias: Option<&str>) -> Self {
        Self::optional(name, description, Arity::Zero, alias)
    }

    /// Creates an optional flag with the given arity.
    pub fn optional(name: &str, description: &str, arity: Arity, alias: Option<&str>) -> Self {
        Self::Optional {
            name: name.to_string(),
            description: description.to_string(),
            arity,
            alias: alias.map(String::from),
        }
    }

    /// Creates a documentation line.
    pub fn message(text: &str) -> Self {
        Self::Message {
            text: text.to_string(),
        }
    }

    /// Declared name, or `None` for messages.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Positional { name, .. } | Self::Optional { name, .. } => Some(name),
            Self::Message { .. } => None,
        }
    }

    /// Effective arity, or `None` for messages.
    pub fn arity(&self) -> Option<Arity> {
        match self {
            Self::Positional { arity, .. } => Some(arity.at_least_one()),
            Self::Optional { arity, .. } => Some(*arity),
            Self::Message { .. } => None,
        }
    }

    /// Checks if an optional entry is spelled `token` (canonical name or alias).
    ///
    /// Positionals and messages never match.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Optional { name, alias, .. } => {
                name == token || alias.as_deref() == Some(token)
            }
            _ => false,
        }
    }
}

/// Parsed payload of one bound entry.
///
/// The variant always follows the arity class of the declaration:
/// [`Arity::Zero`] binds `Absent`, [`Arity::One`] binds `Single`, and the
/// multi-valued arities bind `Multi`.
///
/// # Examples
///
/// ```
/// use command_parser_core::Value;
///
/// let files = Value::Multi(vec!["a.l".into(), "b.l".into()]);
/// assert_eq!(files.as_multi().map(|v| v.len()), Some(2));
/// assert_eq!(files.values().collect::<Vec<_>>(), vec!["a.l", "b.l"]);
///
/// assert!(Value::Absent.is_absent());
/// assert_eq!(Value::Single("out.cpp".into()).as_single(), Some("out.cpp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Present, carries no data.
    Absent,
    /// Exactly one value.
    Single(String),
    /// Ordered list of values.
    Multi(Vec<String>),
}

impl Value {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Multi(values) => Some(values),
            _ => None,
        }
    }

    /// Iterates every text value regardless of variant.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Absent => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multi(values) => values,
        };
        slice.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_zero_arity_normalized() {
        let spec = OptionSpec::positional("input", "", Arity::Zero);
        assert_eq!(spec.arity(), Some(Arity::One));

        let raw = OptionSpec::Positional {
            name: "input".into(),
            description: String::new(),
            arity: Arity::Zero,
        };
        assert_eq!(raw.arity(), Some(Arity::One));
    }

    #[test]
    fn test_optional_matches_name_and_alias() {
        let spec = OptionSpec::flag("--version", "report version", Some("-V"));

        assert!(spec.matches("--version"));
        assert!(spec.matches("-V"));
        assert!(!spec.matches("version"));
        assert!(!OptionSpec::positional("-V", "", Arity::One).matches("-V"));
    }

    #[test]
    fn test_arity_limits() {
        assert_eq!(Arity::Zero.limit(), 0);
        assert_eq!(Arity::One.limit(), 1);
        assert_eq!(Arity::UpTo(4).limit(), 4);
        assert_eq!(Arity::Unbounded.limit(), usize::MAX);
        assert!(!Arity::One.is_multi());
    }

    #[test]
    fn test_declaration_serializes_with_kind_tag() {
        let spec = OptionSpec::optional("--prefix", "use NAME as prefix", Arity::One, Some("-P"));
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json["kind"], "optional");
        assert_eq!(json["arity"], "one");
        assert_eq!(json["alias"], "-P");

        let back: OptionSpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec);
    }
}
