//! Read-only parse result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{LONG_PREFIX, Value};

/// Mapping from canonical option name to its parsed [`Value`].
///
/// Built during exactly one parse and immutable afterwards. Entries iterate
/// in the order they were first bound.
///
/// # Examples
///
/// ```
/// use command_parser_core::{Arity, CommandParser, CommandSpec, OptionSpec, ParseOutcome, Value};
///
/// let spec = CommandSpec::new("demo")
///     .with_option(OptionSpec::optional("--outfile", "", Arity::One, Some("-o")));
/// let parser = CommandParser::new(spec).unwrap();
///
/// let ParseOutcome::Parsed(bindings) = parser.parse(["demo", "-o", "out.cpp"]).unwrap() else {
///     panic!("expected bindings");
/// };
/// let expected = Value::Single("out.cpp".into());
/// assert_eq!(bindings.lookup("outfile"), Some(&expected));
/// assert_eq!(bindings.lookup("--outfile"), Some(&expected));
/// assert_eq!(bindings.lookup("-o"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    program: PathBuf,
    entries: Vec<(String, Value)>,
    positions: HashMap<String, usize>,
}

impl Bindings {
    pub(crate) fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Binds `value` under `name`, replacing an earlier binding.
    pub(crate) fn bind(&mut self, name: &str, value: Value) {
        match self.positions.get(name) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.positions.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    /// Appends to the list bound under `name`, creating it when missing.
    pub(crate) fn append(&mut self, name: &str, values: Vec<String>) {
        let at = match self.positions.get(name) {
            Some(&at) => at,
            None => {
                self.bind(name, Value::Multi(Vec::new()));
                self.entries.len() - 1
            }
        };
        let slot = &mut self.entries[at].1;
        match slot {
            Value::Multi(existing) => existing.extend(values),
            _ => *slot = Value::Multi(values),
        }
    }

    /// Looks up `key` verbatim, then as `--key`.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
            .or_else(|| self.get(&format!("{LONG_PREFIX}{key}")))
    }

    /// Returns `true` if [`lookup`](Self::lookup) would find `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Exact-key lookup without the long-prefix fallback.
    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.positions.get(name).map(|&at| &self.entries[at].1)
    }

    /// Program path taken from token 0 of the parsed vector.
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-bound order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl Serialize for Bindings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prefers_verbatim_key() {
        let mut bindings = Bindings::new("flex");
        bindings.bind("files", Value::Multi(vec!["a.l".into()]));
        bindings.bind("--outfile", Value::Single("out.cpp".into()));

        assert_eq!(bindings.lookup("files"), Some(&Value::Multi(vec!["a.l".into()])));
        assert_eq!(bindings.lookup("outfile"), bindings.lookup("--outfile"));
        assert!(bindings.lookup("--files").is_none());
        assert!(!bindings.contains("stdout"));
    }

    #[test]
    fn test_bind_replaces_and_keeps_position() {
        let mut bindings = Bindings::new("flex");
        bindings.bind("--prefix", Value::Single("yy".into()));
        bindings.bind("--debug", Value::Absent);
        bindings.bind("--prefix", Value::Single("zz".into()));

        let names: Vec<_> = bindings.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["--prefix", "--debug"]);
        assert_eq!(bindings.lookup("prefix"), Some(&Value::Single("zz".into())));
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_append_extends_existing_list() {
        let mut bindings = Bindings::new("flex");
        bindings.append("files", vec!["a.l".into()]);
        bindings.append("files", vec!["b.l".into(), "c.l".into()]);

        assert_eq!(
            bindings.lookup("files").and_then(Value::as_multi),
            Some(&["a.l".to_string(), "b.l".to_string(), "c.l".to_string()][..])
        );
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut bindings = Bindings::new("flex");
        bindings.bind("--stdout", Value::Absent);
        bindings.bind("--outfile", Value::Single("out.cpp".into()));
        bindings.append("files", vec!["a.l".into()]);

        let json = serde_json::to_string(&bindings).unwrap();
        assert_eq!(
            json,
            r#"{"--stdout":null,"--outfile":"out.cpp","files":["a.l"]}"#
        );
    }
}
