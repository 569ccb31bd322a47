//! Single-pass argument parser.
//!
//! [`CommandParser`] walks the argument vector once, left to right. Every
//! token is classified in this order:
//!
//! 1. a help spelling stops the pass with [`ParseOutcome::HelpRequested`];
//! 2. a declared optional (name or alias) binds under its canonical name,
//!    consuming values according to its [`Arity`];
//! 3. otherwise the front positional absorbs the token;
//! 4. with no positional left, the pass fails with
//!    [`ParseError::TooManyArguments`].
//!
//! Multi-valued entries consume greedily and stop in front of the next
//! recognized option without consuming it. A positional interrupted this way
//! stays at the front of the queue and keeps collecting after the option.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::error::{ParseError, Result};
use crate::model::{Slot, SpecIndex};
use crate::validate::validate_declarations;
use crate::{Arity, Bindings, CommandSpec, Value, render_help};

/// Result of a parse that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every token was consumed.
    Parsed(Bindings),
    /// A help spelling was seen; `usage` holds the rendered help screen.
    HelpRequested { usage: String },
}

impl ParseOutcome {
    /// Process exit code the caller should terminate with when it stops here.
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn bindings(&self) -> Option<&Bindings> {
        match self {
            Self::Parsed(bindings) => Some(bindings),
            Self::HelpRequested { .. } => None,
        }
    }

    pub fn into_bindings(self) -> Option<Bindings> {
        match self {
            Self::Parsed(bindings) => Some(bindings),
            Self::HelpRequested { .. } => None,
        }
    }
}

/// Parser for a validated [`CommandSpec`].
///
/// Holds only immutable data, so one parser can run any number of parses.
///
/// # Examples
///
/// ```
/// use command_parser_core::*;
///
/// let spec = CommandSpec::new("Generates programs that perform pattern-matching on text")
///     .with_option(OptionSpec::optional("--outfile", "write output to NAME", Arity::One, Some("-o")))
///     .with_option(OptionSpec::positional("files", "input files", Arity::Unbounded));
/// let parser = CommandParser::new(spec).unwrap();
///
/// let outcome = parser.parse(["flex", "a.l", "-o", "out.cpp", "b.l"]).unwrap();
/// let bindings = outcome.bindings().unwrap();
/// assert_eq!(bindings.lookup("outfile"), Some(&Value::Single("out.cpp".into())));
/// assert_eq!(
///     bindings.lookup("files"),
///     Some(&Value::Multi(vec!["a.l".into(), "b.l".into()]))
/// );
///
/// let outcome = parser.parse(["flex", "-h"]).unwrap();
/// assert!(matches!(outcome, ParseOutcome::HelpRequested { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct CommandParser {
    spec: CommandSpec,
    index: SpecIndex,
}

impl CommandParser {
    /// Validates `spec` and builds its lookup indices.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Declaration`] for the first problem
    /// [`validate_declarations`] reports.
    pub fn new(spec: CommandSpec) -> Result<Self> {
        if let Some(err) = validate_declarations(&spec.options, &spec.config)
            .into_iter()
            .next()
        {
            return Err(err.into());
        }
        let index = SpecIndex::build(&spec);
        Ok(Self { spec, index })
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Parses a full argument vector; token 0 is the program path.
    pub fn parse<I, S>(&self, argv: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_default();
        self.parse_from(program, argv)
    }

    /// Parses `args` on behalf of `program`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooManyArguments`] when a token has nowhere to
    /// go, and [`ParseError::MissingValue`] when a single-valued option ends
    /// the vector.
    pub fn parse_from<I, S>(&self, program: impl Into<String>, args: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program = program.into();
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        debug!(program = %program, tokens = tokens.len(), "parsing arguments");

        let mut pass = Pass {
            parser: self,
            tokens: &tokens,
            cursor: 0,
            positionals: self.index.positional_queue(),
            bindings: Bindings::new(&program),
        };

        let mut state = State::Scanning;
        while state == State::Scanning && pass.cursor < tokens.len() {
            state = pass.step()?;
        }

        match state {
            State::Scanning => Ok(ParseOutcome::Parsed(pass.bindings)),
            State::HelpRequested => {
                debug!("help requested");
                Ok(ParseOutcome::HelpRequested {
                    usage: self.render_help(&program),
                })
            }
            State::TooManyArguments(token) => {
                warn!(token = %token, "no positional slot left for argument");
                Err(ParseError::TooManyArguments {
                    token,
                    usage: self.render_help(&program),
                })
            }
        }
    }

    /// Renders the help screen for this parser's declaration.
    pub fn render_help(&self, program: &str) -> String {
        render_help(&self.spec, program)
    }

    fn is_help(&self, token: &str) -> bool {
        self.spec.config.is_help(token)
    }

    fn resolve(&self, token: &str) -> Option<&Slot> {
        self.index.resolve(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Scanning,
    HelpRequested,
    TooManyArguments(String),
}

/// Why a greedy collection loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// The arity limit was reached.
    Filled,
    /// The input ran out.
    Exhausted,
    /// The next token is a recognized option; it was left in place.
    Interrupted,
    /// The next token is a help spelling.
    Help,
}

/// State of one pass over the argument vector.
struct Pass<'a> {
    parser: &'a CommandParser,
    tokens: &'a [String],
    cursor: usize,
    positionals: VecDeque<&'a Slot>,
    bindings: Bindings,
}

impl<'a> Pass<'a> {
    fn step(&mut self) -> Result<State> {
        let (parser, tokens) = (self.parser, self.tokens);
        let token = &tokens[self.cursor];
        if parser.is_help(token) {
            return Ok(State::HelpRequested);
        }
        if let Some(slot) = parser.resolve(token) {
            trace!(token = %token, option = %slot.name, "matched option");
            self.cursor += 1;
            return self.bind_optional(slot);
        }
        if let Some(slot) = self.positionals.front().copied() {
            trace!(token = %token, positional = %slot.name, "matched positional");
            return Ok(self.bind_positional(slot));
        }
        Ok(State::TooManyArguments(token.clone()))
    }

    fn bind_optional(&mut self, slot: &'a Slot) -> Result<State> {
        let tokens = self.tokens;
        match slot.arity {
            Arity::Zero => self.bind(slot, Value::Absent),
            Arity::One => match tokens.get(self.cursor) {
                None => return Err(ParseError::MissingValue(slot.name.clone())),
                Some(token) if self.parser.is_help(token) => return Ok(State::HelpRequested),
                // Taken verbatim even when it spells another option.
                Some(token) => {
                    self.cursor += 1;
                    self.bind(slot, Value::Single(token.clone()));
                }
            },
            Arity::UpTo(_) | Arity::Unbounded => {
                let (values, stop) = self.collect(slot.arity.limit());
                if stop == Stop::Help {
                    return Ok(State::HelpRequested);
                }
                self.bind(slot, Value::Multi(values));
            }
        }
        Ok(State::Scanning)
    }

    fn bind_positional(&mut self, slot: &'a Slot) -> State {
        if slot.arity == Arity::One {
            let token = self.tokens[self.cursor].clone();
            self.cursor += 1;
            self.bind(slot, Value::Single(token));
            self.positionals.pop_front();
            return State::Scanning;
        }

        let collected = self
            .bindings
            .get(&slot.name)
            .map_or(0, |value| value.values().count());
        let (values, stop) = self.collect(slot.arity.limit().saturating_sub(collected));
        if stop == Stop::Help {
            return State::HelpRequested;
        }
        debug!(positional = %slot.name, values = values.len(), "bound positional values");
        self.bindings.append(&slot.name, values);
        if stop != Stop::Interrupted {
            self.positionals.pop_front();
        }
        State::Scanning
    }

    /// Takes tokens until `limit` values are held, the input ends, or a
    /// recognized option or help spelling comes next.
    fn collect(&mut self, limit: usize) -> (Vec<String>, Stop) {
        let (parser, tokens) = (self.parser, self.tokens);
        let mut values = Vec::new();
        while values.len() < limit {
            let Some(token) = tokens.get(self.cursor) else {
                return (values, Stop::Exhausted);
            };
            if parser.is_help(token) {
                return (values, Stop::Help);
            }
            if parser.resolve(token).is_some() {
                return (values, Stop::Interrupted);
            }
            values.push(token.clone());
            self.cursor += 1;
        }
        (values, Stop::Filled)
    }

    fn bind(&mut self, slot: &Slot, value: Value) {
        debug!(option = %slot.name, values = value.values().count(), "bound option");
        self.bindings.bind(&slot.name, value);
    }
}
