//! # Terminal Input Helper
//!
//! [`Terminal`] repeatedly asks its [`InputSource`] for tokens until one of them
//! satisfies the requested checks:
//!
//! - [`Terminal::read`] / [`Terminal::read_element`]: **type-checking** only.
//!   A malformed token is discarded (together with the rest of its line, for line
//!   based sources), one retry message is written and the next token is tried.
//! - [`Terminal::read_in_range`] / [`Terminal::read_element_in_range`]:
//!   **type-checking then range-checking**. Every value is first obtained through
//!   the type-checked path; values outside the inclusive bounds are turned away
//!   with a range message and another value is read.
//!
//! Readers never give up on bad input by themselves. They only return an error
//! when the source runs dry ([`ReadError::Exhausted`]), when it fails
//! ([`ReadError::Io`]), or when [`TerminalOptions::max_retries`] is set and
//! exceeded.
//!
//! ## Example: scripted input
//! ```rust
//! use reprompt::utils::{RawFormatter, Terminal, TokenSource};
//!
//! let source = TokenSource::new(["3", "pizza", "50", "6"]);
//! let mut terminal = Terminal::new(source, Vec::new(), RawFormatter);
//!
//! let value = terminal.read_in_range("a whole number", 6, 37).unwrap();
//! assert_eq!(value, 6);
//! ```
//!
//! ## Example: interactive input
//! ```rust,no_run
//! use reprompt::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! terminal.prompt("Enter a whole number between 6 and 37: ").unwrap();
//! let value: i32 = terminal.read_in_range("a whole number", 6, 37).unwrap();
//! println!("You entered {}", value);
//! ```
use crate::utils::element::{ElementConfig, ElementValue};
use crate::utils::formatter::{Event, MessageFormatter, RawFormatter};
use crate::utils::sanitize::{FromToken, is_between};
use crate::utils::source::{InputSource, LineSource, ParseError};
use std::{
    error::Error,
    fmt::Display,
    io::{self, StdinLock, Stdout, Write},
};

/// Options for [`Terminal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Maximum number of pending characters dropped after a malformed token.
    pub discard_limit: usize,
    /// Number of rejected inputs tolerated per read, `None` for no limit.
    pub max_retries: Option<usize>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            discard_limit: 80,
            max_retries: None,
        }
    }
}

/// States a read goes through. Both invalid states lead back to
/// [`ReadState::AwaitingInput`]; [`ReadState::Accepted`] is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    AwaitingInput,
    TypeInvalid,
    RangeInvalid,
    Accepted,
}

/// Terminal conditions of a read. Invalid input is never one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadError {
    Exhausted,
    Io(String),
    RetriesExceeded(usize),
}

impl Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Input ended before a valid value was entered"),
            Self::Io(e) => write!(f, "Couldn't read line.. => {}", e),
            Self::RetriesExceeded(n) => {
                write!(f, "Gave up after {} invalid inputs", n)
            }
        }
    }
}

impl Error for ReadError {}

impl From<io::Error> for ReadError {
    fn from(value: io::Error) -> Self {
        ReadError::Io(value.to_string())
    }
}

/// Reads validated values from an [`InputSource`] and reports rejections to an
/// output sink through a [`MessageFormatter`].
pub struct Terminal<S, W = Stdout, F = RawFormatter> {
    source: S,
    out: W,
    formatter: F,
    options: TerminalOptions,
    rejections: usize,
    history: Vec<ReadState>,
}

impl Terminal<LineSource<StdinLock<'static>>, Stdout, RawFormatter> {
    /// A terminal reading stdin and writing plain-text messages to stdout.
    pub fn stdio() -> Self {
        Terminal::new(LineSource::stdin(), io::stdout(), RawFormatter)
    }
}

impl<S, W, F> Terminal<S, W, F>
where
    S: InputSource,
    W: Write,
    F: MessageFormatter,
{
    pub fn new(source: S, out: W, formatter: F) -> Terminal<S, W, F> {
        Terminal {
            source,
            out,
            formatter,
            options: TerminalOptions::default(),
            rejections: 0,
            history: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: TerminalOptions) -> Self {
        self.options = options;
        self
    }

    /// Writes `question` as is (no newline) and flushes.
    pub fn prompt(&mut self, question: &str) -> Result<(), ReadError> {
        self.out.write_all(question.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Loops until a token parses as `T` and returns it.
    ///
    /// `expected` names the type in the retry message, e.g. `"a whole number"`.
    pub fn read<T>(&mut self, expected: &str) -> Result<T, ReadError>
    where
        T: FromToken + Display,
    {
        self.begin();
        let value = self.next_valid(expected, |source| source.next_token_as::<T>())?;
        self.accept(&value)?;
        Ok(value)
    }

    /// Loops until a token parses as `T` and `low <= value <= high`.
    ///
    /// `low <= high` is not checked.
    pub fn read_in_range<T>(&mut self, expected: &str, low: T, high: T) -> Result<T, ReadError>
    where
        T: FromToken + PartialOrd + Display,
    {
        self.begin();
        self.next_in_range(expected, &low, &high, |source| source.next_token_as::<T>())
    }

    /// Loops until a token parses as an element of `config`'s kind.
    pub fn read_element(&mut self, config: &ElementConfig) -> Result<ElementValue, ReadError> {
        let kind = config.kind();

        self.begin();
        let value = self.next_valid(&config.expected(), |source| source.next_element(kind))?;
        self.accept(&value)?;
        Ok(value)
    }

    /// Loops until a token parses as an element of `config`'s kind and lies
    /// within `config`'s bounds.
    pub fn read_element_in_range(
        &mut self,
        config: &ElementConfig,
    ) -> Result<ElementValue, ReadError> {
        let kind = config.kind();

        self.begin();
        self.next_in_range(&config.expected(), config.low(), config.high(), |source| {
            source.next_element(kind)
        })
    }

    /// States visited by the most recent read, starting with
    /// [`ReadState::AwaitingInput`].
    pub fn history(&self) -> &[ReadState] {
        &self.history
    }

    /// Number of inputs rejected by the most recent read.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    fn begin(&mut self) {
        self.rejections = 0;
        self.history.clear();
        self.history.push(ReadState::AwaitingInput);
    }

    fn next_valid<T, P>(&mut self, expected: &str, mut next: P) -> Result<T, ReadError>
    where
        P: FnMut(&mut S) -> Result<T, ParseError>,
    {
        loop {
            match next(&mut self.source) {
                Ok(value) => return Ok(value),
                Err(ParseError::Invalid(token)) => {
                    self.source.reset_error_state();
                    self.source.discard(self.options.discard_limit, '\n');
                    self.reject(
                        ReadState::TypeInvalid,
                        Event::TypeRejected {
                            token,
                            expected: expected.to_string(),
                        },
                    )?;
                }
                Err(ParseError::Exhausted) => return Err(ReadError::Exhausted),
                Err(ParseError::Io(e)) => return Err(ReadError::Io(e)),
            }
        }
    }

    fn next_in_range<T, P>(
        &mut self,
        expected: &str,
        low: &T,
        high: &T,
        mut next: P,
    ) -> Result<T, ReadError>
    where
        T: PartialOrd + Display,
        P: FnMut(&mut S) -> Result<T, ParseError>,
    {
        let mut value = self.next_valid(expected, &mut next)?;

        while !is_between(&value, low, high) {
            self.reject(
                ReadState::RangeInvalid,
                Event::RangeRejected {
                    value: value.to_string(),
                    low: low.to_string(),
                    high: high.to_string(),
                },
            )?;
            value = self.next_valid(expected, &mut next)?;
        }

        self.accept(&value)?;
        Ok(value)
    }

    fn reject(&mut self, state: ReadState, event: Event) -> Result<(), ReadError> {
        self.history.push(state);
        self.rejections += 1;

        if let Some(max) = self.options.max_retries {
            if self.rejections > max {
                return Err(ReadError::RetriesExceeded(self.rejections));
            }
        }

        self.emit(&event)?;
        self.history.push(ReadState::AwaitingInput);
        Ok(())
    }

    fn accept<T: Display>(&mut self, value: &T) -> Result<(), ReadError> {
        self.history.push(ReadState::Accepted);
        self.emit(&Event::Accepted {
            value: value.to_string(),
        })
    }

    fn emit(&mut self, event: &Event) -> Result<(), ReadError> {
        if let Some(message) = self.formatter.format(event) {
            self.out.write_all(message.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }
}
