//! # Input Sources
//!
//! Readers pull whitespace-delimited tokens from an [`InputSource`]. Two sources
//! ship with the crate:
//!
//! - [`TokenSource`]: a fixed, replayable list of tokens with a cursor. Token
//!   boundaries are explicit, so nothing ever needs to be discarded. Used for
//!   scripted input and tests.
//! - [`LineSource`]: wraps any line-buffered reader (stdin by default). It keeps
//!   the unread rest of the current line, and [`InputSource::discard`] throws it
//!   away after a bad token so leftovers of a rejected line are not read as the
//!   next answer.
//!
//! ```rust
//! use reprompt::utils::{InputSource, ParseError, TokenSource};
//!
//! let mut source = TokenSource::new(["pizza", "7"]);
//! assert_eq!(
//!     source.next_token_as::<i32>(),
//!     Err(ParseError::Invalid("pizza".to_string()))
//! );
//! assert_eq!(source.next_token_as::<i32>(), Ok(7));
//! assert_eq!(source.next_token(), Err(ParseError::Exhausted));
//! ```
use crate::utils::element::{ElementKind, ElementValue};
use crate::utils::sanitize::FromToken;
use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, StdinLock},
};

/// Errors returned by an [`InputSource`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The token was read but is not a valid value of the requested type.
    Invalid(String),
    /// No more tokens will ever arrive.
    Exhausted,
    /// The underlying reader failed.
    Io(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(token) => write!(f, "Invalid token => {:?}", token),
            Self::Exhausted => write!(f, "Input exhausted"),
            Self::Io(e) => write!(f, "Couldn't read input => {}", e),
        }
    }
}

impl Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        ParseError::Io(value.to_string())
    }
}

/// A sequential source of text tokens.
pub trait InputSource {
    /// Returns the next token, or [`ParseError::Exhausted`] at end of input.
    fn next_token(&mut self) -> Result<String, ParseError>;

    /// Reads the next token and parses it as `T`.
    ///
    /// The token is consumed even when it does not parse.
    fn next_token_as<T: FromToken>(&mut self) -> Result<T, ParseError>
    where
        Self: Sized,
    {
        let token = self.next_token()?;
        T::from_token(&token).ok_or(ParseError::Invalid(token))
    }

    /// Reads the next token and parses it as an element of `kind`.
    fn next_element(&mut self, kind: ElementKind) -> Result<ElementValue, ParseError>
    where
        Self: Sized,
    {
        let token = self.next_token()?;
        kind.parse(&token).ok_or(ParseError::Invalid(token))
    }

    /// Clears any failure state left by a rejected token.
    fn reset_error_state(&mut self) {}

    /// Drops at most `max_chars` pending characters, stopping after `stop_at`.
    fn discard(&mut self, _max_chars: usize, _stop_at: char) {}
}

/// A finite, replayable sequence of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenSource {
    tokens: Vec<String>,
    cursor: usize,
}

impl TokenSource {
    pub fn new<I, T>(tokens: I) -> TokenSource
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        TokenSource {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// Splits `text` on whitespace, the same way [`LineSource`] would read it.
    pub fn from_text(text: &str) -> TokenSource {
        TokenSource::new(text.split_whitespace())
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Moves the cursor back to the first token.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl InputSource for TokenSource {
    fn next_token(&mut self) -> Result<String, ParseError> {
        let token = self
            .tokens
            .get(self.cursor)
            .ok_or(ParseError::Exhausted)?
            .trim()
            .to_string();
        self.cursor += 1;
        Ok(token)
    }
}

/// Tokens read from a line-buffered reader.
///
/// Holds the unread remainder of the current line; a new line is only read once
/// that remainder has no tokens left. A line that is not valid UTF-8 comes back
/// whole as [`ParseError::Invalid`].
pub struct LineSource<R> {
    reader: R,
    pending: String,
}

impl LineSource<StdinLock<'static>> {
    /// A source bound to the process' standard input.
    pub fn stdin() -> Self {
        LineSource::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> LineSource<R> {
        LineSource {
            reader,
            pending: String::new(),
        }
    }

    /// The unread remainder of the current line.
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_token(&mut self) -> Result<String, ParseError> {
        loop {
            let rest = self.pending.trim_start();

            if rest.is_empty() {
                self.pending.clear();

                let mut line = Vec::new();
                if self.reader.read_until(b'\n', &mut line)? == 0 {
                    return Err(ParseError::Exhausted);
                }

                // A line that is not UTF-8 is already consumed; report it as one bad token.
                match String::from_utf8(line) {
                    Ok(text) => self.pending = text,
                    Err(e) => {
                        let lossy = String::from_utf8_lossy(e.as_bytes());
                        return Err(ParseError::Invalid(lossy.trim().to_string()));
                    }
                }
                continue;
            }

            let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let token = rest[..end].to_string();
            self.pending = rest[end..].to_string();

            return Ok(token);
        }
    }

    fn discard(&mut self, max_chars: usize, stop_at: char) {
        let mut cut = self.pending.len();

        for (dropped, (i, c)) in self.pending.char_indices().enumerate() {
            if dropped == max_chars {
                cut = i;
                break;
            }
            if c == stop_at {
                cut = i + c.len_utf8();
                break;
            }
        }

        self.pending.drain(..cut);
    }
}
