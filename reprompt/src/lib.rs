//! # reprompt
//!
//! Repetition validation for interactive CLI input: ask, check, and ask again
//! until the answer has the right type and, optionally, lies within an
//! inclusive range.
//!
//! ## Features
//!
//! - **Type-checking** - integers of every width, `f32`/`f64`, `bool` (`true`,
//!   `false`, `1`, `0`), `char` and `String` through [`utils::FromToken`]
//! - **Range-checking** - inclusive `[low, high]` bounds, always applied after
//!   type-checking
//! - **Runtime element type** - [`utils::ElementConfig`] picks the target type
//!   and its bounds at runtime
//! - **Pluggable sources** - stdin ([`utils::LineSource`]) or a scripted token
//!   list ([`utils::TokenSource`])
//! - **Pluggable messages** - plain-text retry prompts or JSON lines
//!   ([`utils::MessageFormatter`])
//!
//! ("json" feature)
//! - `ElementConfig::from_json` and `JsonFormatter`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! reprompt = { version = "0.1.0" }
//! reprompt = { version = "0.1.0", features = ["json"] }
//! ```
//!
//! ### Type-checked input
//!
//! ```rust,no_run
//! use reprompt::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! terminal.prompt("Enter a whole number: ").unwrap();
//! let n: i32 = terminal.read("a whole number").unwrap();
//! println!("You entered {}", n);
//! ```
//!
//! ### Type- and range-checked input
//!
//! ```rust,no_run
//! use reprompt::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! terminal.prompt("Enter a fractional number between 5.5 and 42.8: ").unwrap();
//! let x: f64 = terminal.read_in_range("a fractional number", 5.5, 42.8).unwrap();
//! println!("You entered {}", x);
//! ```
//!
//! ### Scripted input
//!
//! ```rust
//! use reprompt::utils::{ElementConfig, ElementKind, ElementValue, RawFormatter, Terminal, TokenSource};
//!
//! let config = ElementConfig::preset(ElementKind::Boolean);
//! let mut terminal = Terminal::new(TokenSource::new(["maybe", "true"]), Vec::new(), RawFormatter);
//!
//! assert_eq!(terminal.read_element(&config), Ok(ElementValue::Boolean(true)));
//! assert_eq!(terminal.rejections(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Bad input is never an error: it is reported through the formatter and asked
//! for again. Readers only fail with [`utils::ReadError`] when the input ends,
//! when reading fails, or when a retry limit set in [`utils::TerminalOptions`]
//! is exceeded.
//!
//! ```rust,no_run
//! use reprompt::utils::{ReadError, Terminal};
//!
//! let mut terminal = Terminal::stdio();
//! match terminal.read::<u16>("a port number") {
//!     Ok(port) => println!("Port: {}", port),
//!     Err(ReadError::Exhausted) => eprintln!("stdin closed"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod utils;
