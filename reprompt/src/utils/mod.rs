pub mod sanitize;
pub use sanitize::{FilterErrorNot, FromToken, is_between};

pub mod element;
pub use element::{ConfigError, ElementConfig, ElementKind, ElementPreset, ElementValue};

pub mod source;
pub use source::{InputSource, LineSource, ParseError, TokenSource};

pub mod formatter;
pub use formatter::{Event, MessageFormatter, RawFormatter};

pub mod terminal;
pub use terminal::{ReadError, ReadState, Terminal, TerminalOptions};

cfg_if::cfg_if! {
    if #[cfg(feature = "json")] {
        mod config;
        pub use formatter::JsonFormatter;
    }
}
