//! # Element Configuration
//!
//! An *element* is a target type chosen at runtime instead of at compile time.
//! [`ElementKind`] names the type, [`ElementValue`] carries a parsed value and
//! [`ElementConfig`] bundles a kind with its display name and inclusive bounds.
//!
//! ```rust
//! use reprompt::utils::{ElementConfig, ElementKind, ElementValue};
//!
//! let config = ElementConfig::from_bounds(ElementKind::Float, "fractional number", "28.6", "73.2")
//!     .unwrap();
//! assert_eq!(config.low(), &ElementValue::Float(28.6));
//! assert_eq!(config.expected(), "an element (fractional number)");
//! ```
use crate::utils::sanitize::FromToken;
use std::{cmp::Ordering, error::Error, fmt::Display};

/// The runtime-selected type of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ElementKind {
    Integer,
    Float,
    Character,
    Boolean,
    Text,
}

impl ElementKind {
    /// Parses a token as a value of this kind, `None` if it is not lexically valid.
    pub fn parse(&self, token: &str) -> Option<ElementValue> {
        match self {
            Self::Integer => i64::from_token(token).map(ElementValue::Integer),
            Self::Float => f64::from_token(token).map(ElementValue::Float),
            Self::Character => char::from_token(token).map(ElementValue::Character),
            Self::Boolean => bool::from_token(token).map(ElementValue::Boolean),
            Self::Text => String::from_token(token).map(ElementValue::Text),
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Character => write!(f, "character"),
            Self::Boolean => write!(f, "boolean"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// A parsed element.
///
/// Values are only ordered against values of the same kind; comparing two
/// different kinds yields `None`, so such a value never passes a range check.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Integer(i64),
    Float(f64),
    Character(char),
    Boolean(bool),
    Text(String),
}

impl ElementValue {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Integer(_) => ElementKind::Integer,
            Self::Float(_) => ElementKind::Float,
            Self::Character(_) => ElementKind::Character,
            Self::Boolean(_) => ElementKind::Boolean,
            Self::Text(_) => ElementKind::Text,
        }
    }
}

impl PartialOrd for ElementValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Character(a), Self::Character(b)) => a.partial_cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl Display for ElementValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Character(v) => write!(f, "{}", v),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Errors raised while building an [`ElementConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A bound does not have the configured kind.
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
    /// `low` is greater than `high`.
    InvertedBounds(String, String),
    /// A textual bound is not a valid value of the configured kind.
    InvalidBound(ElementKind, String),
    /// The JSON document could not be decoded.
    #[cfg(feature = "json")]
    Json(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KindMismatch { expected, found } => {
                write!(f, "Bound kind mismatch => expected {}, found {}", expected, found)
            }
            Self::InvertedBounds(low, high) => {
                write!(f, "Inverted bounds => low {} is greater than high {}", low, high)
            }
            Self::InvalidBound(kind, token) => {
                write!(f, "Invalid bound => {:?} is not a valid {}", token, kind)
            }
            #[cfg(feature = "json")]
            Self::Json(e) => write!(f, "Invalid element configuration => {}", e),
        }
    }
}

impl Error for ConfigError {}

/// Runtime description of the element type: kind, display name and inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementConfig {
    kind: ElementKind,
    name: String,
    low: ElementValue,
    high: ElementValue,
}

impl ElementConfig {
    /// Builds a configuration, checking both bounds have `kind` and `low <= high`.
    pub fn new(
        kind: ElementKind,
        name: impl Into<String>,
        low: ElementValue,
        high: ElementValue,
    ) -> Result<ElementConfig, ConfigError> {
        for bound in [&low, &high] {
            if bound.kind() != kind {
                return Err(ConfigError::KindMismatch {
                    expected: kind,
                    found: bound.kind(),
                });
            }
        }

        if !matches!(
            low.partial_cmp(&high),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return Err(ConfigError::InvertedBounds(low.to_string(), high.to_string()));
        }

        Ok(ElementConfig {
            kind,
            name: name.into(),
            low,
            high,
        })
    }

    /// Builds a configuration from textual bounds, parsed with the same lexical
    /// rules the readers use.
    pub fn from_bounds(
        kind: ElementKind,
        name: impl Into<String>,
        low: &str,
        high: &str,
    ) -> Result<ElementConfig, ConfigError> {
        let parse = |token: &str| {
            kind.parse(token)
                .ok_or_else(|| ConfigError::InvalidBound(kind, token.to_string()))
        };

        ElementConfig::new(kind, name, parse(low)?, parse(high)?)
    }

    /// The stock configuration for each kind, see [`ElementPreset::from`].
    pub fn preset(kind: ElementKind) -> ElementConfig {
        ElementPreset::from(kind).config()
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn low(&self) -> &ElementValue {
        &self.low
    }

    pub fn high(&self) -> &ElementValue {
        &self.high
    }

    /// Display name used in type-rejection messages, e.g. `an element (whole number)`.
    pub fn expected(&self) -> String {
        format!("an element ({})", self.name)
    }
}

/// The stock element configurations.
///
/// | preset              | kind      | name                  | bounds          |
/// |---------------------|-----------|-----------------------|-----------------|
/// | WholeNumber         | integer   | whole number          | 17 to 52        |
/// | BigWholeNumber      | integer   | big whole number      | 17 to 52        |
/// | FractionalNumber    | float     | fractional number     | 28.6 to 73.2    |
/// | BigFractionalNumber | float     | big fractional number | 28.6 to 73.2    |
/// | Character           | character | character             | a to z          |
/// | Boolean             | boolean   | boolean               | false to true   |
/// | String              | text      | string                | Alpha to Omega  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementPreset {
    WholeNumber,
    BigWholeNumber,
    FractionalNumber,
    BigFractionalNumber,
    Character,
    Boolean,
    String,
}

impl ElementPreset {
    pub const ALL: [ElementPreset; 7] = [
        Self::WholeNumber,
        Self::BigWholeNumber,
        Self::FractionalNumber,
        Self::BigFractionalNumber,
        Self::Character,
        Self::Boolean,
        Self::String,
    ];

    pub fn config(&self) -> ElementConfig {
        let (kind, name, low, high) = match self {
            Self::WholeNumber => (
                ElementKind::Integer,
                "whole number",
                ElementValue::Integer(17),
                ElementValue::Integer(52),
            ),
            Self::BigWholeNumber => (
                ElementKind::Integer,
                "big whole number",
                ElementValue::Integer(17),
                ElementValue::Integer(52),
            ),
            Self::FractionalNumber => (
                ElementKind::Float,
                "fractional number",
                ElementValue::Float(28.6),
                ElementValue::Float(73.2),
            ),
            Self::BigFractionalNumber => (
                ElementKind::Float,
                "big fractional number",
                ElementValue::Float(28.6),
                ElementValue::Float(73.2),
            ),
            Self::Character => (
                ElementKind::Character,
                "character",
                ElementValue::Character('a'),
                ElementValue::Character('z'),
            ),
            Self::Boolean => (
                ElementKind::Boolean,
                "boolean",
                ElementValue::Boolean(false),
                ElementValue::Boolean(true),
            ),
            Self::String => (
                ElementKind::Text,
                "string",
                ElementValue::Text("Alpha".to_string()),
                ElementValue::Text("Omega".to_string()),
            ),
        };

        ElementConfig {
            kind,
            name: name.to_string(),
            low,
            high,
        }
    }
}

impl From<ElementKind> for ElementPreset {
    fn from(value: ElementKind) -> Self {
        match value {
            ElementKind::Integer => Self::WholeNumber,
            ElementKind::Float => Self::FractionalNumber,
            ElementKind::Character => Self::Character,
            ElementKind::Boolean => Self::Boolean,
            ElementKind::Text => Self::String,
        }
    }
}

impl Default for ElementConfig {
    fn default() -> Self {
        ElementConfig::preset(ElementKind::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_parse() {
        assert_eq!(ElementKind::Integer.parse("17"), Some(ElementValue::Integer(17)));
        assert_eq!(ElementKind::Integer.parse("17.5"), None);
        assert_eq!(ElementKind::Float.parse("28.6"), Some(ElementValue::Float(28.6)));
        assert_eq!(ElementKind::Character.parse("q"), Some(ElementValue::Character('q')));
        assert_eq!(ElementKind::Boolean.parse("0"), Some(ElementValue::Boolean(false)));
        assert_eq!(ElementKind::Boolean.parse("maybe"), None);
        assert_eq!(
            ElementKind::Text.parse("Gamma"),
            Some(ElementValue::Text("Gamma".to_string()))
        );
    }

    #[test]
    fn test_element_value_ordering_same_kind() {
        assert!(ElementValue::Integer(17) < ElementValue::Integer(52));
        assert!(ElementValue::Boolean(false) < ElementValue::Boolean(true));
        assert!(ElementValue::Text("Alpha".into()) < ElementValue::Text("Omega".into()));
        assert!(ElementValue::Character('a') <= ElementValue::Character('a'));
    }

    #[test]
    fn test_element_value_mixed_kinds_are_unordered() {
        let int = ElementValue::Integer(1);
        let boolean = ElementValue::Boolean(true);
        assert_eq!(int.partial_cmp(&boolean), None);
        assert!(!(int <= boolean));
        assert!(!(int >= boolean));
    }

    #[test]
    fn test_element_value_display() {
        assert_eq!(ElementValue::Boolean(true).to_string(), "true");
        assert_eq!(ElementValue::Float(42.8).to_string(), "42.8");
        assert_eq!(ElementValue::Float(17.0).to_string(), "17");
        assert_eq!(ElementValue::Character('z').to_string(), "z");
    }

    #[test]
    fn test_element_config_new_rejects_kind_mismatch() {
        let res = ElementConfig::new(
            ElementKind::Integer,
            "whole number",
            ElementValue::Integer(1),
            ElementValue::Float(2.0),
        );
        assert_eq!(
            res,
            Err(ConfigError::KindMismatch {
                expected: ElementKind::Integer,
                found: ElementKind::Float,
            })
        );
    }

    #[test]
    fn test_element_config_new_rejects_inverted_bounds() {
        let res = ElementConfig::from_bounds(ElementKind::Integer, "whole number", "52", "17");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "Inverted bounds => low 52 is greater than high 17"
            );
        }
    }

    #[test]
    fn test_element_config_from_bounds_invalid_token() {
        let res = ElementConfig::from_bounds(ElementKind::Character, "character", "a", "zz");
        assert_eq!(
            res,
            Err(ConfigError::InvalidBound(ElementKind::Character, "zz".to_string()))
        );
    }

    #[test]
    fn test_element_config_presets_are_valid() {
        for kind in [
            ElementKind::Integer,
            ElementKind::Float,
            ElementKind::Character,
            ElementKind::Boolean,
            ElementKind::Text,
        ] {
            let preset = ElementConfig::preset(kind);
            let rebuilt = ElementConfig::new(
                kind,
                preset.name(),
                preset.low().clone(),
                preset.high().clone(),
            );
            assert_eq!(rebuilt, Ok(preset));
        }
    }

    #[test]
    fn test_element_presets_names_and_bounds() {
        let expected = [
            ("whole number", "17", "52", ElementKind::Integer),
            ("big whole number", "17", "52", ElementKind::Integer),
            ("fractional number", "28.6", "73.2", ElementKind::Float),
            ("big fractional number", "28.6", "73.2", ElementKind::Float),
            ("character", "a", "z", ElementKind::Character),
            ("boolean", "false", "true", ElementKind::Boolean),
            ("string", "Alpha", "Omega", ElementKind::Text),
        ];

        for (preset, (name, low, high, kind)) in ElementPreset::ALL.iter().zip(expected) {
            let config = preset.config();
            assert_eq!(config.name(), name);
            assert_eq!(config.kind(), kind);
            assert_eq!(config.low().to_string(), low);
            assert_eq!(config.high().to_string(), high);
            assert_eq!(
                ElementConfig::from_bounds(kind, name, low, high),
                Ok(config)
            );
        }
    }

    #[test]
    fn test_element_config_default_is_whole_number() {
        let config = ElementConfig::default();
        assert_eq!(config.kind(), ElementKind::Integer);
        assert_eq!(config.expected(), "an element (whole number)");
        assert_eq!(config.low(), &ElementValue::Integer(17));
        assert_eq!(config.high(), &ElementValue::Integer(52));
    }
}
