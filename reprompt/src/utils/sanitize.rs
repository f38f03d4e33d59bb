//! # Type & Range Checking
//!
//! This module holds the two checks every reader in this crate is built on:
//!
//! - **type-checking**: is a raw token a lexically valid value of the target type?
//!   (see [`FromToken`])
//! - **range-checking**: does an already typed value fall inside an inclusive
//!   `[low, high]` pair? (see [`is_between`])
//!
//! Range-checking is only ever applied to values that already passed
//! type-checking, so an unparseable token is never compared against bounds.
//!
//! ## Lexical rules
//! - Integers: optional sign followed by digits, must fit the target width.
//! - Floats: decimal or exponential literals (`5.5`, `.5`, `-1e3`). `nan`,
//!   `inf` and literals that overflow to infinity are rejected.
//! - Booleans: `true`, `false`, `1` or `0`.
//! - Characters: exactly one Unicode scalar value.
//! - Text: any non-empty token.
//!
//! ## Example
//! ```rust
//! use reprompt::utils::{FromToken, is_between};
//!
//! assert_eq!(i32::from_token("7"), Some(7));
//! assert_eq!(i32::from_token("pizza"), None);
//! assert_eq!(bool::from_token("1"), Some(true));
//! assert!(is_between(&6, &6, &37));
//! ```
use std::{error::Error, fmt::Display};

/// Why a reader turned an input away.
///
/// - [`Type`]: the token is not a valid value of the expected type. Carries the
///   expected type's display name (e.g. `"a whole number"`).
/// - [`Between`]: the value is outside the inclusive bounds. Carries the rendered
///   low and high bounds.
///
/// [`Type`]: FilterErrorNot::Type
/// [`Between`]: FilterErrorNot::Between
#[derive(Debug, Clone, PartialEq)]
pub enum FilterErrorNot {
    Type(String),
    Between(String, String),
}

impl Display for FilterErrorNot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(expected) => {
                write!(f, "Invalid data type, should be {}, try again: ", expected)
            }
            Self::Between(low, high) => write!(
                f,
                "Invalid range, should be between {} and {}, try again: ",
                low, high
            ),
        }
    }
}

impl Error for FilterErrorNot {}

/// A type that can be produced from a single whitespace-free input token.
///
/// Returns `None` when the token is not a lexically valid value of the type.
/// Implemented for every integer width, `f32`, `f64`, `bool`, `char` and `String`.
pub trait FromToken: Sized {
    fn from_token(token: &str) -> Option<Self>;
}

/// Implements [`FromToken`] through the type's own `FromStr`.
///
/// # Example
/// ```rust,ignore
/// check_type!(u8, i32);
///
/// assert_eq!(u8::from_token("42"), Some(42));
/// assert_eq!(u8::from_token("256"), None);
/// ```
macro_rules! check_type {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromToken for $t {
                fn from_token(token: &str) -> Option<Self> {
                    token.parse::<$t>().ok()
                }
            }
        )*
    };
}

/// Same as [`check_type!`] but also refuses non-finite results.
macro_rules! check_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromToken for $t {
                fn from_token(token: &str) -> Option<Self> {
                    token.parse::<$t>().ok().filter(|v| v.is_finite())
                }
            }
        )*
    };
}

check_type!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

check_float!(f32, f64);

impl FromToken for bool {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl FromToken for char {
    fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl FromToken for String {
    fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Inclusive range check: `low <= value <= high`.
///
/// Values that cannot be ordered against the bounds (NaN, element values of a
/// different kind) are never in range.
pub fn is_between<T: PartialOrd + ?Sized>(value: &T, low: &T, high: &T) -> bool {
    low <= value && value <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_integer_tokens() {
        assert_eq!(i32::from_token("7"), Some(7));
        assert_eq!(i32::from_token("-123"), Some(-123));
        assert_eq!(i32::from_token("+5"), Some(5));
        assert_eq!(i32::from_token("pizza"), None);
        assert_eq!(i32::from_token("7.5"), None);
        assert_eq!(i32::from_token("2147483647"), Some(i32::MAX));
        assert_eq!(i32::from_token("2147483648"), None); // overflow
    }

    #[test]
    fn test_sanitize_unsigned_tokens() {
        assert_eq!(u8::from_token("42"), Some(42));
        assert_eq!(u8::from_token("-42"), None);
        assert_eq!(u8::from_token("256"), None); // u8 max is 255
    }

    #[test]
    fn test_sanitize_float_tokens() {
        assert_eq!(f64::from_token("5.5"), Some(5.5));
        assert_eq!(f64::from_token(".5"), Some(0.5));
        assert_eq!(f64::from_token("-1e3"), Some(-1000.0));
        assert_eq!(f64::from_token("42"), Some(42.0));
        assert_eq!(f32::from_token("2.5E-1"), Some(0.25));
        assert_eq!(f64::from_token("abc"), None);
    }

    #[test]
    fn test_sanitize_float_rejects_non_finite() {
        assert_eq!(f64::from_token("nan"), None);
        assert_eq!(f64::from_token("inf"), None);
        assert_eq!(f64::from_token("-infinity"), None);
        assert_eq!(f64::from_token("1e400"), None);
        assert_eq!(f32::from_token("1e39"), None);
    }

    #[test]
    fn test_sanitize_bool_tokens() {
        assert_eq!(bool::from_token("true"), Some(true));
        assert_eq!(bool::from_token("false"), Some(false));
        assert_eq!(bool::from_token("1"), Some(true));
        assert_eq!(bool::from_token("0"), Some(false));
        assert_eq!(bool::from_token("maybe"), None);
        assert_eq!(bool::from_token("TRUE"), None);
        assert_eq!(bool::from_token("2"), None);
    }

    #[test]
    fn test_sanitize_char_tokens() {
        assert_eq!(char::from_token("q"), Some('q'));
        assert_eq!(char::from_token("é"), Some('é'));
        assert_eq!(char::from_token("ab"), None);
        assert_eq!(char::from_token(""), None);
    }

    #[test]
    fn test_sanitize_text_tokens() {
        assert_eq!(String::from_token("Alpha"), Some("Alpha".to_string()));
        assert_eq!(String::from_token(""), None);
    }

    #[test]
    fn test_sanitize_is_between_inclusive() {
        assert!(is_between(&6, &6, &37));
        assert!(is_between(&37, &6, &37));
        assert!(!is_between(&5, &6, &37));
        assert!(!is_between(&38, &6, &37));
        assert!(is_between(&5.5, &5.5, &42.8));
        assert!(is_between(&42.8, &5.5, &42.8));
        assert!(!is_between(&42.81, &5.5, &42.8));
        assert!(!is_between(&f64::NAN, &5.5, &42.8));
        assert!(is_between("Beta", "Alpha", "Omega"));
    }

    #[test]
    fn test_sanitize_messages() {
        assert_eq!(
            FilterErrorNot::Type("a whole number".to_string()).to_string(),
            "Invalid data type, should be a whole number, try again: "
        );
        assert_eq!(
            FilterErrorNot::Between("6".to_string(), "37".to_string()).to_string(),
            "Invalid range, should be between 6 and 37, try again: "
        );
    }
}
