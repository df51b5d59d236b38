//! JSON numbers kept as their source lexeme.

use alloc::string::{String, ToString};
use core::fmt;

use crate::parser::numbers::is_valid_lexeme;

/// A JSON number, stored as the verbatim lexeme it was parsed from.
///
/// Numbers are never evaluated while parsing, so no precision is lost between
/// parsing and serializing. Two numbers are equal only if their lexemes are
/// equal: `1.0` and `1.00` are different numbers.
///
/// Every `Number` holds a valid RFC 8259 number; use [`Number::from_lexeme`]
/// to build one from text, or one of the `From` conversions from Rust
/// integers.
///
/// # Examples
///
/// ```
/// use bytejson::Number;
///
/// let n = Number::from_lexeme("-12.5e3").unwrap();
/// assert_eq!(n.as_str(), "-12.5e3");
/// assert_eq!(n.as_f64(), Some(-12500.0));
/// assert_eq!(n.as_i64(), None);
/// assert!(Number::from_lexeme("012").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(String);

impl Number {
    /// Wraps a lexeme the lexer has already validated.
    pub(crate) fn from_validated(lexeme: String) -> Self {
        Self(lexeme)
    }

    /// Builds a number from its textual form, returning `None` if `lexeme`
    /// is not exactly one RFC 8259 number.
    #[must_use]
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        is_valid_lexeme(lexeme.as_bytes()).then(|| Self(lexeme.to_string()))
    }

    /// The lexeme.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the lexeme has neither a fraction nor an exponent.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        !self.0.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// The value as an `i64`, or `None` if it is not an integer lexeme or
    /// does not fit.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        self.0.parse().ok()
    }

    /// The value as a `u64`, or `None` if it is not a non-negative integer
    /// lexeme or does not fit.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        if !self.is_integer() {
            return None;
        }
        match self.0.strip_prefix('-') {
            // `-0` is zero, not a negative number.
            Some(digits) => digits.bytes().all(|b| b == b'0').then_some(0),
            None => self.0.parse().ok(),
        }
    }

    /// The value as the nearest `f64`, or `None` if it overflows to infinity.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Consumes the number and returns its lexeme.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! number_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self(v.to_string())
                }
            }
        )*
    };
}

number_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<f64> for Number {
    type Error = f64;

    /// Converts a finite float; NaN and the infinities have no JSON form and
    /// are handed back.
    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v.is_finite() {
            Ok(Self(v.to_string()))
        } else {
            Err(v)
        }
    }
}

impl From<Number> for String {
    fn from(n: Number) -> Self {
        n.0
    }
}
