//! Error taxonomy shared by the cursor, the string decoder, the number lexer
//! and the value parser.
//!
//! Every variant that can be pinned to a position carries the zero-based byte
//! index of the offending byte. String-level failures additionally carry the
//! raw source text of the literal from just after its opening quote up to and
//! including the offending byte; it is sliced out of the input only once the
//! error is raised.

use bstr::BString;
use thiserror::Error;

/// A failure to parse a JSON document.
///
/// Parsing is all-or-nothing: the first error encountered is returned and no
/// partial value is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A byte that does not match any production expected at this position.
    #[error("unexpected character '{}' at index {index}", .byte.escape_ascii())]
    UnexpectedCharacter {
        /// The offending byte.
        byte: u8,
        /// Byte offset of `byte` in the input.
        index: usize,
    },

    /// The input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfFile,

    /// The nesting-depth guard was exceeded.
    #[error("too many nested arrays or objects at index {index}")]
    TooManyNestedArraysOrObjects {
        /// Byte offset of the `[` or `{` that crossed the limit.
        index: usize,
    },

    /// `\u` was not followed by four hexadecimal digits.
    #[error("invalid hex digit sequence \"{digits}\" at index {index}")]
    InvalidHexDigitSequence {
        /// The four raw bytes following `\u`.
        digits: BString,
        /// Byte offset of the first of the four bytes.
        index: usize,
    },

    /// A backslash followed by a character that is not a JSON escape.
    #[error("unexpected escaped character '{}' in \"{partial}\" at index {index}", .byte.escape_ascii())]
    UnexpectedEscapedCharacter {
        /// The byte following the backslash.
        byte: u8,
        /// Raw text of the string literal up to and including `byte`.
        partial: BString,
        /// Byte offset of `byte`.
        index: usize,
    },

    /// A raw control character (`0x00..=0x1F`) inside a string literal.
    #[error("unescaped control character 0x{byte:02X} in \"{partial}\" at index {index}")]
    UnescapedControlCharacterInString {
        /// The control byte.
        byte: u8,
        /// Raw text of the string literal up to and including `byte`.
        partial: BString,
        /// Byte offset of `byte`.
        index: usize,
    },

    /// A high surrogate escape not followed by a low surrogate escape.
    #[error("expected low surrogate after high surrogate in \"{partial}\" at index {index}")]
    ExpectedLowSurrogate {
        /// Raw text of the string literal up to and including the offending
        /// byte.
        partial: BString,
        /// Byte offset of the offending byte.
        index: usize,
    },

    /// Decoded code units that do not form a Unicode scalar value.
    #[error("could not create unicode scalar from {value:#X} in \"{partial}\" at index {index}")]
    CouldNotCreateUnicodeScalar {
        /// Raw text of the string literal up to and including the last hex
        /// digit of the escape.
        partial: BString,
        /// Byte offset of the last hex digit of the escape.
        index: usize,
        /// The value that was not a valid scalar.
        value: u32,
    },

    /// The integer part of a number starts with `0` followed by a digit.
    #[error("number with leading zero at index {index}")]
    NumberWithLeadingZero {
        /// Byte offset of the digit following the leading zero.
        index: usize,
    },
}

impl JsonError {
    /// Returns the byte offset this error points at, if it has one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfFile => None,
            Self::UnexpectedCharacter { index, .. }
            | Self::TooManyNestedArraysOrObjects { index }
            | Self::InvalidHexDigitSequence { index, .. }
            | Self::UnexpectedEscapedCharacter { index, .. }
            | Self::UnescapedControlCharacterInString { index, .. }
            | Self::ExpectedLowSurrogate { index, .. }
            | Self::CouldNotCreateUnicodeScalar { index, .. }
            | Self::NumberWithLeadingZero { index } => Some(*index),
        }
    }

    /// Resolves the error position to a line and column in `input`.
    ///
    /// `input` must be the buffer that was parsed. Errors without an index
    /// (end of input) resolve to the position just past the last byte.
    #[must_use]
    pub fn location(&self, input: &[u8]) -> Location {
        Location::of(input, self.index().unwrap_or(input.len()))
    }
}

/// A 1-based line and column, counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Byte column within the line, starting at 1.
    pub column: usize,
}

impl Location {
    /// Computes the location of byte offset `index` in `input`.
    ///
    /// Only `\n` starts a new line. Offsets past the end are clamped to the
    /// position just after the last byte.
    #[must_use]
    pub fn of(input: &[u8], index: usize) -> Self {
        let prefix = &input[..index.min(input.len())];
        let line = 1 + prefix.iter().filter(|&&b| b == b'\n').count();
        let line_start = prefix
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        Self {
            line,
            column: prefix.len() - line_start + 1,
        }
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
