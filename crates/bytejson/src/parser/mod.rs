//! Strict RFC 8259 value parser.
//!
//! Overview
//! - The whole document is available up front as a byte slice. A forward-only
//!   [`Cursor`] hands out one byte at a time together with its index, which is
//!   what every error reports.
//! - The parser skips whitespace and dispatches on the first significant
//!   byte. Strings, numbers and literals are decoded by their own submodules;
//!   arrays and objects are sequenced by explicit state machines so that the
//!   elements of one container never grow the call stack. Only nesting does.
//! - Numbers have no closing delimiter. The number lexer stops on the byte
//!   after the lexeme and the parser parks that byte in `pending`, where the
//!   next read picks it up again. Nothing else ever writes to `pending`, so a
//!   value never starts from a parked byte.
//! - Each `[` or `{` bumps a depth counter shared across the whole parse.
//!   Crossing [`ParserOptions::max_depth`] fails at the index of the opening
//!   byte that crossed it.

pub(crate) mod cursor;
mod escape;
mod literal_buffer;
pub(crate) mod numbers;
mod string;


use alloc::string::String;

use bstr::ByteSlice;

use self::{
    cursor::Cursor,
    literal_buffer::{ExpectedLiteralBuffer, Step},
};
use crate::{
    error::JsonError,
    number::Number,
    options::ParserOptions,
    value::{Array, Map, Value},
};

/// Parses `bytes` as a single JSON document with the default
/// [`ParserOptions`].
///
/// The document is one value surrounded by optional whitespace. Anything else
/// after the value is an error.
///
/// # Errors
///
/// Returns the first [`JsonError`] encountered; there is no partial result.
///
/// # Examples
///
/// ```
/// use bytejson::{JsonError, Value};
///
/// let value = bytejson::parse(b"\t [true, \"hello\"] \n").unwrap();
/// assert_eq!(value, Value::from_iter([Value::Bool(true), Value::from("hello")]));
///
/// assert_eq!(
///     bytejson::parse(b"true  x"),
///     Err(JsonError::UnexpectedCharacter { byte: b'x', index: 6 })
/// );
/// ```
pub fn parse(bytes: impl AsRef<[u8]>) -> Result<Value, JsonError> {
    JsonParser::default().parse(bytes)
}

/// Parses `bytes` as a single JSON document with the given options.
///
/// # Errors
///
/// Returns the first [`JsonError`] encountered; there is no partial result.
pub fn parse_with_options(
    bytes: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, JsonError> {
    JsonParser::new(options).parse(bytes)
}

/// A reusable parser configuration.
///
/// `JsonParser` holds no per-document state; every call to
/// [`parse`](Self::parse) runs an independent parse, so one parser can be
/// shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonParser {
    options: ParserOptions,
}

impl JsonParser {
    /// Creates a parser with the given options.
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was created with.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses `bytes` as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns the first [`JsonError`] encountered; there is no partial
    /// result.
    pub fn parse(&self, bytes: impl AsRef<[u8]>) -> Result<Value, JsonError> {
        ParserImpl::new(bytes.as_ref(), self.options.max_depth).parse_document()
    }
}

#[inline]
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    ExpectValueOrEnd,
    ExpectValue,
    ExpectSeparatorOrEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ObjectState {
    ExpectKeyOrEnd,
    ExpectKey,
    ExpectColon(String),
    ExpectValue(String),
    ExpectSeparatorOrEnd,
}

/// Per-document parse state.
struct ParserImpl<'src> {
    cursor: Cursor<'src>,
    /// The byte that ended the last number, not yet consumed.
    pending: Option<(u8, usize)>,
    depth: usize,
    max_depth: usize,
}

impl<'src> ParserImpl<'src> {
    fn new(bytes: &'src [u8], max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(bytes),
            pending: None,
            depth: 0,
            max_depth,
        }
    }

    fn parse_document(mut self) -> Result<Value, JsonError> {
        let (byte, index) = self.next_significant()?;
        let value = self.parse_value(byte, index)?;

        while let Some((byte, index)) = self.next_byte() {
            if !is_whitespace(byte) {
                return Err(JsonError::UnexpectedCharacter { byte, index });
            }
        }
        Ok(value)
    }

    #[inline]
    fn next_byte(&mut self) -> Option<(u8, usize)> {
        self.pending.take().or_else(|| self.cursor.read())
    }

    /// The next byte that is not whitespace.
    fn next_significant(&mut self) -> Result<(u8, usize), JsonError> {
        while let Some((byte, index)) = self.next_byte() {
            if !is_whitespace(byte) {
                return Ok((byte, index));
            }
        }
        Err(JsonError::UnexpectedEndOfFile)
    }

    /// Parses the value whose first significant byte is `byte` at `index`.
    fn parse_value(&mut self, byte: u8, index: usize) -> Result<Value, JsonError> {
        match byte {
            b'"' => string::parse_string(&mut self.cursor).map(Value::String),
            b'[' => self.parse_array(index),
            b'{' => self.parse_object(index),
            b'-' | b'0'..=b'9' => self.parse_number(),
            _ => match ExpectedLiteralBuffer::new(byte) {
                Some(literal) => self.parse_literal(literal),
                None => Err(JsonError::UnexpectedCharacter { byte, index }),
            },
        }
    }

    fn parse_literal(&mut self, mut literal: ExpectedLiteralBuffer) -> Result<Value, JsonError> {
        loop {
            let Some((byte, index)) = self.cursor.read() else {
                return Err(JsonError::UnexpectedEndOfFile);
            };
            match literal.step(byte) {
                Step::NeedMore => {}
                Step::Done(value) => return Ok(value),
                Step::Reject => return Err(JsonError::UnexpectedCharacter { byte, index }),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Value, JsonError> {
        let lexeme = numbers::lex_number(&mut self.cursor)?;
        if let Some(terminator) = self.cursor.current() {
            self.pending = Some((terminator, self.cursor.index()));
        }
        // The lexeme is ASCII, so the conversion never replaces anything.
        let lexeme = lexeme.to_str_lossy().into_owned();
        Ok(Value::Number(Number::from_validated(lexeme)))
    }

    fn enter_container(&mut self, index: usize) -> Result<(), JsonError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(JsonError::TooManyNestedArraysOrObjects { index });
        }
        Ok(())
    }

    fn exit_container(&mut self) {
        self.depth -= 1;
    }

    /// Parses an array whose `[` is at `open`.
    fn parse_array(&mut self, open: usize) -> Result<Value, JsonError> {
        self.enter_container(open)?;

        let mut array = Array::new();
        let mut state = ArrayState::ExpectValueOrEnd;
        loop {
            let (byte, index) = self.next_significant()?;
            state = match state {
                ArrayState::ExpectValueOrEnd if byte == b']' => break,
                ArrayState::ExpectValueOrEnd | ArrayState::ExpectValue => {
                    array.push(self.parse_value(byte, index)?);
                    ArrayState::ExpectSeparatorOrEnd
                }
                ArrayState::ExpectSeparatorOrEnd => match byte {
                    b',' => ArrayState::ExpectValue,
                    b']' => break,
                    _ => return Err(JsonError::UnexpectedCharacter { byte, index }),
                },
            };
        }

        self.exit_container();
        Ok(Value::Array(array))
    }

    /// Parses an object whose `{` is at `open`. A repeated key keeps the
    /// last value.
    fn parse_object(&mut self, open: usize) -> Result<Value, JsonError> {
        self.enter_container(open)?;

        let mut map = Map::new();
        let mut state = ObjectState::ExpectKeyOrEnd;
        loop {
            let (byte, index) = self.next_significant()?;
            state = match state {
                ObjectState::ExpectKeyOrEnd if byte == b'}' => break,
                ObjectState::ExpectKeyOrEnd | ObjectState::ExpectKey => {
                    if byte != b'"' {
                        return Err(JsonError::UnexpectedCharacter { byte, index });
                    }
                    ObjectState::ExpectColon(string::parse_string(&mut self.cursor)?)
                }
                ObjectState::ExpectColon(key) => {
                    if byte != b':' {
                        return Err(JsonError::UnexpectedCharacter { byte, index });
                    }
                    ObjectState::ExpectValue(key)
                }
                ObjectState::ExpectValue(key) => {
                    let value = self.parse_value(byte, index)?;
                    map.insert(key, value);
                    ObjectState::ExpectSeparatorOrEnd
                }
                ObjectState::ExpectSeparatorOrEnd => match byte {
                    b',' => ObjectState::ExpectKey,
                    b'}' => break,
                    _ => return Err(JsonError::UnexpectedCharacter { byte, index }),
                },
            };
        }

        self.exit_container();
        Ok(Value::Object(map))
    }
}
