//! Strict, byte-level [RFC 8259] JSON parsing and canonical serialization.
//!
//! `bytejson` parses a complete document held in memory into a [`Value`] tree
//! and writes trees back out as compact, canonical bytes.
//!
//! - Parsing is strict: no comments, no trailing commas, no leading zeros and
//!   exactly one top-level value.
//! - Every error carries the zero-based byte offset of the offending byte.
//! - Numbers are kept as their source lexeme and never evaluated, so no
//!   precision is lost on a parse/serialize round trip.
//! - Container nesting is bounded by [`ParserOptions::max_depth`].
//!
//! # Examples
//!
//! ```rust
//! use bytejson::{JsonError, Value};
//!
//! let value = bytejson::parse(br#"{ "name": "bytejson", "tags": ["json", 1.50] }"#)?;
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("bytejson"));
//! assert_eq!(
//!     bytejson::to_bytes(&value),
//!     br#"{"name":"bytejson","tags":["json",1.50]}"#
//! );
//!
//! let err = bytejson::parse(b"[1, 2,]").unwrap_err();
//! assert_eq!(err, JsonError::UnexpectedCharacter { byte: b']', index: 6 });
//! assert_eq!(err.to_string(), "unexpected character ']' at index 6");
//! # Ok::<(), JsonError>(())
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod number;
mod options;
mod parser;
mod ser;
mod value;


pub use error::{JsonError, Location};
pub use number::Number;
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::{JsonParser, parse, parse_with_options};
pub use ser::{DEFAULT_CAPACITY_HINT, append_bytes, to_bytes, to_bytes_with_capacity};
pub use value::{Array, Map, Value};
