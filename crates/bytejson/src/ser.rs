//! Canonical serializer.
//!
//! Serialization cannot fail: a [`Value`] only ever holds valid JSON
//! fragments, so the output is always a well-formed document.

use alloc::vec::Vec;

use crate::value::Value;

/// Capacity reserved by [`to_bytes`] before serializing.
///
/// Only a performance hint; the output grows as needed.
pub const DEFAULT_CAPACITY_HINT: usize = 256;

/// Appends the canonical serialization of `value` to `out`.
///
/// - `null`, `true` and `false` are written as literals.
/// - Numbers are written as their lexeme, byte for byte.
/// - Strings are quoted. `"` and `\` are escaped with a backslash; the control
///   characters backspace, form feed, line feed, carriage return and tab use
///   their short escapes, and every other byte below `0x20` is written as
///   `\u00XX`. All other bytes, including non-ASCII UTF-8, are copied as is.
/// - Arrays and objects carry no whitespace. Object members are written in the
///   iteration order of [`Map`](crate::Map), which is not the order they were
///   parsed in.
///
/// # Examples
///
/// ```
/// use bytejson::{Value, append_bytes};
///
/// let mut out = b"value: ".to_vec();
/// append_bytes(&Value::from("tab\there"), &mut out);
/// assert_eq!(out, br#"value: "tab\there""#);
/// ```
pub fn append_bytes(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(n) => out.extend_from_slice(n.as_str().as_bytes()),
        Value::String(s) => append_escaped_string(s.as_bytes(), out),
        Value::Array(array) => {
            out.push(b'[');
            let mut iter = array.iter();
            if let Some(first) = iter.next() {
                append_bytes(first, out);
            }
            for item in iter {
                out.push(b',');
                append_bytes(item, out);
            }
            out.push(b']');
        }
        Value::Object(map) => {
            out.push(b'{');
            let mut first = true;
            for (key, value) in map {
                if !first {
                    out.push(b',');
                }
                first = false;
                append_escaped_string(key.as_bytes(), out);
                out.push(b':');
                append_bytes(value, out);
            }
            out.push(b'}');
        }
    }
}

/// Returns the canonical serialization of `value`.
///
/// # Examples
///
/// ```
/// let value = bytejson::parse(br#" { "b" : [1, 2.50, null] } "#).unwrap();
/// assert_eq!(bytejson::to_bytes(&value), br#"{"b":[1,2.50,null]}"#);
/// ```
#[must_use]
pub fn to_bytes(value: &Value) -> Vec<u8> {
    to_bytes_with_capacity(value, DEFAULT_CAPACITY_HINT)
}

/// Like [`to_bytes`], reserving `capacity` bytes up front.
#[must_use]
pub fn to_bytes_with_capacity(value: &Value, capacity: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(capacity);
    append_bytes(value, &mut out);
    out
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Writes `bytes` as a quoted, escaped JSON string.
///
/// Unescaped runs are copied in one slice; the run is flushed whenever a byte
/// needs escaping.
fn append_escaped_string(bytes: &[u8], out: &mut Vec<u8>) {
    out.reserve(bytes.len() + 2);
    out.push(b'"');

    let mut run_start = 0;
    for (index, &byte) in bytes.iter().enumerate() {
        let short = match byte {
            b'"' => b'"',
            b'\\' => b'\\',
            0x08 => b'b',
            0x0C => b'f',
            b'\n' => b'n',
            b'\r' => b'r',
            b'\t' => b't',
            0x00..=0x1F => 0,
            _ => continue,
        };

        out.extend_from_slice(&bytes[run_start..index]);
        run_start = index + 1;

        if short == 0 {
            out.extend_from_slice(&[
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX_DIGITS[usize::from(byte >> 4)],
                HEX_DIGITS[usize::from(byte & 0x0F)],
            ]);
        } else {
            out.extend_from_slice(&[b'\\', short]);
        }
    }

    out.extend_from_slice(&bytes[run_start..]);
    out.push(b'"');
}
