#![allow(missing_docs)]

mod common;

use bytejson::{Value, parse, to_bytes};
use common::{CANONICAL, ORIGINAL};

fn canonical(input: &str) -> String {
    match parse(input) {
        Ok(value) => value.to_string(),
        Err(err) => format!("error: {err}"),
    }
}

#[test]
fn snapshot_canonical_document() {
    let value = parse(ORIGINAL).unwrap();
    assert_eq!(to_bytes(&value), CANONICAL.as_bytes());
    insta::assert_snapshot!(value.get("metrics").unwrap(), @r#"{"bytes":18446744073709551616,"elapsed_ms":12.50,"ratio":-1.5e-3,"zero":-0}"#);
    insta::assert_snapshot!(value.get("escapes").unwrap(), @r#""tab\tquote\"slash/unicodeé😀""#);
}

#[test]
fn snapshot_whitespace_is_dropped() {
    insta::assert_snapshot!(canonical(" [ 1 , [ ] , { } , \"a b\" ] "), @r#"[1,[],{},"a b"]"#);
    insta::assert_snapshot!(canonical("\r\n\t{\"k\"\n:\n\"v\"}\r\n"), @r#"{"k":"v"}"#);
}

#[test]
fn snapshot_duplicate_keys() {
    insta::assert_snapshot!(canonical(r#"{"a":1,"b":2,"a":3}"#), @r#"{"a":3,"b":2}"#);
    insta::assert_snapshot!(canonical(r#"{"a":{"x":1},"a":[]}"#), @r#"{"a":[]}"#);
}

#[test]
fn snapshot_string_escapes() {
    insta::assert_snapshot!(canonical(r#""\u0001\u001fA""#), @r#""\u0001\u001FA""#);
    insta::assert_snapshot!(canonical(r#""\b\f\n\r\t\"\\\/""#), @r#""\b\f\n\r\t\"\\/""#);
}

#[test]
fn snapshot_programmatic_values() {
    let value: Value = [
        ("name", Value::from("bytejson")),
        ("version", Value::from(1)),
        ("ratio", Value::from(0.25)),
        ("tags", Value::from_iter(["json", "rfc8259"])),
        ("missing", Value::from(None::<&str>)),
    ]
    .into_iter()
    .collect();
    insta::assert_snapshot!(value, @r#"{"missing":null,"name":"bytejson","ratio":0.25,"tags":["json","rfc8259"],"version":1}"#);
}
