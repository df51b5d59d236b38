#![allow(missing_docs)]

use bytejson::{JsonParser, ParserOptions, parse};

fn render(input: &[u8]) -> String {
    match parse(input) {
        Ok(value) => format!("ok: {value}"),
        Err(err) => format!("{err} ({})", err.location(input)),
    }
}

#[test]
fn snapshot_structural_errors() {
    insta::assert_snapshot!(render(b""), @"unexpected end of input (1:1)");
    insta::assert_snapshot!(render(b"true  x"), @"unexpected character 'x' at index 6 (1:7)");
    insta::assert_snapshot!(render(b"12.678}"), @"unexpected character '}' at index 6 (1:7)");
    insta::assert_snapshot!(render(b"[1,\n2,\n]"), @"unexpected character ']' at index 7 (3:1)");
    insta::assert_snapshot!(render(b"{\"a\" 1}"), @"unexpected character '1' at index 5 (1:6)");
    insta::assert_snapshot!(render(b"[\xC3\xA9]"), @r"unexpected character '\xc3' at index 1 (1:2)");
}

#[test]
fn snapshot_number_errors() {
    insta::assert_snapshot!(render(b"-01"), @"number with leading zero at index 2 (1:3)");
    insta::assert_snapshot!(render(b"1 000"), @"unexpected character '0' at index 2 (1:3)");
    insta::assert_snapshot!(render(b"[1.e5]"), @"unexpected character 'e' at index 3 (1:4)");
    insta::assert_snapshot!(render(b"-"), @"unexpected end of input (1:2)");
}

#[test]
fn snapshot_string_errors() {
    insta::assert_snapshot!(render(br#""\y""#), @r#"unexpected escaped character 'y' in "\y" at index 2 (1:3)"#);
    insta::assert_snapshot!(render(br#""\u005""#), @r#"invalid hex digit sequence "005"" at index 3 (1:4)"#);
    insta::assert_snapshot!(render(br#""\uD801abc""#), @r#"expected low surrogate after high surrogate in "\uD801ab" at index 8 (1:9)"#);
    insta::assert_snapshot!(render(br#""\uDC00""#), @r#"could not create unicode scalar from 0xDC00 in "\uDC00" at index 6 (1:7)"#);
    insta::assert_snapshot!(render(b"\"a\x1b\""), @"unescaped control character 0x1B in \"a\u{1b}\" at index 2 (1:3)");
}

#[test]
fn snapshot_depth_errors() {
    let shallow = JsonParser::new(ParserOptions { max_depth: 1 });
    let err = shallow.parse(b"{\"a\": [1]}").unwrap_err();
    insta::assert_snapshot!(err, @"too many nested arrays or objects at index 6");
}
