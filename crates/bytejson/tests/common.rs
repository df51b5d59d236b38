#![allow(missing_docs)]

pub const ORIGINAL: &str = r#"
{
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "metrics": {
        "elapsed_ms": 12.50,
        "bytes": 18446744073709551616,
        "ratio": -1.5e-3,
        "zero": -0
    },
    "escapes": "tab\tquote\"slash\/unicode\u00e9\ud83d\ude00",
    "flags": [true, false, null],
    "empty": { "array": [], "object": {} },
    "nested": [[["deep"]]]
}
"#;

/// `ORIGINAL` in canonical form: no whitespace, keys in map order and
/// number lexemes untouched.
pub const CANONICAL: &str = concat!(
    r#"{"empty":{"array":[],"object":{}},"#,
    r#""escapes":"tab\tquote\"slash/unicodeé😀","#,
    r#""flags":[true,false,null],"#,
    r#""metrics":{"bytes":18446744073709551616,"elapsed_ms":12.50,"ratio":-1.5e-3,"zero":-0},"#,
    r#""nested":[[["deep"]]],"#,
    r#""request":{"filename":"example.rs","language":"rust","options":{"features":["serde","tokio"],"opt_level":"2"}},"#,
    r#""snippets":["fn main() {}","println!(\"hi\")"]}"#,
);

#[test]
fn original_is_valid_json() {
    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let canonical: serde_json::Value = serde_json::from_str(CANONICAL).unwrap();
    assert_eq!(value, canonical);
}
