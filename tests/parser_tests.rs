// tests/parser_tests.rs

use jsonexpr::json::{Parser, lex, parse_document};
use jsonexpr::output::{Mode, serialize};
use jsonexpr::value::Value;
use std::collections::BTreeMap;

fn object(pairs: Vec<(&str, Value)>) -> Value {
    let mut map = BTreeMap::new();
    for (k, v) in pairs {
        map.insert(k.to_string(), v);
    }
    Value::Object(map)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn parse_err(source: &str) -> String {
    parse_document(source).unwrap_err().to_string()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_scalars() {
    assert_eq!(parse_document("null").unwrap(), Value::Null);
    assert_eq!(parse_document("true").unwrap(), Value::Boolean(true));
    assert_eq!(parse_document("false").unwrap(), Value::Boolean(false));
    assert_eq!(parse_document("\"hi\"").unwrap(), Value::from("hi"));
    assert_eq!(parse_document("  -12.5e1 ").unwrap(), num(-125.0));
}

#[test]
fn test_invalid_number_literal() {
    let err = parse_err("[1e]");
    assert!(err.starts_with("Unexpected token '1e' (Number): Invalid number literal at line 1, column 1"));
}

#[test]
fn test_overflowing_number_literal() {
    let err = parse_err("[1e400]");
    assert!(err.starts_with("Unexpected token '1e400' (Number): Invalid number literal at line 1, column 1"));
    assert!(parse_err("[-1e400]").contains("Invalid number literal"));
    assert_eq!(parse_document("1e308").unwrap(), num(1e308));
}

#[test]
fn test_empty_document() {
    assert!(parse_err("").starts_with("Unexpected EOF while parsing value"));
    assert!(parse_err("   ").starts_with("Unexpected EOF while parsing value"));
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn test_empty_containers() {
    assert_eq!(parse_document("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(parse_document("{}").unwrap(), Value::Object(BTreeMap::new()));
    assert_eq!(parse_document("[ ]").unwrap().as_array().unwrap().len(), 0);
}

#[test]
fn test_nested_arrays() {
    let value = parse_document("[1, [2, [3]], []]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            num(1.0),
            Value::Array(vec![num(2.0), Value::Array(vec![num(3.0)])]),
            Value::Array(vec![]),
        ])
    );
}

#[test]
fn test_trailing_comma_in_array_rejected() {
    let err = parse_err("[1,]");
    assert!(err.starts_with("Unexpected token ']' (Syntax): Failed to parse at line 1, column 3"));
}

#[test]
fn test_missing_comma_in_array_rejected() {
    assert!(parse_err("[1 2]").contains("Expected comma after element in array"));
    assert!(parse_err("[1 :]").contains("Expected comma after element in array"));
}

#[test]
fn test_leading_comma_in_array_rejected() {
    assert!(parse_err("[,1]").contains("Failed to parse"));
}

#[test]
fn test_unterminated_array() {
    let err = parse_err("[1, 2");
    assert_eq!(err, "Unexpected EOF while parsing array at line 1, column 5\n[1, 2\n     ^");
    assert!(parse_err("[1,").starts_with("Unexpected EOF while parsing array"));
    assert!(parse_err("[").starts_with("Unexpected EOF while parsing array"));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn test_object() {
    let value = parse_document(r#"{"name": "Ada", "tags": ["x"], "meta": {"n": null}}"#).unwrap();
    assert_eq!(
        value,
        object(vec![
            ("name", Value::from("Ada")),
            ("tags", Value::Array(vec![Value::from("x")])),
            ("meta", object(vec![("n", Value::Null)])),
        ])
    );
}

#[test]
fn test_duplicate_keys_last_write_wins() {
    let value = parse_document(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    assert_eq!(value, object(vec![("a", num(3.0)), ("b", num(2.0))]));
}

#[test]
fn test_non_string_key_rejected() {
    let err = parse_err("{1: 2}");
    assert!(err.starts_with("Unexpected token '1' (Number): Expected string key in object"));
}

#[test]
fn test_missing_colon_rejected() {
    let err = parse_err(r#"{"a" 1}"#);
    assert!(err.starts_with("Unexpected token '1' (Number): Expected colon after key in object"));
}

#[test]
fn test_missing_comma_in_object_rejected() {
    let err = parse_err(r#"{"a": 1 "b": 2}"#);
    assert!(err.starts_with("Unexpected token 'b' (String): Expected comma after element in object"));
}

#[test]
fn test_trailing_comma_in_object_rejected() {
    assert!(parse_err(r#"{"a": 1,}"#).contains("Failed to parse"));
}

#[test]
fn test_unterminated_object() {
    assert!(parse_err(r#"{"a": 1"#).starts_with("Unexpected EOF while parsing object"));
    assert!(parse_err(r#"{"a":"#).starts_with("Unexpected EOF while parsing object"));
    assert!(parse_err(r#"{"a""#).starts_with("Unexpected EOF while parsing object"));
}

#[test]
fn test_stray_closing_bracket() {
    let err = parse_err("]");
    assert!(err.starts_with("Unexpected token ']' (Syntax): Failed to parse at line 1, column 0"));
}

#[test]
fn test_invalid_json_reports_error() {
    let err = parse_document("{invalid json}").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_error_points_at_offending_line() {
    let source = "{\n  \"a\": [1, 2,],\n  \"b\": 3\n}";
    let err = parse_err(source);
    assert_eq!(
        err,
        "Unexpected token ']' (Syntax): Failed to parse at line 2, column 13\n  \"a\": [1, 2,],\n             ^"
    );
}

// ============================================================================
// Index-level API
// ============================================================================

#[test]
fn test_parse_value_returns_next_index() {
    let source = r#"{"a": [1, 2]}"#;
    let parser = Parser::new(lex(source).unwrap(), source);
    let (_, next) = parser.parse_value(0).unwrap();
    assert_eq!(next, parser.tokens().len());

    let (elements, next) = parser.parse_array(4).unwrap();
    assert_eq!(elements, vec![num(1.0), num(2.0)]);
    assert_eq!(next, 8);
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_round_trip_through_compact_output() {
    let documents = [
        r#"{"a": {"b": [1, 2, {"c": "test"}, [11, 12]]}}"#,
        r#"[null, true, false, -0.5, 1e3, "x\"y\\z", "tab\there"]"#,
        r#"{"z": 1, "a": {"nested": {"deep": []}}, "m": {}}"#,
        r#""just a string""#,
        "3.14159",
    ];

    for doc in documents {
        let value = parse_document(doc).unwrap();
        let text = serialize(&value, Mode::Compact);
        let reparsed = parse_document(&text)
            .unwrap_or_else(|e| panic!("failed to reparse {text}: {e}"));
        assert_eq!(reparsed, value, "round trip changed {}", doc);
    }
}

#[test]
fn test_round_trip_through_pretty_output() {
    let doc = r#"{"list": [1, [2, 3], {"k": "v"}], "empty": [], "obj": {}}"#;
    let value = parse_document(doc).unwrap();
    let reparsed = parse_document(&serialize(&value, Mode::Pretty)).unwrap();
    assert_eq!(reparsed, value);
}

#[test]
fn test_agrees_with_serde_json() {
    let documents = [
        r#"{"a": [1, 2.5, -3e2, null, true, "s"], "b": {"c": {}}}"#,
        r#"[[], [[]], {"x": [{"y": false}]}]"#,
        r#"{"unicode": "é ü 日本", "escaped": "line\nbreak"}"#,
    ];

    for doc in documents {
        let ours = parse_document(doc).unwrap();
        let reference: serde_json::Value = serde_json::from_str(doc).unwrap();
        assert_eq!(ours, Value::from(reference), "mismatch for {}", doc);
    }
}
