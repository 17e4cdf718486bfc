//! Serialization of [`Value`] trees back to JSON text.
//!
//! Two layouts are supported through [`Mode`]:
//!
//! - **Compact** via [`to_json()`] - a single line with `", "` between elements
//!   and `": "` after keys
//! - **Pretty** via [`to_json_pretty()`] - one element per line, 2-space
//!   indentation per nesting level
//!
//! Object keys come out sorted, since objects are stored in a `BTreeMap`.
//! Numbers go through [`format_number`], which rounds to 10 decimal places
//! and never prints a redundant fractional part.
//!
//! # Examples
//!
//! ```
//! use jsonexpr::Value;
//! use jsonexpr::output::{to_json, to_json_pretty};
//!
//! let value = Value::Array(vec![Value::Number(2.0), Value::Number(0.5)]);
//!
//! assert_eq!(to_json(&value), "[2, 0.5]");
//! assert_eq!(to_json_pretty(&value), "[\n  2,\n  0.5\n]");
//! ```

use std::collections::BTreeMap;

use crate::value::Value;

/// Output layout for [`serialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One element per line with two-space indentation.
    Pretty,
    /// Everything on a single line.
    #[default]
    Compact,
}

pub struct JsonPrinter {
    mode: Mode,
}

impl JsonPrinter {
    pub fn new(mode: Mode) -> Self {
        JsonPrinter { mode }
    }

    pub fn print(&self, value: &Value) -> String {
        let mut out = String::new();
        self.print_value(&mut out, value, 0);
        out
    }

    fn print_value(&self, out: &mut String, value: &Value, indent: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => out.push_str(&format_number(*n)),
            Value::String(s) => self.print_string(out, s),
            Value::Array(arr) => self.print_array(out, arr, indent),
            Value::Object(obj) => self.print_object(out, obj, indent),
        }
    }

    fn print_array(&self, out: &mut String, arr: &[Value], indent: usize) {
        if arr.is_empty() {
            out.push_str("[]");
            return;
        }

        out.push('[');
        for (i, item) in arr.iter().enumerate() {
            self.separator(out, i, indent + 1);
            self.print_value(out, item, indent + 1);
        }
        self.close(out, ']', indent);
    }

    fn print_object(&self, out: &mut String, obj: &BTreeMap<String, Value>, indent: usize) {
        if obj.is_empty() {
            out.push_str("{}");
            return;
        }

        out.push('{');
        for (i, (key, item)) in obj.iter().enumerate() {
            self.separator(out, i, indent + 1);
            self.print_string(out, key);
            out.push_str(": ");
            self.print_value(out, item, indent + 1);
        }
        self.close(out, '}', indent);
    }

    /// Writes whatever precedes the `i`-th element of a container.
    fn separator(&self, out: &mut String, i: usize, indent: usize) {
        match self.mode {
            Mode::Pretty => {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                out.push_str(&self.indent(indent));
            }
            Mode::Compact => {
                if i > 0 {
                    out.push_str(", ");
                }
            }
        }
    }

    fn close(&self, out: &mut String, bracket: char, indent: usize) {
        if self.mode == Mode::Pretty {
            out.push('\n');
            out.push_str(&self.indent(indent));
        }
        out.push(bracket);
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn print_string(&self, out: &mut String, s: &str) {
        out.push('"');
        for c in s.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                c => out.push(c),
            }
        }
        out.push('"');
    }
}

/// Formats a number rounded to 10 decimal places.
///
/// Values within `1e-10` of an integer print without a fractional part
/// (`2`, not `2.0`); everything else prints in fixed-point with trailing zeros
/// removed. Non-finite values have no JSON spelling and print as `null`.
///
/// ```
/// use jsonexpr::output::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(1.23456789012), "1.2345678901");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// ```
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "null".to_string();
    }

    let scaled = n * 1e10;
    let rounded = if scaled.is_finite() {
        scaled.round() / 1e10
    } else {
        n
    };

    if rounded == 0.0 {
        // also folds -0
        return "0".to_string();
    }

    if (rounded - rounded.round()).abs() < 1e-10 {
        return format!("{:.0}", rounded);
    }

    let fixed = format!("{:.10}", rounded);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Serializes `value` using the given layout.
pub fn serialize(value: &Value, mode: Mode) -> String {
    JsonPrinter::new(mode).print(value)
}

/// Converts a Value to its single-line JSON representation.
///
/// # Examples
///
/// ```
/// use jsonexpr::Value;
/// use jsonexpr::output::to_json;
/// use std::collections::BTreeMap;
///
/// let mut obj = BTreeMap::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Number(30.0));
///
/// assert_eq!(to_json(&Value::Object(obj)), r#"{"age": 30, "name": "Alice"}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    serialize(value, Mode::Compact)
}

/// Converts a Value to pretty-printed JSON with 2-space indentation.
///
/// # Examples
///
/// ```
/// use jsonexpr::Value;
/// use jsonexpr::output::to_json_pretty;
/// use std::collections::BTreeMap;
///
/// let mut obj = BTreeMap::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Number(30.0));
///
/// let json = to_json_pretty(&Value::Object(obj));
/// assert_eq!(json, "{\n  \"age\": 30,\n  \"name\": \"Alice\"\n}");
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    serialize(value, Mode::Pretty)
}
