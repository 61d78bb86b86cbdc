//! Literal values carried by constants and parameter defaults
//!
//! Constants and default values reach the generator as an explicit literal
//! tree rather than an opaque "export anything" facility, so every variant
//! has its own serializer and round-trip fidelity stays testable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A PHP literal value: constant payloads and parameter defaults.
///
/// `Array` is an ordered list of nested literals; associative shapes are not
/// part of the reflected surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhpValue {
    /// null
    Null,
    /// true / false
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// String literal
    String(String),
    /// Ordered array literal, recursively
    Array(Vec<PhpValue>),
}

impl PhpValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        PhpValue::String(s.into())
    }

    /// Create an array value
    pub fn array(items: Vec<PhpValue>) -> Self {
        PhpValue::Array(items)
    }

    /// Render as PHP source so that parsing the literal back yields the
    /// same value.
    pub fn to_literal(&self) -> String {
        match self {
            PhpValue::Null => "null".to_string(),
            PhpValue::Bool(true) => "true".to_string(),
            PhpValue::Bool(false) => "false".to_string(),
            PhpValue::Int(i) => i.to_string(),
            PhpValue::Float(f) => format_float(*f),
            PhpValue::String(s) => quote_string(s),
            PhpValue::Array(items) => {
                let inner: Vec<String> = items.iter().map(PhpValue::to_literal).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }
}

impl fmt::Display for PhpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_literal())
    }
}

/// Quote a string as a single-quoted PHP literal.
///
/// Single-quoted strings only recognize `\\` and `\'` as escapes, so those
/// two characters are the only ones rewritten; everything else passes
/// through byte-for-byte.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Shortest round-trip formatting, forced to re-parse as a float.
///
/// Rust's `Display` for `f64` already emits the shortest digits that
/// round-trip; a trailing `.0` is appended when the result has no decimal
/// point so PHP does not read it back as an integer.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f.is_sign_positive() { "INF" } else { "-INF" }.to_string();
    }
    let s = format!("{}", f);
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{}.0", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(PhpValue::Null.to_literal(), "null");
        assert_eq!(PhpValue::Bool(true).to_literal(), "true");
        assert_eq!(PhpValue::Bool(false).to_literal(), "false");
        assert_eq!(PhpValue::Int(42).to_literal(), "42");
        assert_eq!(PhpValue::Int(-7).to_literal(), "-7");
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(PhpValue::Float(42.5).to_literal(), "42.5");
        assert_eq!(PhpValue::Float(1.0).to_literal(), "1.0");
        assert_eq!(PhpValue::Float(-0.25).to_literal(), "-0.25");
        assert_eq!(PhpValue::Float(f64::INFINITY).to_literal(), "INF");
        assert_eq!(PhpValue::Float(f64::NEG_INFINITY).to_literal(), "-INF");
        assert_eq!(PhpValue::Float(f64::NAN).to_literal(), "NAN");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(PhpValue::string("hello").to_literal(), "'hello'");
        assert_eq!(PhpValue::string("it's").to_literal(), r"'it\'s'");
        assert_eq!(PhpValue::string(r"a\b").to_literal(), r"'a\\b'");
        // Double-quote and newline pass through untouched
        assert_eq!(PhpValue::string("say \"hi\"\n").to_literal(), "'say \"hi\"\n'");
    }

    #[test]
    fn test_nested_arrays() {
        let value = PhpValue::array(vec![
            PhpValue::Int(1),
            PhpValue::string("two"),
            PhpValue::array(vec![PhpValue::Bool(false), PhpValue::Null]),
        ]);
        assert_eq!(value.to_literal(), "[1, 'two', [false, null]]");
        assert_eq!(PhpValue::array(vec![]).to_literal(), "[]");
    }

    #[test]
    fn test_json_round_trip() {
        let value = PhpValue::array(vec![
            PhpValue::Int(3),
            PhpValue::Float(0.5),
            PhpValue::string("x"),
            PhpValue::Null,
        ]);
        let json = serde_json::to_string(&value).unwrap();
        let back: PhpValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
