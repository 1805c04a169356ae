//! Canonical JSON serialization

use crate::error::CanonicalError;
use crate::fold::fold_ascii;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as FmtWrite;

/// Serialize a value to canonical JSON bytes
///
/// # Rules
///
/// - Object keys ASCII-folded, then sorted lexicographically
/// - Arrays preserve order
/// - Strings ASCII-folded (accents mapped, other non-ASCII dropped)
/// - No whitespace
/// - Floats are rejected (amounts are integer cents)
///
/// # Errors
///
/// Returns `CanonicalError::NonIntegerValue` if any non-integer number is
/// detected anywhere in the value.
///
/// # Example
///
/// ```rust
/// use websrm_canonical::to_canonical_json;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// let canonical = to_canonical_json(&value).unwrap();
/// assert_eq!(canonical, b"{\"a\":2,\"z\":1}");
/// ```
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalError> {
    let json_value = serde_json::to_value(value)?;
    canonical_json_value(&json_value)
}

/// Serialize a serde_json::Value to canonical JSON bytes
pub fn to_canonical_json_value(value: &Value) -> Result<Vec<u8>, CanonicalError> {
    canonical_json_value(value)
}

/// Serialize a value to canonical JSON string
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let bytes = to_canonical_json(value)?;
    // Safe because the writer only produces ASCII
    Ok(String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8"))
}

fn canonical_json_value(value: &Value) -> Result<Vec<u8>, CanonicalError> {
    let mut output = Vec::new();
    write_canonical_value(&mut output, value)?;
    Ok(output)
}

/// Write a JSON value in canonical form
fn write_canonical_value(output: &mut Vec<u8>, value: &Value) -> Result<(), CanonicalError> {
    match value {
        Value::Null => {
            output.extend_from_slice(b"null");
        }
        Value::Bool(b) => {
            if *b {
                output.extend_from_slice(b"true");
            } else {
                output.extend_from_slice(b"false");
            }
        }
        Value::Number(n) => {
            // CRITICAL: every number must be a mathematical integer
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                return Err(CanonicalError::NonIntegerValue(n.to_string()));
            }
            output.extend_from_slice(n.to_string().as_bytes());
        }
        Value::String(s) => {
            write_canonical_string(output, s);
        }
        Value::Array(arr) => {
            output.push(b'[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(b',');
                }
                write_canonical_value(output, item)?;
            }
            output.push(b']');
        }
        Value::Object(obj) => {
            write_canonical_object(output, obj)?;
        }
    }
    Ok(())
}

/// Write a JSON object with folded, sorted keys
fn write_canonical_object(
    output: &mut Vec<u8>,
    obj: &Map<String, Value>,
) -> Result<(), CanonicalError> {
    output.push(b'{');

    // Fold keys first, then sort by the folded bytes. Wire field names are
    // ASCII, so folding is observable only for malformed input, where a
    // deterministic answer is still required.
    let mut entries: Vec<(String, &Value)> = obj
        .iter()
        .map(|(key, value)| (fold_ascii(key), value))
        .collect();
    entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            output.push(b',');
        }

        write_escaped_string(output, key);
        output.push(b':');
        write_canonical_value(output, value)?;
    }

    output.push(b'}');
    Ok(())
}

/// Fold a string to ASCII, then write it escaped
fn write_canonical_string(output: &mut Vec<u8>, s: &str) {
    let folded = fold_ascii(s);
    write_escaped_string(output, &folded);
}

/// Write an already-ASCII string with JSON escaping
fn write_escaped_string(output: &mut Vec<u8>, s: &str) {
    output.push(b'"');

    for c in s.chars() {
        match c {
            '"' => output.extend_from_slice(b"\\\""),
            '\\' => output.extend_from_slice(b"\\\\"),
            '\n' => output.extend_from_slice(b"\\n"),
            '\r' => output.extend_from_slice(b"\\r"),
            '\t' => output.extend_from_slice(b"\\t"),
            c if c.is_control() => {
                let mut hex_buf = String::new();
                write!(hex_buf, "\\u{:04x}", c as u32).unwrap();
                output.extend_from_slice(hex_buf.as_bytes());
            }
            c => {
                let mut buf = [0u8; 4];
                let encoded = c.encode_utf8(&mut buf);
                output.extend_from_slice(encoded.as_bytes());
            }
        }
    }

    output.push(b'"');
}
