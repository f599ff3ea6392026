//! Canonical JSON encoding
//!
//! Every write to the world state goes through [`to_canonical_string`] so
//! that independent executions of the same write produce byte-identical
//! values. Rules:
//!
//! | Value | Encoding |
//! |-------|----------|
//! | Object | keys sorted lexicographically (by UTF-8 bytes), recursively |
//! | Array | element order preserved |
//! | String / Number / Bool / Null | serde_json's compact form |
//!
//! No whitespace is emitted anywhere.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Serialize any value to its canonical JSON string
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let tree = serde_json::to_value(value)?;
    Ok(encode_canonical(&tree))
}

/// Encode a JSON tree canonically
pub fn encode_canonical(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            out.push_str(&value.to_string())
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly; serde_json's map order depends on its features
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

/// Encode a string with JSON escaping
pub fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_string(&mut out, s);
    out
}

fn write_string(out: &mut String, s: &str) {
    // Value's Display is serde_json's compact serializer
    out.push_str(&Value::String(s.to_owned()).to_string());
}
