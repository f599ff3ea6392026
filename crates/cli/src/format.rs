//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): pretty JSON records, `(boolean) true`, `(nil)`, `OK`
//! - **JSON** (`--json`): `{"result": ...}` / `{"error": ...}`
//! - **Raw** (`--raw`): the payload exactly as the contract returns it

use insurechain_executor::{Error, Output};
use serde_json::{json, Value};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => output.to_payload(),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => err.to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

/// Parse contract JSON text, keeping it as a string if it is not JSON.
fn parse_payload(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn result_value(output: &Output) -> Value {
    match output {
        Output::Unit => Value::Null,
        Output::Bool(b) => Value::Bool(*b),
        Output::Record(text) | Output::Records(text) => parse_payload(text),
        Output::PreviousOwner(owner) => owner.clone().map(Value::String).unwrap_or(Value::Null),
    }
}

fn format_json(output: &Output) -> String {
    let doc = json!({ "result": result_value(output) });
    serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Unit => "OK".to_string(),
        Output::Bool(b) => format!("(boolean) {}", b),
        Output::Record(text) => {
            let value = parse_payload(text);
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.clone())
        }
        Output::Records(text) => match parse_payload(text) {
            Value::Array(items) if items.is_empty() => "(empty list)".to_string(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}) {}", i + 1, format_item(item)))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => text.clone(),
        },
        Output::PreviousOwner(None) => "(nil)".to_string(),
        Output::PreviousOwner(Some(owner)) => format!("\"{}\"", owner),
    }
}

// A raw-fallback entry is a JSON string holding undecodable bytes.
fn format_item(item: &Value) -> String {
    match item {
        Value::String(raw) => format!("(raw) {}", raw),
        other => other.to_string(),
    }
}
