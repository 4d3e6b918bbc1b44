//! Raw input → typed JSON value coercion.
//!
//! Coercion never fails. Text that cannot be parsed into the field's kind is
//! kept as a JSON string so the user can keep editing it.

use serde_json::{Number, Value};

use crate::date_format;
use crate::field::{FieldKind, FieldSpec};

/// A raw value as produced by an input widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// Text typed into an input, textarea or picked from a select.
    Text(String),
    /// State of a checkbox.
    Checked(bool),
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for RawInput {
    fn from(checked: bool) -> Self {
        Self::Checked(checked)
    }
}

/// Coerce `raw` into the value stored for `field`.
pub(crate) fn coerce(field: &FieldSpec, raw: RawInput) -> Value {
    let text = match raw {
        RawInput::Checked(checked) if field.kind == FieldKind::Boolean => {
            return Value::Bool(checked);
        }
        RawInput::Checked(checked) => checked.to_string(),
        RawInput::Text(text) => text,
    };

    if text.is_empty() {
        return match field.kind {
            FieldKind::Boolean => Value::Bool(false),
            _ => Value::String(text),
        };
    }

    match field.kind {
        FieldKind::String | FieldKind::Select => Value::String(text),
        FieldKind::Number => parse_number(&text).unwrap_or_else(|| deferred(field, text)),
        FieldKind::Boolean => parse_bool(&text).map_or_else(|| deferred(field, text), Value::Bool),
        FieldKind::Array | FieldKind::Object => parse_json(field.kind, &text)
            .unwrap_or_else(|| deferred(field, text)),
        FieldKind::Date | FieldKind::Time | FieldKind::DatetimeLocal => {
            match &field.date_format {
                Some(format) => date_format::reformat(field.kind, &text, format)
                    .map_or_else(|| deferred(field, text), Value::String),
                None => Value::String(text),
            }
        }
    }
}

/// Keep text that did not coerce as a plain string.
fn deferred(field: &FieldSpec, text: String) -> Value {
    tracing::debug!(
        field = %field.name,
        kind = %field.kind,
        "input kept as raw text"
    );
    Value::String(text)
}

fn parse_number(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Value::Number(int.into()));
    }
    if let Ok(int) = trimmed.parse::<u64>() {
        return Some(Value::Number(int.into()));
    }
    // Integers past u64 would lose digits as f64.
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let float = trimmed.parse::<f64>().ok()?;
    Number::from_f64(float).map(Value::Number)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Parse JSON text, accepting only the shape the kind asks for.
fn parse_json(kind: FieldKind, text: &str) -> Option<Value> {
    let value: Value = serde_json::from_str(text).ok()?;
    match (kind, &value) {
        (FieldKind::Array, Value::Array(_)) | (FieldKind::Object, Value::Object(_)) => Some(value),
        _ => None,
    }
}
