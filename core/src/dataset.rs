//! Raw dataset shape detection and value coercion.
//!
//! Two shapes are accepted:
//! - an array of records, each carrying `word` and `definition`
//! - an object mapping word to definition
//!
//! Unusable records are dropped silently; the caller only sees an error when
//! the shape is wrong or nothing survives.

use crate::error::FormatError;
use crate::types::Entry;
use serde_json::Value;

pub(crate) struct Normalized {
    pub(crate) entries: Vec<Entry>,
    pub(crate) dropped: usize,
}

pub(crate) fn normalize(raw: &Value) -> Result<Normalized, FormatError> {
    let (entries, total): (Vec<Entry>, usize) = match raw {
        Value::Array(records) => (
            records.iter().filter_map(entry_from_record).collect(),
            records.len(),
        ),
        Value::Object(pairs) => (
            pairs
                .iter()
                .filter_map(|(word, definition)| entry_from_pair(word, definition))
                .collect(),
            pairs.len(),
        ),
        _ => return Err(FormatError::UnsupportedShape),
    };

    if entries.is_empty() {
        return Err(FormatError::EmptyDataset);
    }

    Ok(Normalized {
        dropped: total - entries.len(),
        entries,
    })
}

fn entry_from_record(record: &Value) -> Option<Entry> {
    let fields = record.as_object()?;
    let word = coerce(fields.get("word")?)?;
    let definition = coerce(fields.get("definition")?)?;
    Entry::from_parts(word, definition)
}

fn entry_from_pair(word: &str, definition: &Value) -> Option<Entry> {
    Entry::from_parts(word, coerce(definition)?)
}

/// Renders a scalar as text. Falsy scalars (`null`, `false`, `0`) and
/// containers yield `None`; empty strings are rejected later by [`Entry`].
fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
