//! Named-field decoding of ledger rows
//!
//! Ledgers hand back header-keyed records. Columns are looked up by name,
//! never by position, and each row is accepted or rejected on its own.

use serde_json::{Map, Value};
use tracing::warn;

use super::{normalize_id, Item, Vote, TIE};
use crate::errors::{SharedError, SharedResult};

/// Rows that decoded plus a count of the ones that did not
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub rows: Vec<T>,
    pub rejected: usize,
}

impl<T> Decoded<T> {
    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

/// Decode one `{id, text}` record
pub fn decode_item_row(row: &Value) -> SharedResult<Item> {
    let record = as_record(row)?;
    let id = scalar_field(record, "id")?;
    if id == TIE {
        return Err(SharedError::ReservedId { id });
    }
    let text = match record.get("text") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => {
            return Err(SharedError::MissingField {
                field: "text".to_string(),
            })
        }
        Some(other) => other.to_string(),
    };
    Ok(Item::new(id, text))
}

/// Decode one `{id1, id2, result}` record
pub fn decode_vote_row(row: &Value) -> SharedResult<Vote> {
    let record = as_record(row)?;
    let id1 = scalar_field(record, "id1")?;
    let id2 = scalar_field(record, "id2")?;
    let result = scalar_field(record, "result")?;
    Vote::from_columns(id1, id2, result)
}

pub fn decode_items(rows: &[Value]) -> Decoded<Item> {
    decode_all(rows, "item", decode_item_row)
}

pub fn decode_votes(rows: &[Value]) -> Decoded<Vote> {
    decode_all(rows, "vote", decode_vote_row)
}

fn decode_all<T>(rows: &[Value], kind: &str, decode: fn(&Value) -> SharedResult<T>) -> Decoded<T> {
    let mut decoded = Vec::with_capacity(rows.len());
    let mut rejected = 0;
    for (index, row) in rows.iter().enumerate() {
        match decode(row) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                rejected += 1;
                warn!(row = index, kind, error = %e, "⚠️ Skipping malformed {} row", kind);
            }
        }
    }
    Decoded { rows: decoded, rejected }
}

fn as_record(row: &Value) -> SharedResult<&Map<String, Value>> {
    row.as_object().ok_or(SharedError::NotARecord)
}

/// Read an id-like column. Spreadsheets return numeric ids as numbers, so
/// those are rendered to their canonical string form.
fn scalar_field(record: &Map<String, Value>, field: &str) -> SharedResult<String> {
    let value = match record.get(field) {
        Some(Value::String(s)) => normalize_id(s),
        Some(Value::Number(n)) => number_to_id(n),
        Some(Value::Null) | None => {
            return Err(SharedError::MissingField {
                field: field.to_string(),
            })
        }
        Some(other) => {
            return Err(SharedError::InvalidField {
                field: field.to_string(),
                details: format!("expected string or number, got {other}"),
            })
        }
    };
    if value.is_empty() {
        return Err(SharedError::EmptyId);
    }
    Ok(value)
}

/// Integral floats (`56.0`, `1e20`) are written out in plain positional
/// digits, the way a sheet shows the cell. Fractional values keep their
/// decimal form.
fn number_to_id(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
