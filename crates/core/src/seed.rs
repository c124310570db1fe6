//! Record-level checks for seed data.
//!
//! Seed files are loosely structured JSON, so every candidate record is
//! inspected field by field before it is allowed anywhere near storage. A
//! failing record is reported with a [`RecordError`] and the caller skips it.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::types::DbId;

/// A theater candidate that passed structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterSeed {
    /// Caller-supplied id; `None` means one is generated at insert time.
    pub id: Option<DbId>,
    pub name: String,
    pub brand: String,
    pub location: String,
    pub operating_hours: String,
}

/// A movie candidate that passed structural and reference checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSeed {
    pub id: Option<DbId>,
    pub title: String,
    pub distributor: String,
    pub ticket_price: i64,
    pub runtime_minutes: i64,
    pub genre: String,
    pub theater_id: DbId,
}

/// Why a single seed record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("field `{0}` must be a string")]
    NotAString(&'static str),

    #[error("field `{0}` must be a non-negative integer")]
    InvalidInteger(&'static str),

    #[error("theater_id `{0}` does not reference a known theater")]
    UnknownTheater(String),
}

/// Validate a raw theater record.
pub fn parse_theater(value: &Value) -> Result<TheaterSeed, RecordError> {
    let obj = value.as_object().ok_or(RecordError::NotAnObject)?;
    Ok(TheaterSeed {
        id: optional_id(obj)?,
        name: required_str(obj, "name")?,
        brand: required_str(obj, "brand")?,
        location: required_str(obj, "location")?,
        operating_hours: required_str(obj, "operating_hours")?,
    })
}

/// Validate a raw movie record against the set of theater ids visible to
/// the current seed run.
///
/// The theater reference is checked first so dangling records are reported
/// as such even when they are also incomplete.
pub fn parse_movie(value: &Value, known_theaters: &HashSet<DbId>) -> Result<MovieSeed, RecordError> {
    let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

    let theater_id = match obj.get("theater_id") {
        Some(Value::String(id)) if known_theaters.contains(id) => id.clone(),
        Some(Value::String(id)) => return Err(RecordError::UnknownTheater(id.clone())),
        Some(Value::Null) | None => return Err(RecordError::MissingField("theater_id")),
        Some(_) => return Err(RecordError::NotAString("theater_id")),
    };

    Ok(MovieSeed {
        id: optional_id(obj)?,
        title: required_str(obj, "title")?,
        distributor: required_str(obj, "distributor")?,
        ticket_price: non_negative_int(obj, "ticket_price")?,
        runtime_minutes: non_negative_int(obj, "runtime_minutes")?,
        genre: required_str(obj, "genre")?,
        theater_id,
    })
}

/// Best-effort human label for log lines about a record.
pub fn record_label<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("unknown")
}

/// Pick the item for position `index`, cycling through `items`.
///
/// Returns `None` only when `items` is empty.
pub fn round_robin<T>(items: &[T], index: usize) -> Option<&T> {
    if items.is_empty() {
        None
    } else {
        items.get(index % items.len())
    }
}

fn optional_id(obj: &Map<String, Value>) -> Result<Option<DbId>, RecordError> {
    match obj.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RecordError::NotAString("id")),
    }
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(RecordError::EmptyField(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(RecordError::NotAString(field)),
    }
}

fn non_negative_int(obj: &Map<String, Value>, field: &'static str) -> Result<i64, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(v) => v
            .as_i64()
            .filter(|n| *n >= 0)
            .ok_or(RecordError::InvalidInteger(field)),
    }
}
