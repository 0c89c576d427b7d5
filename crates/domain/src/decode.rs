// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Decoding of the availability feed.
//!
//! The document is first parsed into a `serde_json::Value`, then walked by
//! hand so that every structural position (root, `Structures`, each
//! facility, each level) must be the JSON kind the feed promises. Scalar
//! fields inside an object are mapped with serde.
//!
//! ## Invariants
//!
//! - `Structures` is required and must be an array
//! - Every facility and level entry must be an object
//! - Missing or `null` scalar fields become `None`; missing or `null`
//!   `Levels` becomes an empty list
//! - A field of the wrong type fails the whole document

use crate::error::DecodeError;
use crate::types::{Level, Response, Structure};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;

const STRUCTURES_KEY: &str = "Structures";

/// Wire shape of a facility object.
#[derive(Debug, Deserialize)]
struct StructureRecord {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "CurrentCount")]
    current_count: Option<i64>,
    #[serde(rename = "Capacity")]
    capacity: Option<i64>,
    #[serde(rename = "Timestamp")]
    timestamp: Option<String>,
    #[serde(rename = "Levels")]
    levels: Option<Vec<Value>>,
}

/// Wire shape of a level object.
#[derive(Debug, Deserialize)]
struct LevelRecord {
    #[serde(rename = "FriendlyName")]
    friendly_name: Option<String>,
    #[serde(rename = "CurrentCount")]
    current_count: Option<i64>,
    #[serde(rename = "Capacity")]
    capacity: Option<i64>,
}

impl From<LevelRecord> for Level {
    fn from(record: LevelRecord) -> Self {
        Self::new(record.friendly_name, record.current_count, record.capacity)
    }
}

/// Decodes an availability document, stamping it with the current time.
///
/// # Errors
///
/// Returns a `DecodeError` if the document is not JSON or does not have
/// the feed's shape.
pub fn decode(document: &str) -> Result<Response, DecodeError> {
    decode_at(document, Utc::now())
}

/// Decodes an availability document with an explicit capture time.
///
/// # Errors
///
/// Returns a `DecodeError` if the document is not JSON or does not have
/// the feed's shape.
pub fn decode_at(document: &str, captured_at: DateTime<Utc>) -> Result<Response, DecodeError> {
    let value: Value = serde_json::from_str(document)?;
    response_from_value(value, captured_at)
}

/// Decodes an availability document from raw bytes.
///
/// # Errors
///
/// Returns a `DecodeError` if the bytes are not JSON or do not have the
/// feed's shape.
pub fn decode_slice(bytes: &[u8]) -> Result<Response, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    response_from_value(value, Utc::now())
}

/// Decodes an availability document from a reader.
///
/// # Errors
///
/// Returns `DecodeError::Io` if reading fails, otherwise as [`decode`].
pub fn decode_reader<R: Read>(reader: R) -> Result<Response, DecodeError> {
    let value: Value = serde_json::from_reader(reader)?;
    response_from_value(value, Utc::now())
}

/// Decodes an already-parsed JSON value.
///
/// # Errors
///
/// Returns a `DecodeError` if the value does not have the feed's shape.
pub fn decode_value(value: Value) -> Result<Response, DecodeError> {
    response_from_value(value, Utc::now())
}

fn response_from_value(value: Value, captured_at: DateTime<Utc>) -> Result<Response, DecodeError> {
    let mut root = expect_object(value, "$")?;

    let entries = match root.remove(STRUCTURES_KEY) {
        None | Some(Value::Null) => {
            return Err(DecodeError::MissingField {
                location: String::from("$"),
                field: STRUCTURES_KEY,
            });
        }
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(DecodeError::UnexpectedType {
                location: format!("$.{STRUCTURES_KEY}"),
                expected: "array",
                found: json_kind(&other),
            });
        }
    };

    let structures = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_structure(entry, &format!("$.{STRUCTURES_KEY}[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        structures = structures.len(),
        %captured_at,
        "Decoded availability response"
    );

    Ok(Response::new(structures, captured_at))
}

fn decode_structure(entry: Value, location: &str) -> Result<Structure, DecodeError> {
    let object = expect_object(entry, location)?;
    let record: StructureRecord = serde_json::from_value(Value::Object(object))
        .map_err(|err| DecodeError::invalid_field(location, &err))?;

    let raw_levels = record
        .levels
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_level(entry, &format!("{location}.Levels[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Structure::new(
        record.name,
        record.current_count,
        record.capacity,
        record.timestamp,
        raw_levels,
    ))
}

fn decode_level(entry: Value, location: &str) -> Result<Level, DecodeError> {
    let object = expect_object(entry, location)?;
    serde_json::from_value::<LevelRecord>(Value::Object(object))
        .map(Level::from)
        .map_err(|err| DecodeError::invalid_field(location, &err))
}

fn expect_object(value: Value, location: &str) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(DecodeError::UnexpectedType {
            location: location.to_string(),
            expected: "object",
            found: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
