// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{capture_time, sample_document};
use crate::{DecodeError, Level, decode, decode_at, decode_reader, decode_slice, decode_value};
use serde_json::json;

#[test]
fn test_decode_sample_document() {
    let document = sample_document().to_string();
    let response = decode_at(&document, capture_time()).unwrap();

    assert_eq!(response.captured_at(), capture_time());
    assert_eq!(response.structures().len(), 2);

    let north = &response.structures()[0];
    assert_eq!(north.name(), Some("North Garage"));
    assert_eq!(north.available_count(), Some(120));
    assert_eq!(north.total_capacity(), Some(800));
    assert_eq!(north.last_updated_raw(), Some("/Date(1700000000)/"));
    assert_eq!(north.raw_levels().len(), 3);
    assert_eq!(
        north.levels(),
        &[
            Level::new(Some(String::from("Level 1")), Some(20), Some(200)),
            Level::new(Some(String::from("Level 2")), Some(100), Some(600)),
        ]
    );
}

#[test]
fn test_decode_preserves_structure_order() {
    let document = json!({
        "Structures": [
            { "Name": "C" },
            { "Name": "A" },
            { "Name": "B" }
        ]
    })
    .to_string();

    let response = decode(&document).unwrap();
    let names: Vec<_> = response
        .structures()
        .iter()
        .map(|structure| structure.name().unwrap())
        .collect();

    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn test_decode_empty_structures() {
    let response = decode(r#"{ "Structures": [] }"#).unwrap();
    assert!(response.structures().is_empty());
}

#[test]
fn test_decode_null_and_missing_fields_are_unset() {
    let response = decode_at(&sample_document().to_string(), capture_time()).unwrap();
    let library = &response.structures()[1];

    assert_eq!(library.available_count(), None);
    assert_eq!(library.total_capacity(), None);
    assert_eq!(library.raw_levels(), &[Level::new(Some(String::from("Total")), None, None)]);
    assert!(library.levels().is_empty());
}

#[test]
fn test_decode_missing_fields_are_not_zero() {
    let response = decode(r#"{ "Structures": [ {} ] }"#).unwrap();
    let structure = &response.structures()[0];

    assert_eq!(structure.name(), None);
    assert_eq!(structure.available_count(), None);
    assert_eq!(structure.total_capacity(), None);
    assert_eq!(structure.last_updated_raw(), None);
    assert!(structure.raw_levels().is_empty());
}

#[test]
fn test_decode_null_levels_is_empty() {
    let response = decode(r#"{ "Structures": [ { "Levels": null } ] }"#).unwrap();
    assert!(response.structures()[0].raw_levels().is_empty());
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let document = json!({
        "Structures": [
            { "Name": "East", "StructureId": 7, "Levels": [ { "FriendlyName": "Total", "Id": 1 } ] }
        ],
        "Version": "2"
    })
    .to_string();

    let response = decode(&document).unwrap();
    assert_eq!(response.structures()[0].name(), Some("East"));
}

#[test]
fn test_decode_structures_as_string_fails() {
    let result = decode(r#"{ "Structures": "oops" }"#);

    assert_eq!(
        result,
        Err(DecodeError::UnexpectedType {
            location: String::from("$.Structures"),
            expected: "array",
            found: "string",
        })
    );
}

#[test]
fn test_decode_missing_structures_fails() {
    let result = decode(r#"{ "Facilities": [] }"#);

    assert_eq!(
        result,
        Err(DecodeError::MissingField {
            location: String::from("$"),
            field: "Structures",
        })
    );
}

#[test]
fn test_decode_null_structures_fails() {
    let result = decode(r#"{ "Structures": null }"#);
    assert!(matches!(result, Err(DecodeError::MissingField { .. })));
}

#[test]
fn test_decode_root_not_object_fails() {
    let result = decode("[1, 2, 3]");

    assert_eq!(
        result,
        Err(DecodeError::UnexpectedType {
            location: String::from("$"),
            expected: "object",
            found: "array",
        })
    );
}

#[test]
fn test_decode_structure_entry_not_object_fails() {
    let result = decode(r#"{ "Structures": [ { "Name": "A" }, ["B", 1, 2] ] }"#);

    assert_eq!(
        result,
        Err(DecodeError::UnexpectedType {
            location: String::from("$.Structures[1]"),
            expected: "object",
            found: "array",
        })
    );
}

#[test]
fn test_decode_level_entry_not_object_fails() {
    let result = decode(r#"{ "Structures": [ { "Levels": [ {}, 42 ] } ] }"#);

    assert_eq!(
        result,
        Err(DecodeError::UnexpectedType {
            location: String::from("$.Structures[0].Levels[1]"),
            expected: "object",
            found: "number",
        })
    );
}

#[test]
fn test_decode_wrong_field_type_fails() {
    let result = decode(r#"{ "Structures": [ { "CurrentCount": "12" } ] }"#);

    match result {
        Err(DecodeError::InvalidField { location, message }) => {
            assert_eq!(location, "$.Structures[0]");
            assert!(message.contains("invalid type"));
        }
        other => panic!("Expected InvalidField, got {other:?}"),
    }
}

#[test]
fn test_decode_numeric_timestamp_fails() {
    let result = decode(r#"{ "Structures": [ { "Name": "A", "Timestamp": 1700000000 } ] }"#);

    match result {
        Err(DecodeError::InvalidField { location, message }) => {
            assert_eq!(location, "$.Structures[0]");
            assert!(message.contains("expected a string"));
        }
        other => panic!("Expected InvalidField, got {other:?}"),
    }
}

#[test]
fn test_decode_wrong_level_field_type_fails() {
    let result = decode(r#"{ "Structures": [ { "Levels": [ { "Capacity": 1.5 } ] } ] }"#);

    assert!(matches!(
        result,
        Err(DecodeError::InvalidField { ref location, .. }) if location == "$.Structures[0].Levels[0]"
    ));
}

#[test]
fn test_decode_levels_not_array_fails() {
    let result = decode(r#"{ "Structures": [ { "Levels": {} } ] }"#);
    assert!(matches!(result, Err(DecodeError::InvalidField { .. })));
}

#[test]
fn test_decode_malformed_json_fails() {
    let result = decode(r#"{ "Structures": [ "#);
    assert!(matches!(result, Err(DecodeError::Syntax { line: 1, .. })));
}

#[test]
fn test_decode_slice_and_reader_agree() {
    let document = sample_document().to_string();

    let from_slice = decode_slice(document.as_bytes()).unwrap();
    let from_reader = decode_reader(document.as_bytes()).unwrap();

    assert_eq!(from_slice.structures(), from_reader.structures());
}

#[test]
fn test_decode_value() {
    let response = decode_value(sample_document()).unwrap();
    assert_eq!(response.structures().len(), 2);
}
