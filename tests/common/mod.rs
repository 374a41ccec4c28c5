// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use firecodec::FieldContainer;
use serde_json::{json, Value};

// ============================================================================
// Fixtures
// ============================================================================

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load and parse a JSON fixture.
pub fn load_fixture(name: &str) -> Value {
    let text = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("Fixture {name} is not JSON: {e}"))
}

/// Snapshot under `key` ("value" or "oldValue") of a change event fixture.
pub fn event_snapshot(name: &str, key: &str) -> FieldContainer {
    let event = load_fixture(name);
    let snapshot = event
        .get(key)
        .cloned()
        .unwrap_or_else(|| panic!("Fixture {name} has no '{key}' snapshot"));
    serde_json::from_value(snapshot).expect("snapshot deserializes")
}

// ============================================================================
// Wire builders
// ============================================================================

pub fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

pub fn integer_value(i: i64) -> Value {
    json!({ "integerValue": i.to_string() })
}

pub fn map_value(fields: Value) -> Value {
    json!({ "mapValue": { "fields": fields } })
}

pub fn array_value(values: Vec<Value>) -> Value {
    json!({ "arrayValue": { "values": values } })
}

/// Container holding a single field.
pub fn container_with(name: &str, value: Value) -> FieldContainer {
    let mut fields = serde_json::Map::new();
    fields.insert(name.to_string(), value);
    FieldContainer::new(Value::Object(fields))
}
