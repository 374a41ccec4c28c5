// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tag-stripping flattener.
//!
//! Converts a whole field container into a [`DecodedMessage`], descending
//! into maps and arrays. Flattening is best-effort: a field that cannot be
//! decoded (unknown tags, malformed payloads, unparseable timestamps, geo
//! points) is left out of the result and logged at debug level. Callers that
//! rely on a field being present must check for it.
//!
//! Arrays keep one entry per wire element. An element without a typed
//! conversion is kept as [`DecodedValue::Raw`] of its payload, so indices
//! still line up with the source.
//!
//! ## Example
//!
//! ```
//! use firecodec::{flatten, DecodedValue, FlattenOptions};
//! use serde_json::json;
//!
//! let fields = json!({
//!     "user": {"mapValue": {"fields": {"name": {"stringValue": "ada"}}}},
//!     "visits": {"integerValue": "3"},
//! });
//! let flat = flatten(&fields, &FlattenOptions::default());
//! assert_eq!(flat["visits"], DecodedValue::Int64(3));
//! assert_eq!(flat["user"].as_map().unwrap()["name"], DecodedValue::from("ada"));
//! ```

use serde_json::Value;
use tracing::debug;

use crate::config::FlattenOptions;
use crate::core::{DecodedMessage, DecodedValue, Fields, WireValue};

/// Flatten a `fields` object into plain values.
///
/// Non-object input (including `null`) yields an empty message.
pub fn flatten(fields: &Value, options: &FlattenOptions) -> DecodedMessage {
    flatten_fields(Fields::from_value(fields), options)
}

fn flatten_fields(fields: Fields<'_>, options: &FlattenOptions) -> DecodedMessage {
    let mut flat = DecodedMessage::new();

    for (name, raw) in fields.iter() {
        let wire = match WireValue::from_json(raw) {
            Ok(wire) => wire,
            Err(reason) => {
                debug!(field = %name, %reason, "omitting malformed field");
                continue;
            }
        };

        if let Some(value) = decode_value(name, wire, options) {
            flat.insert(name.clone(), value);
        }
    }

    flat
}

fn decode_value(
    name: &str,
    wire: WireValue<'_>,
    options: &FlattenOptions,
) -> Option<DecodedValue> {
    match wire {
        WireValue::String(s) => Some(DecodedValue::String(s.to_string())),
        WireValue::Integer(s) => match s.parse::<i64>() {
            Ok(i) => Some(DecodedValue::Int64(i)),
            Err(e) => {
                debug!(field = name, payload = s, error = %e, "keeping unparseable integer as string");
                Some(DecodedValue::String(s.to_string()))
            }
        },
        WireValue::Double(d) => Some(DecodedValue::Float64(d)),
        WireValue::Boolean(b) => Some(DecodedValue::Bool(b)),
        WireValue::Timestamp(s) => match options.timestamp_format.parse(s) {
            Ok(ts) => Some(DecodedValue::Timestamp(ts)),
            Err(e) => {
                debug!(field = name, payload = s, error = %e, "unparseable timestamp");
                None
            }
        },
        WireValue::GeoPoint(_) => {
            debug!(field = name, "geo point has no flattened form");
            None
        }
        WireValue::Map(fields) => Some(DecodedValue::Map(flatten_fields(fields, options))),
        WireValue::Array(values) => {
            Some(DecodedValue::Array(flatten_array(name, values, options)))
        }
    }
}

fn flatten_array(name: &str, values: &[Value], options: &FlattenOptions) -> Vec<DecodedValue> {
    values
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let decoded = match WireValue::from_json(element) {
                Ok(WireValue::Map(_)) if !options.flatten_array_maps => None,
                Ok(wire) => decode_value(name, wire, options),
                Err(reason) => {
                    debug!(field = name, index, %reason, "keeping malformed array element raw");
                    None
                }
            };
            decoded.unwrap_or_else(|| DecodedValue::Raw(element_payload(element).clone()))
        })
        .collect()
}

/// Payload under an element's single key, or the element itself when it
/// does not have exactly one key.
fn element_payload(element: &Value) -> &Value {
    element
        .as_object()
        .filter(|map| map.len() == 1)
        .and_then(|map| map.values().next())
        .unwrap_or(element)
}
