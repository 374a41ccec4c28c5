// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Tagged wire values.
//!
//! A Firestore value on the wire is a JSON object with exactly one tag key
//! whose payload shape depends on the tag:
//!
//! ```text
//! {"stringValue": "x"}
//! {"integerValue": "42"}
//! {"geoPointValue": {"latitude": 1.0, "longitude": 2.0}}
//! {"mapValue": {"fields": {"a": {"stringValue": "x"}}}}
//! {"arrayValue": {"values": [{"integerValue": "1"}]}}
//! ```
//!
//! [`WireValue::from_json`] decodes one level of that tree in a single match.
//! Nested maps and arrays borrow their children so callers decide per child
//! how to handle malformed entries.

use serde_json::{Map, Value};

use super::error::{json_kind, ShapeError};
use super::{GeoPoint, Tag};

/// Borrowed view of a field container (`fields` of a document or a `mapValue`).
///
/// A missing or non-object container reads as empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    /// View an object's entries as fields.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self(Some(map))
    }

    /// An empty container.
    pub fn empty() -> Self {
        Self(None)
    }

    /// View any JSON value as a container. Non-objects are empty.
    pub fn from_value(value: &'a Value) -> Self {
        Self(value.as_object())
    }

    /// Look up a raw field by name.
    pub fn get(self, name: &str) -> Option<&'a Value> {
        self.0.and_then(|map| map.get(name))
    }

    /// Iterate over `(name, raw value)` pairs.
    pub fn iter(self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.0.into_iter().flat_map(|map| map.iter())
    }

    /// Number of fields in the container.
    pub fn len(self) -> usize {
        self.0.map_or(0, Map::len)
    }

    /// Check whether the container has no fields.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// One decoded level of a tagged value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WireValue<'a> {
    String(&'a str),
    /// Still string-encoded; parse with [`str::parse`].
    Integer(&'a str),
    Double(f64),
    Boolean(bool),
    GeoPoint(GeoPoint),
    /// Still string-encoded; see [`crate::TimestampFormat`].
    Timestamp(&'a str),
    Map(Fields<'a>),
    /// Raw elements of `values`, each itself a tagged value.
    Array(&'a [Value]),
}

impl<'a> WireValue<'a> {
    /// Decode a tagged object.
    pub fn from_json(value: &'a Value) -> Result<Self, ShapeError> {
        let Value::Object(entry) = value else {
            return Err(ShapeError::NotTagged {
                found: json_kind(value),
            });
        };

        let mut entries = entry.iter();
        let (key, payload) = match (entries.next(), entries.next()) {
            (Some(first), None) => first,
            (None, _) => return Err(ShapeError::NoTag),
            (Some(_), Some(_)) => {
                return Err(ShapeError::MultipleTags {
                    tags: entry.keys().cloned().collect(),
                })
            }
        };

        let tag = key
            .parse::<Tag>()
            .map_err(|e| ShapeError::UnknownTag {
                tag: e.tag().to_string(),
            })?;
        Self::from_payload(tag, payload)
    }

    /// Decode the payload found under `tag`.
    pub fn from_payload(tag: Tag, payload: &'a Value) -> Result<Self, ShapeError> {
        let value = match tag {
            Tag::String => WireValue::String(string_payload(tag, payload)?),
            Tag::Integer => WireValue::Integer(string_payload(tag, payload)?),
            Tag::Timestamp => WireValue::Timestamp(string_payload(tag, payload)?),
            Tag::Double => WireValue::Double(double_payload(payload)?),
            Tag::Boolean => WireValue::Boolean(
                payload
                    .as_bool()
                    .ok_or_else(|| ShapeError::unexpected(tag, "boolean", payload))?,
            ),
            Tag::GeoPoint => WireValue::GeoPoint(geo_point_payload(payload)?),
            Tag::Map => WireValue::Map(map_payload(payload)?),
            Tag::Array => WireValue::Array(array_payload(payload)?),
        };
        Ok(value)
    }

    /// The tag this value was decoded from.
    pub fn tag(&self) -> Tag {
        match self {
            WireValue::String(_) => Tag::String,
            WireValue::Integer(_) => Tag::Integer,
            WireValue::Double(_) => Tag::Double,
            WireValue::Boolean(_) => Tag::Boolean,
            WireValue::GeoPoint(_) => Tag::GeoPoint,
            WireValue::Timestamp(_) => Tag::Timestamp,
            WireValue::Map(_) => Tag::Map,
            WireValue::Array(_) => Tag::Array,
        }
    }
}

fn string_payload(tag: Tag, payload: &Value) -> Result<&str, ShapeError> {
    payload
        .as_str()
        .ok_or_else(|| ShapeError::unexpected(tag, "string", payload))
}

// Non-finite doubles use the proto3 JSON string spellings.
fn double_payload(payload: &Value) -> Result<f64, ShapeError> {
    match payload {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ShapeError::unexpected(Tag::Double, "number", payload)),
        Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            _ => Err(ShapeError::BadPayload {
                tag: Tag::Double,
                reason: format!("'{s}' is not a number"),
            }),
        },
        other => Err(ShapeError::unexpected(Tag::Double, "number", other)),
    }
}

fn geo_point_payload(payload: &Value) -> Result<GeoPoint, ShapeError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ShapeError::unexpected(Tag::GeoPoint, "object", payload))?;

    let coordinate = |key: &'static str| match obj.get(key) {
        None => Err(ShapeError::MissingKey {
            tag: Tag::GeoPoint,
            key,
        }),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| ShapeError::unexpected(Tag::GeoPoint, "numeric coordinate", value)),
    };

    Ok(GeoPoint::new(coordinate("latitude")?, coordinate("longitude")?))
}

fn map_payload(payload: &Value) -> Result<Fields<'_>, ShapeError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ShapeError::unexpected(Tag::Map, "object", payload))?;

    match obj.get("fields") {
        None | Some(Value::Null) => Ok(Fields::empty()),
        Some(Value::Object(fields)) => Ok(Fields::new(fields)),
        Some(other) => Err(ShapeError::unexpected(Tag::Map, "object under 'fields'", other)),
    }
}

fn array_payload(payload: &Value) -> Result<&[Value], ShapeError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| ShapeError::unexpected(Tag::Array, "object", payload))?;

    match obj.get("values") {
        Some(Value::Array(values)) => Ok(values.as_slice()),
        Some(other) => Err(ShapeError::unexpected(Tag::Array, "array under 'values'", other)),
        None => Err(ShapeError::MissingKey {
            tag: Tag::Array,
            key: "values",
        }),
    }
}
