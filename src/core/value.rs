// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded value type system.
//!
//! Provides the tag-free value representation produced by flattening a
//! Firestore field container, and the plain [`GeoPoint`] pair.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Type alias for a flattened document as field name -> value mapping.
pub type DecodedMessage = BTreeMap<String, DecodedValue>;

/// A latitude/longitude pair, the decoded form of `geoPointValue`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees latitude
    pub latitude: f64,
    /// Degrees longitude
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new geo point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Native value recovered from a tagged wire value.
///
/// Serializes untagged, so a [`DecodedMessage`] turns back into plain JSON
/// with timestamps rendered as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    // String (UTF-8)
    String(String),

    // Parsed from the string-encoded `integerValue`
    Int64(i64),

    Float64(f64),

    Bool(bool),

    // Parsed `timestampValue`, always UTC
    Timestamp(DateTime<Utc>),

    // Nested `mapValue`
    Map(DecodedMessage),

    // `arrayValue` elements, in wire order
    Array(Vec<DecodedValue>),

    /// Untouched wire payload of an array element that was not flattened.
    ///
    /// Only produced when map flattening inside arrays is disabled.
    Raw(serde_json::Value),
}

impl DecodedValue {
    /// Check if this value is a container type (array or map).
    pub fn is_container(&self) -> bool {
        matches!(self, DecodedValue::Array(_) | DecodedValue::Map(_))
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DecodedValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DecodedValue::Int64(v) => Some(*v as f64),
            DecodedValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the inner boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the inner timestamp.
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            DecodedValue::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get the inner map.
    pub fn as_map(&self) -> Option<&DecodedMessage> {
        match self {
            DecodedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[DecodedValue]> {
        match self {
            DecodedValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            DecodedValue::String(_) => "string",
            DecodedValue::Int64(_) => "int64",
            DecodedValue::Float64(_) => "float64",
            DecodedValue::Bool(_) => "bool",
            DecodedValue::Timestamp(_) => "timestamp",
            DecodedValue::Map(_) => "map",
            DecodedValue::Array(_) => "array",
            DecodedValue::Raw(_) => "raw",
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::String(v) => write!(f, "\"{v}\""),
            DecodedValue::Int64(v) => write!(f, "{v}"),
            DecodedValue::Float64(v) => write!(f, "{v}"),
            DecodedValue::Bool(v) => write!(f, "{v}"),
            DecodedValue::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            DecodedValue::Map(v) => write!(f, "{{{} fields}}", v.len()),
            DecodedValue::Array(v) => write!(f, "[{} elements]", v.len()),
            DecodedValue::Raw(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for DecodedValue {
    fn from(value: &str) -> Self {
        DecodedValue::String(value.to_string())
    }
}

impl From<String> for DecodedValue {
    fn from(value: String) -> Self {
        DecodedValue::String(value)
    }
}

impl From<i64> for DecodedValue {
    fn from(value: i64) -> Self {
        DecodedValue::Int64(value)
    }
}

impl From<f64> for DecodedValue {
    fn from(value: f64) -> Self {
        DecodedValue::Float64(value)
    }
}

impl From<bool> for DecodedValue {
    fn from(value: bool) -> Self {
        DecodedValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for DecodedValue {
    fn from(value: DateTime<Utc>) -> Self {
        DecodedValue::Timestamp(value)
    }
}
