// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed field accessors.
//!
//! [`FieldContainer`] wraps the `fields` object of a document snapshot and
//! extracts single fields as a requested native type. Lookup is two-stage:
//! the field is first resolved to a [`WireValue`], then its tag is checked
//! against the requested type. Any mismatch is an [`ExtractionError`].
//!
//! ## Example
//!
//! ```
//! # fn main() -> firecodec::Result<()> {
//! use firecodec::FieldContainer;
//!
//! let doc = FieldContainer::from_json_str(
//!     r#"{"fields": {"name": {"stringValue": "ada"}, "age": {"integerValue": "36"}}}"#,
//! )?;
//! assert_eq!(doc.get_string_value("name")?, "ada");
//! assert_eq!(doc.get_integer_value("age")?, 36);
//! assert!(doc.get_integer_value("name").is_err());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::{FlattenOptions, TimestampFormat};
use crate::core::{
    DecodedMessage, ExtractResult, ExtractionError, Fields, GeoPoint, Result, Tag, WireValue,
};
use crate::flatten::flatten;

/// The fields of a document snapshot: field name -> tagged value.
///
/// Deserializes from a snapshot object (`{"fields": {...}, ...}`); other
/// snapshot keys such as `name` or `updateTime` are ignored. A snapshot
/// without `fields` is an empty container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldContainer {
    #[serde(default)]
    fields: Value,
}

impl From<Value> for FieldContainer {
    fn from(fields: Value) -> Self {
        Self::new(fields)
    }
}

impl FieldContainer {
    /// Wrap an already-parsed `fields` object.
    pub fn new(fields: Value) -> Self {
        Self { fields }
    }

    /// Parse a document snapshot from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document snapshot from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// The raw `fields` value.
    pub fn fields(&self) -> &Value {
        &self.fields
    }

    /// Check whether a field with this name is present, whatever its tag.
    pub fn contains(&self, name: &str) -> bool {
        Fields::from_value(&self.fields).get(name).is_some()
    }

    /// Flatten every field with the default options.
    pub fn flatten(&self) -> DecodedMessage {
        flatten(&self.fields, &FlattenOptions::default())
    }

    /// Flatten every field with the given options.
    pub fn flatten_with(&self, options: &FlattenOptions) -> DecodedMessage {
        flatten(&self.fields, options)
    }

    /// Extract a `stringValue` field.
    pub fn get_string_value(&self, name: &str) -> ExtractResult<String> {
        match self.lookup(name)? {
            WireValue::String(s) => Ok(s.to_string()),
            other => Err(self.mismatch(name, Tag::String, &other)),
        }
    }

    /// Extract an `integerValue` field, parsing its string encoding.
    pub fn get_integer_value(&self, name: &str) -> ExtractResult<i64> {
        match self.lookup(name)? {
            WireValue::Integer(s) => s.parse::<i64>().map_err(|e| {
                self.reject(ExtractionError::invalid_payload(
                    name,
                    "integer",
                    format!("'{s}': {e}"),
                    &self.fields,
                ))
            }),
            other => Err(self.mismatch(name, Tag::Integer, &other)),
        }
    }

    /// Extract a `doubleValue` field.
    pub fn get_double_value(&self, name: &str) -> ExtractResult<f64> {
        match self.lookup(name)? {
            WireValue::Double(d) => Ok(d),
            other => Err(self.mismatch(name, Tag::Double, &other)),
        }
    }

    /// Extract a `booleanValue` field.
    pub fn get_boolean_value(&self, name: &str) -> ExtractResult<bool> {
        match self.lookup(name)? {
            WireValue::Boolean(b) => Ok(b),
            other => Err(self.mismatch(name, Tag::Boolean, &other)),
        }
    }

    /// Extract a `geoPointValue` field. Both coordinates must be present.
    pub fn get_geo_point_value(&self, name: &str) -> ExtractResult<GeoPoint> {
        match self.lookup(name)? {
            WireValue::GeoPoint(point) => Ok(point),
            other => Err(self.mismatch(name, Tag::GeoPoint, &other)),
        }
    }

    /// Extract a `timestampValue` field in the default layout.
    pub fn get_timestamp_value(&self, name: &str) -> ExtractResult<DateTime<Utc>> {
        self.get_timestamp_value_with(name, TimestampFormat::default())
    }

    /// Extract a `timestampValue` field in the given layout.
    pub fn get_timestamp_value_with(
        &self,
        name: &str,
        format: TimestampFormat,
    ) -> ExtractResult<DateTime<Utc>> {
        match self.lookup(name)? {
            WireValue::Timestamp(s) => format.parse(s).map_err(|e| {
                self.reject(ExtractionError::invalid_payload(
                    name,
                    "timestamp",
                    format!("'{s}': {e}"),
                    &self.fields,
                ))
            }),
            other => Err(self.mismatch(name, Tag::Timestamp, &other)),
        }
    }

    /// Extract an `arrayValue` of `stringValue` elements.
    ///
    /// Elements that are not `stringValue` become empty strings rather than
    /// failing the call; each one is logged at debug level.
    pub fn get_string_array(&self, name: &str) -> ExtractResult<Vec<String>> {
        let values = self.array(name)?;
        let strings = values
            .iter()
            .enumerate()
            .map(|(index, element)| match WireValue::from_json(element) {
                Ok(WireValue::String(s)) => s.to_string(),
                other => {
                    debug!(field = name, index, element = ?other, "zero-valuing non-string array element");
                    String::new()
                }
            })
            .collect();
        Ok(strings)
    }

    /// Extract an `arrayValue` of `integerValue` elements.
    ///
    /// Elements that are not parseable `integerValue`s become `0` rather than
    /// failing the call; each one is logged at debug level.
    pub fn get_integer_array(&self, name: &str) -> ExtractResult<Vec<i64>> {
        let values = self.array(name)?;
        let integers = values
            .iter()
            .enumerate()
            .map(|(index, element)| {
                let parsed = match WireValue::from_json(element) {
                    Ok(WireValue::Integer(s)) => s.parse::<i64>().ok(),
                    _ => None,
                };
                parsed.unwrap_or_else(|| {
                    debug!(field = name, index, %element, "zero-valuing non-integer array element");
                    0
                })
            })
            .collect();
        Ok(integers)
    }

    fn array(&self, name: &str) -> ExtractResult<&[Value]> {
        match self.lookup(name)? {
            WireValue::Array(values) => Ok(values),
            other => Err(self.mismatch(name, Tag::Array, &other)),
        }
    }

    fn lookup(&self, name: &str) -> ExtractResult<WireValue<'_>> {
        let raw = Fields::from_value(&self.fields)
            .get(name)
            .ok_or_else(|| self.reject(ExtractionError::missing_field(name, &self.fields)))?;
        WireValue::from_json(raw)
            .map_err(|reason| self.reject(ExtractionError::malformed(name, reason, &self.fields)))
    }

    fn mismatch(&self, name: &str, expected: Tag, found: &WireValue<'_>) -> ExtractionError {
        self.reject(ExtractionError::tag_mismatch(
            name,
            expected,
            found.tag(),
            &self.fields,
        ))
    }

    fn reject(&self, err: ExtractionError) -> ExtractionError {
        debug!(details = ?err.log_fields(), "typed extraction failed");
        err
    }
}
