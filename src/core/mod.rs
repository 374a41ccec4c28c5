// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout firecodec.
//!
//! This module provides the foundational types for the library:
//! - [`Tag`] - Wire tag identifier (`stringValue`, `mapValue`, ...)
//! - [`WireValue`] - Tagged value decoded from the generic JSON tree
//! - [`DecodedValue`] - Tag-free value produced by flattening
//! - [`ExtractionError`] / [`ShapeError`] - Error handling

pub mod error;
pub mod value;
pub mod wire;

pub use error::{Error, ExtractResult, ExtractionError, Result, ShapeError};
pub use value::{DecodedMessage, DecodedValue, GeoPoint};
pub use wire::{Fields, WireValue};

use std::fmt;

/// Wire tag identifier.
///
/// Every tagged value on the wire is an object holding exactly one of these keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `stringValue`
    String,
    /// `integerValue` (string-encoded on the wire)
    Integer,
    /// `doubleValue`
    Double,
    /// `booleanValue`
    Boolean,
    /// `geoPointValue`
    GeoPoint,
    /// `timestampValue`
    Timestamp,
    /// `mapValue`
    Map,
    /// `arrayValue`
    Array,
}

/// Error returned when a key is not one of the known wire tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError {
    tag: String,
}

impl ParseTagError {
    /// The key that failed to parse.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown wire tag '{}'", self.tag)
    }
}

impl std::error::Error for ParseTagError {}

impl std::str::FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stringValue" => Ok(Tag::String),
            "integerValue" => Ok(Tag::Integer),
            "doubleValue" => Ok(Tag::Double),
            "booleanValue" => Ok(Tag::Boolean),
            "geoPointValue" => Ok(Tag::GeoPoint),
            "timestampValue" => Ok(Tag::Timestamp),
            "mapValue" => Ok(Tag::Map),
            "arrayValue" => Ok(Tag::Array),
            _ => Err(ParseTagError { tag: s.to_string() }),
        }
    }
}

impl Tag {
    /// All known tags, in wire documentation order.
    pub const ALL: [Tag; 8] = [
        Tag::String,
        Tag::Integer,
        Tag::Double,
        Tag::Boolean,
        Tag::GeoPoint,
        Tag::Timestamp,
        Tag::Map,
        Tag::Array,
    ];

    /// The key this tag uses on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::String => "stringValue",
            Tag::Integer => "integerValue",
            Tag::Double => "doubleValue",
            Tag::Boolean => "booleanValue",
            Tag::GeoPoint => "geoPointValue",
            Tag::Timestamp => "timestampValue",
            Tag::Map => "mapValue",
            Tag::Array => "arrayValue",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
