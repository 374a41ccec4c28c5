// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Firecodec
//!
//! Decoder for Firestore's self-describing, tagged JSON value format, as found
//! in document change-event payloads.
//!
//! Every value on the wire is wrapped in a single-key object naming its type
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, `{"mapValue": {"fields": ...}}`).
//! The library offers two ways to get native values out of such a tree:
//! - **Typed accessors** on [`FieldContainer`] extract one field as a requested
//!   type and fail with an [`ExtractionError`] on any mismatch
//! - **Flattening** via [`flatten`] strips every tag recursively and returns a
//!   plain [`DecodedMessage`], omitting anything it cannot decode
//!
//! ## Architecture
//!
//! - `core/` - Wire tags, the [`WireValue`] tagged union, decoded values and errors
//! - `accessor` - [`FieldContainer`] and its typed accessors
//! - `flatten` - Recursive tag stripping
//! - `config` - [`FlattenOptions`] and [`TimestampFormat`]
//!
//! JSON text parsing is left to `serde_json`; all operations work on an
//! already-parsed [`serde_json::Value`].
//!
//! ## Example
//!
//! ```
//! # fn main() -> firecodec::Result<()> {
//! use firecodec::{DecodedValue, FieldContainer};
//!
//! let doc = FieldContainer::from_json_str(
//!     r#"{"fields": {
//!         "title": {"stringValue": "hello"},
//!         "tags": {"arrayValue": {"values": [{"stringValue": "a"}, {"stringValue": "b"}]}}
//!     }}"#,
//! )?;
//!
//! assert_eq!(doc.get_string_array("tags")?, vec!["a", "b"]);
//!
//! let flat = doc.flatten();
//! assert_eq!(flat["title"], DecodedValue::from("hello"));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    DecodedMessage, DecodedValue, Error, ExtractResult, ExtractionError, Fields, GeoPoint,
    Result, ShapeError, Tag, WireValue,
};

// Options
pub mod config;

pub use config::{FlattenOptions, TimestampFormat};

// Typed accessors
pub mod accessor;

pub use accessor::FieldContainer;

// Flattening
pub mod flatten;

pub use flatten::flatten;
