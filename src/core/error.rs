// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for firecodec.
//!
//! Provides error types for decoding tagged values:
//! - [`ShapeError`] - a raw JSON value is not a well-formed tagged value
//! - [`ExtractionError`] - a typed accessor could not produce the requested type
//! - [`Error`] - crate-level error covering input parsing and configuration

use serde_json::Value;
use thiserror::Error as ThisError;

use super::Tag;

/// Reasons a raw JSON value is not a well-formed tagged value.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ShapeError {
    /// The value is not an object at all
    #[error("expected a tagged object, found {found}")]
    NotTagged {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// The object has no keys
    #[error("tagged object has no tag")]
    NoTag,

    /// The object has more than one key
    #[error("tagged object has {} tags: {}", .tags.len(), .tags.join(", "))]
    MultipleTags {
        /// Keys present on the object
        tags: Vec<String>,
    },

    /// The single key is not a known wire tag
    #[error("unknown tag '{tag}'")]
    UnknownTag {
        /// Key that was found
        tag: String,
    },

    /// A required key of the payload is absent
    #[error("{tag} payload is missing '{key}'")]
    MissingKey {
        /// Tag whose payload is incomplete
        tag: Tag,
        /// Missing key
        key: &'static str,
    },

    /// The payload has the wrong JSON shape for its tag
    #[error("bad {tag} payload: {reason}")]
    BadPayload {
        /// Tag whose payload is malformed
        tag: Tag,
        /// What was wrong
        reason: String,
    },
}

impl ShapeError {
    /// Create a bad payload error describing the expected and found JSON kinds.
    pub fn unexpected(tag: Tag, expected: &str, found: &Value) -> Self {
        ShapeError::BadPayload {
            tag,
            reason: format!("expected {expected}, found {}", json_kind(found)),
        }
    }
}

/// Errors raised by the typed field accessors.
///
/// Every variant carries the requested field name and the full raw container,
/// so that drift in the wire format can be diagnosed from the error alone.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum ExtractionError {
    /// The container has no field with this name
    #[error("field '{field}' not found in {fields}")]
    MissingField {
        /// Requested field name
        field: String,
        /// Raw container contents
        fields: Value,
    },

    /// The field is not a well-formed tagged value
    #[error("field '{field}' is malformed ({reason}) in {fields}")]
    Malformed {
        /// Requested field name
        field: String,
        /// Why the value could not be decoded
        #[source]
        reason: ShapeError,
        /// Raw container contents
        fields: Value,
    },

    /// The field carries a different tag than requested
    #[error("field '{field}' is tagged '{found}', expected '{expected}' in {fields}")]
    TagMismatch {
        /// Requested field name
        field: String,
        /// Tag the accessor expects
        expected: Tag,
        /// Tag present on the wire
        found: Tag,
        /// Raw container contents
        fields: Value,
    },

    /// The payload has the right tag but does not convert to the native type
    #[error("field '{field}' could not be read as {expected}: {reason} in {fields}")]
    InvalidPayload {
        /// Requested field name
        field: String,
        /// Native type that was requested
        expected: &'static str,
        /// Conversion failure
        reason: String,
        /// Raw container contents
        fields: Value,
    },
}

impl ExtractionError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>, fields: &Value) -> Self {
        ExtractionError::MissingField {
            field: field.into(),
            fields: fields.clone(),
        }
    }

    /// Create a malformed field error.
    pub fn malformed(field: impl Into<String>, reason: ShapeError, fields: &Value) -> Self {
        ExtractionError::Malformed {
            field: field.into(),
            reason,
            fields: fields.clone(),
        }
    }

    /// Create a tag mismatch error.
    pub fn tag_mismatch(
        field: impl Into<String>,
        expected: Tag,
        found: Tag,
        fields: &Value,
    ) -> Self {
        ExtractionError::TagMismatch {
            field: field.into(),
            expected,
            found,
            fields: fields.clone(),
        }
    }

    /// Create an invalid payload error.
    pub fn invalid_payload(
        field: impl Into<String>,
        expected: &'static str,
        reason: impl Into<String>,
        fields: &Value,
    ) -> Self {
        ExtractionError::InvalidPayload {
            field: field.into(),
            expected,
            reason: reason.into(),
            fields: fields.clone(),
        }
    }

    /// Name of the field the accessor was asked for.
    pub fn field(&self) -> &str {
        match self {
            ExtractionError::MissingField { field, .. }
            | ExtractionError::Malformed { field, .. }
            | ExtractionError::TagMismatch { field, .. }
            | ExtractionError::InvalidPayload { field, .. } => field,
        }
    }

    /// Raw container the accessor was reading from.
    pub fn fields(&self) -> &Value {
        match self {
            ExtractionError::MissingField { fields, .. }
            | ExtractionError::Malformed { fields, .. }
            | ExtractionError::TagMismatch { fields, .. }
            | ExtractionError::InvalidPayload { fields, .. } => fields,
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ExtractionError::MissingField { field, .. } => vec![("field", field.clone())],
            ExtractionError::Malformed { field, reason, .. } => {
                vec![("field", field.clone()), ("reason", reason.to_string())]
            }
            ExtractionError::TagMismatch {
                field,
                expected,
                found,
                ..
            } => vec![
                ("field", field.clone()),
                ("expected", expected.to_string()),
                ("found", found.to_string()),
            ],
            ExtractionError::InvalidPayload {
                field,
                expected,
                reason,
                ..
            } => vec![
                ("field", field.clone()),
                ("expected", expected.to_string()),
                ("reason", reason.clone()),
            ],
        }
    }
}

/// Errors that can occur at the crate boundary.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Input text is not valid JSON, or not a document snapshot
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Options could not be loaded
    #[error("invalid options: {0}")]
    Config(#[from] toml::de::Error),

    /// A typed accessor failed
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Result type for firecodec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for typed accessors.
pub type ExtractResult<T> = std::result::Result<T, ExtractionError>;

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_error() {
        let fields = json!({"other": {"stringValue": "x"}});
        let err = ExtractionError::missing_field("name", &fields);
        assert!(matches!(err, ExtractionError::MissingField { .. }));
        assert_eq!(
            err.to_string(),
            r#"field 'name' not found in {"other":{"stringValue":"x"}}"#
        );
        assert_eq!(err.field(), "name");
        assert_eq!(err.fields(), &fields);
    }

    #[test]
    fn test_tag_mismatch_error() {
        let fields = json!({"age": {"stringValue": "ten"}});
        let err = ExtractionError::tag_mismatch("age", Tag::Integer, Tag::String, &fields);
        assert_eq!(
            err.to_string(),
            r#"field 'age' is tagged 'stringValue', expected 'integerValue' in {"age":{"stringValue":"ten"}}"#
        );
    }

    #[test]
    fn test_malformed_error_exposes_source() {
        use std::error::Error as _;

        let fields = json!({"tags": {"arrayValue": {}}});
        let reason = ShapeError::MissingKey {
            tag: Tag::Array,
            key: "values",
        };
        let err = ExtractionError::malformed("tags", reason.clone(), &fields);
        assert!(err.to_string().contains("arrayValue payload is missing 'values'"));
        let source = err.source().expect("malformed carries a source");
        assert_eq!(source.to_string(), reason.to_string());
    }

    #[test]
    fn test_invalid_payload_error() {
        let fields = json!({"n": {"integerValue": "abc"}});
        let err = ExtractionError::invalid_payload("n", "integer", "invalid digit", &fields);
        assert_eq!(
            err.to_string(),
            r#"field 'n' could not be read as integer: invalid digit in {"n":{"integerValue":"abc"}}"#
        );
    }

    #[test]
    fn test_shape_error_messages() {
        assert_eq!(
            ShapeError::NotTagged { found: "string" }.to_string(),
            "expected a tagged object, found string"
        );
        assert_eq!(ShapeError::NoTag.to_string(), "tagged object has no tag");
        assert_eq!(
            ShapeError::MultipleTags {
                tags: vec!["stringValue".into(), "integerValue".into()]
            }
            .to_string(),
            "tagged object has 2 tags: stringValue, integerValue"
        );
        assert_eq!(
            ShapeError::UnknownTag {
                tag: "nullValue".into()
            }
            .to_string(),
            "unknown tag 'nullValue'"
        );
        assert_eq!(
            ShapeError::unexpected(Tag::Boolean, "boolean", &json!("yes")).to_string(),
            "bad booleanValue payload: expected boolean, found string"
        );
    }

    #[test]
    fn test_log_fields_tag_mismatch() {
        let err = ExtractionError::tag_mismatch("f", Tag::String, Tag::Map, &json!({}));
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], ("field", "f".to_string()));
        assert_eq!(fields[1], ("expected", "stringValue".to_string()));
        assert_eq!(fields[2], ("found", "mapValue".to_string()));
    }

    #[test]
    fn test_log_fields_invalid_payload() {
        let err = ExtractionError::invalid_payload("f", "integer", "overflow", &json!({}));
        let fields = err.log_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1], ("expected", "integer".to_string()));
        assert_eq!(fields[2], ("reason", "overflow".to_string()));
    }

    #[test]
    fn test_extraction_error_converts_to_crate_error() {
        let err: Error = ExtractionError::missing_field("x", &json!({})).into();
        assert!(matches!(err, Error::Extraction(_)));
        assert_eq!(err.to_string(), "field 'x' not found in {}");
    }

    #[test]
    fn test_json_error_converts_to_crate_error() {
        let parse_err = serde_json::from_str::<Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.to_string().starts_with("JSON parse error:"));
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
