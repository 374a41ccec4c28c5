// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoding options.
//!
//! [`FlattenOptions`] collects the behaviors that changed across versions of
//! the event payload consumers, so callers can pin the one they depend on.
//! Options are plain serde types and can be embedded in a host's own config
//! or loaded from TOML:
//!
//! ```
//! # fn main() -> firecodec::Result<()> {
//! use firecodec::{FlattenOptions, TimestampFormat};
//!
//! let options = FlattenOptions::from_toml_str(
//!     r#"
//!     flatten_array_maps = false
//!     timestamp_format = "rfc3339"
//!     "#,
//! )?;
//! assert!(!options.flatten_array_maps);
//! assert_eq!(options.timestamp_format, TimestampFormat::Rfc3339);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// Accepted layout for `timestampValue` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Exactly `YYYY-MM-DDTHH:MM:SS.mmmZ`: three fractional digits, UTC.
    #[default]
    Millis,
    /// Any RFC 3339 timestamp, converted to UTC.
    Rfc3339,
}

impl TimestampFormat {
    /// strftime layout used by [`TimestampFormat::Millis`].
    pub const MILLIS_LAYOUT: &'static str = "%Y-%m-%dT%H:%M:%S.%3fZ";

    /// Parse a timestamp payload.
    pub fn parse(self, s: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
        match self {
            TimestampFormat::Millis => NaiveDateTime::parse_from_str(s, Self::MILLIS_LAYOUT)
                .map(|naive| Utc.from_utc_datetime(&naive)),
            TimestampFormat::Rfc3339 => {
                DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
            }
        }
    }
}

/// Options for flattening a field container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Whether `mapValue` elements inside arrays are flattened recursively.
    ///
    /// When disabled, such elements are kept as their raw wire payload.
    pub flatten_array_maps: bool,

    /// Layout accepted for `timestampValue` payloads
    pub timestamp_format: TimestampFormat,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            flatten_array_maps: true,
            timestamp_format: TimestampFormat::Millis,
        }
    }
}

impl FlattenOptions {
    /// Create options with the current default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the earlier behavior, where arrays were copied
    /// element by element without descending into maps.
    pub fn scalar_arrays() -> Self {
        Self::default().with_flatten_array_maps(false)
    }

    /// Set whether maps inside arrays are flattened.
    pub fn with_flatten_array_maps(mut self, enabled: bool) -> Self {
        self.flatten_array_maps = enabled;
        self
    }

    /// Set the accepted timestamp layout.
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Load options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_millis_format() {
        let ts = TimestampFormat::Millis
            .parse("2021-01-02T03:04:05.000Z")
            .unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap());

        let ts = TimestampFormat::Millis
            .parse("2021-01-02T03:04:05.250Z")
            .unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_millis_format_is_strict() {
        let format = TimestampFormat::Millis;
        assert!(format.parse("2021-01-02T03:04:05Z").is_err());
        assert!(format.parse("2021-01-02T03:04:05.123456Z").is_err());
        assert!(format.parse("2021-01-02T03:04:05.000+01:00").is_err());
        assert!(format.parse("not a timestamp").is_err());
    }

    #[test]
    fn test_rfc3339_format() {
        let format = TimestampFormat::Rfc3339;
        let ts = format.parse("2021-01-02T04:04:05.123456+01:00").unwrap();
        assert_eq!(ts.hour(), 3);
        assert_eq!(ts.nanosecond(), 123_456_000);
        assert!(format.parse("2021-01-02T03:04:05Z").is_ok());
        assert!(format.parse("2021-01-02").is_err());
    }

    #[test]
    fn test_default_options() {
        let options = FlattenOptions::default();
        assert!(options.flatten_array_maps);
        assert_eq!(options.timestamp_format, TimestampFormat::Millis);
        assert_eq!(options, FlattenOptions::new());
    }

    #[test]
    fn test_builders() {
        let options = FlattenOptions::scalar_arrays().with_timestamp_format(TimestampFormat::Rfc3339);
        assert!(!options.flatten_array_maps);
        assert_eq!(options.timestamp_format, TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_from_toml_partial() {
        let options = FlattenOptions::from_toml_str("flatten_array_maps = false").unwrap();
        assert_eq!(options, FlattenOptions::scalar_arrays());

        let options = FlattenOptions::from_toml_str("").unwrap();
        assert_eq!(options, FlattenOptions::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_format() {
        let err = FlattenOptions::from_toml_str(r#"timestamp_format = "unix""#).unwrap_err();
        assert!(err.to_string().starts_with("invalid options:"));
    }
}
