//! # Error Hierarchy
//!
//! Structured error types for ytype, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Value-level failures ([`ValueError`]) are returned synchronously from
//! every constructor and setter. They are never deferred, never clamped,
//! and a failed setter leaves its target unchanged.

use std::fmt;

use thiserror::Error;

/// Top-level error type for ytype.
#[derive(Error, Debug)]
pub enum YtypeError {
    /// A value failed parsing or validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// A leaf type descriptor could not be decoded from YAML.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for schema-constrained scalar values.
///
/// Every variant carries the YANG type name and the offending input so
/// that a protocol layer can report the failure without re-deriving it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The input is not a syntactically valid literal for the type.
    #[error("bad {type_name} value \"{input}\": {reason}")]
    BadValue {
        /// YANG type name, e.g. `int32`.
        type_name: &'static str,
        /// The rejected input, verbatim.
        input: String,
        /// Why the input could not be parsed.
        reason: String,
    },

    /// The input parsed but lies outside the inclusive bounds.
    #[error("{type_name} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// YANG type name.
        type_name: &'static str,
        /// The rejected value.
        value: String,
        /// Inclusive lower bound in effect.
        min: String,
        /// Inclusive upper bound in effect.
        max: String,
    },

    /// An auxiliary schema parameter is itself invalid.
    #[error("{type_name} constraint {constraint} violated: {reason}")]
    ConstraintViolation {
        /// YANG type name.
        type_name: &'static str,
        /// The constraint as written, e.g. `fraction-digits 19`.
        constraint: String,
        /// Why the constraint is invalid.
        reason: String,
    },
}

/// The kind of a [`ValueError`], without its diagnostic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unparsable literal or malformed structure.
    BadValue,
    /// Numerically outside the inclusive bounds.
    OutOfRange,
    /// Invalid schema parameter.
    ConstraintViolation,
}

impl ValueError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadValue { .. } => ErrorKind::BadValue,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::ConstraintViolation { .. } => ErrorKind::ConstraintViolation,
        }
    }

    pub(crate) fn bad_value(
        type_name: &'static str,
        input: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::BadValue {
            type_name,
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn out_of_range(
        type_name: &'static str,
        value: impl fmt::Display,
        min: impl fmt::Display,
        max: impl fmt::Display,
    ) -> Self {
        Self::OutOfRange {
            type_name,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub(crate) fn constraint(
        type_name: &'static str,
        constraint: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ConstraintViolation {
            type_name,
            constraint: constraint.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            ValueError::bad_value("int32", "x", "invalid digit").kind(),
            ErrorKind::BadValue
        );
        assert_eq!(
            ValueError::out_of_range("int8", 300, -128, 127).kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            ValueError::constraint("decimal64", "fraction-digits 0", "must be in 1..=18").kind(),
            ErrorKind::ConstraintViolation
        );
    }

    #[test]
    fn display_carries_context() {
        let err = ValueError::out_of_range("int8", 300, -128, 127);
        assert_eq!(err.to_string(), "int8 value 300 out of range [-128, 127]");

        let err = ValueError::bad_value("int32", "12a", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "bad int32 value \"12a\": invalid digit found in string"
        );
    }

    #[test]
    fn value_error_converts_to_top_level() {
        let err: YtypeError = ValueError::bad_value("identityref", "a b", "expected 3 tokens").into();
        assert!(matches!(err, YtypeError::Value(_)));
        assert!(err.to_string().starts_with("value error: "));
    }

    #[test]
    fn decode_errors_convert_to_top_level() {
        let yaml = serde_yaml::from_str::<u8>("[").unwrap_err();
        let err: YtypeError = yaml.into();
        assert!(matches!(err, YtypeError::Descriptor(_)));
        assert!(err.to_string().starts_with("descriptor error: "));

        let json = serde_json::from_str::<u8>("{").unwrap_err();
        let err: YtypeError = json.into();
        assert!(matches!(err, YtypeError::Json(_)));
    }
}
