//! # Leaf Types — Declarative Constraint Carriers
//!
//! A [`LeafType`] carries the out-of-band schema parameters for one leaf:
//! the built-in type, an optional integer `range`, or decimal64's
//! `fraction-digits`. Descriptors are plain serde data and load from YAML
//! or JSON:
//!
//! ```yaml
//! type: decimal64
//! fraction-digits: 2
//! ```
//!
//! ```yaml
//! type: uint16
//! range: "1..4094"
//! ```
//!
//! [`LeafType::parse`] decodes a wire string into a [`YangValue`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decimal64::Decimal64;
use crate::error::{ValueError, YtypeError};
use crate::identityref::IdentityRef;
use crate::integer::{
    Int16, Int32, Int64, Int8, Integer, NativeInt, UInt16, UInt32, UInt64, UInt8,
};

/// The schema type of a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LeafType {
    /// YANG `int8`.
    Int8 {
        /// Optional `range` restriction, e.g. `"min..10"`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `int16`.
    Int16 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `int32`.
    Int32 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `int64`.
    Int64 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `uint8`.
    #[serde(rename = "uint8")]
    UInt8 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `uint16`.
    #[serde(rename = "uint16")]
    UInt16 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `uint32`.
    #[serde(rename = "uint32")]
    UInt32 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `uint64`.
    #[serde(rename = "uint64")]
    UInt64 {
        /// Optional `range` restriction.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range: Option<String>,
    },
    /// YANG `decimal64`.
    Decimal64 {
        /// Digits after the decimal point, 1 through 18.
        #[serde(rename = "fraction-digits")]
        fraction_digits: u8,
    },
    /// YANG `identityref`.
    Identityref,
}

/// A validated value of any supported type.
///
/// Values of different variants never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum YangValue {
    /// `int8` value.
    Int8(Int8),
    /// `int16` value.
    Int16(Int16),
    /// `int32` value.
    Int32(Int32),
    /// `int64` value.
    Int64(Int64),
    /// `uint8` value.
    UInt8(UInt8),
    /// `uint16` value.
    UInt16(UInt16),
    /// `uint32` value.
    UInt32(UInt32),
    /// `uint64` value.
    UInt64(UInt64),
    /// `decimal64` value.
    Decimal64(Decimal64),
    /// `identityref` value.
    IdentityRef(IdentityRef),
}

impl YangValue {
    /// The canonical wire form.
    pub fn canonical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for YangValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8(v) => fmt::Display::fmt(v, f),
            Self::Int16(v) => fmt::Display::fmt(v, f),
            Self::Int32(v) => fmt::Display::fmt(v, f),
            Self::Int64(v) => fmt::Display::fmt(v, f),
            Self::UInt8(v) => fmt::Display::fmt(v, f),
            Self::UInt16(v) => fmt::Display::fmt(v, f),
            Self::UInt32(v) => fmt::Display::fmt(v, f),
            Self::UInt64(v) => fmt::Display::fmt(v, f),
            Self::Decimal64(v) => fmt::Display::fmt(v, f),
            Self::IdentityRef(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl LeafType {
    /// Loads a descriptor from YAML.
    ///
    /// # Errors
    ///
    /// [`YtypeError::Descriptor`] if the YAML does not describe a leaf
    /// type.
    pub fn from_yaml(yaml: &str) -> Result<Self, YtypeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a descriptor from JSON.
    ///
    /// # Errors
    ///
    /// [`YtypeError::Json`] if the JSON does not describe a leaf type.
    pub fn from_json(json: &str) -> Result<Self, YtypeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a descriptor from a YANG type name and loose parameters, as
    /// a command line supplies them.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] for an unknown type name, a
    /// missing `fraction-digits` on decimal64, or a parameter that does
    /// not apply to the type.
    pub fn from_parts(
        name: &str,
        range: Option<String>,
        fraction_digits: Option<u8>,
    ) -> Result<Self, ValueError> {
        let leaf = match name {
            "int8" => Self::Int8 { range },
            "int16" => Self::Int16 { range },
            "int32" => Self::Int32 { range },
            "int64" => Self::Int64 { range },
            "uint8" => Self::UInt8 { range },
            "uint16" => Self::UInt16 { range },
            "uint32" => Self::UInt32 { range },
            "uint64" => Self::UInt64 { range },
            "decimal64" => {
                if range.is_some() {
                    return Err(ValueError::constraint(
                        "decimal64",
                        "range",
                        "range restrictions apply to integer types only",
                    ));
                }
                let fraction_digits = fraction_digits.ok_or_else(|| {
                    ValueError::constraint("decimal64", "fraction-digits", "required")
                })?;
                return Ok(Self::Decimal64 { fraction_digits });
            }
            "identityref" => {
                if range.is_some() {
                    return Err(ValueError::constraint(
                        "identityref",
                        "range",
                        "range restrictions apply to integer types only",
                    ));
                }
                Self::Identityref
            }
            other => {
                return Err(ValueError::constraint(
                    "leaf",
                    format!("type {other}"),
                    "unknown built-in type",
                ))
            }
        };
        if fraction_digits.is_some() {
            return Err(ValueError::constraint(
                leaf.name(),
                "fraction-digits",
                "applies to decimal64 only",
            ));
        }
        Ok(leaf)
    }

    /// The YANG type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int8 { .. } => "int8",
            Self::Int16 { .. } => "int16",
            Self::Int32 { .. } => "int32",
            Self::Int64 { .. } => "int64",
            Self::UInt8 { .. } => "uint8",
            Self::UInt16 { .. } => "uint16",
            Self::UInt32 { .. } => "uint32",
            Self::UInt64 { .. } => "uint64",
            Self::Decimal64 { .. } => "decimal64",
            Self::Identityref => "identityref",
        }
    }

    /// Decodes a wire string into a validated value of this type.
    ///
    /// # Errors
    ///
    /// Any [`ValueError`] the concrete type reports, or
    /// [`ValueError::ConstraintViolation`] for a malformed `range`.
    pub fn parse(&self, s: &str) -> Result<YangValue, ValueError> {
        tracing::trace!(leaf_type = self.name(), input = s, "parsing leaf value");
        let value = match self {
            Self::Int8 { range } => YangValue::Int8(parse_int(s, range.as_deref())?),
            Self::Int16 { range } => YangValue::Int16(parse_int(s, range.as_deref())?),
            Self::Int32 { range } => YangValue::Int32(parse_int(s, range.as_deref())?),
            Self::Int64 { range } => YangValue::Int64(parse_int(s, range.as_deref())?),
            Self::UInt8 { range } => YangValue::UInt8(parse_int(s, range.as_deref())?),
            Self::UInt16 { range } => YangValue::UInt16(parse_int(s, range.as_deref())?),
            Self::UInt32 { range } => YangValue::UInt32(parse_int(s, range.as_deref())?),
            Self::UInt64 { range } => YangValue::UInt64(parse_int(s, range.as_deref())?),
            Self::Decimal64 { fraction_digits } => {
                YangValue::Decimal64(Decimal64::parse(s, *fraction_digits)?)
            }
            Self::Identityref => YangValue::IdentityRef(IdentityRef::parse(s)?),
        };
        Ok(value)
    }

    /// The inclusive bounds as canonical strings; `None` for identityref.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] for a malformed `range` or an
    /// invalid `fraction-digits`.
    pub fn bounds(&self) -> Result<Option<(String, String)>, ValueError> {
        let bounds = match self {
            Self::Int8 { range } => int_bounds::<i8>(range.as_deref())?,
            Self::Int16 { range } => int_bounds::<i16>(range.as_deref())?,
            Self::Int32 { range } => int_bounds::<i32>(range.as_deref())?,
            Self::Int64 { range } => int_bounds::<i64>(range.as_deref())?,
            Self::UInt8 { range } => int_bounds::<u8>(range.as_deref())?,
            Self::UInt16 { range } => int_bounds::<u16>(range.as_deref())?,
            Self::UInt32 { range } => int_bounds::<u32>(range.as_deref())?,
            Self::UInt64 { range } => int_bounds::<u64>(range.as_deref())?,
            Self::Decimal64 { fraction_digits } => {
                let (min, max) = Decimal64::bounds_for(*fraction_digits)?;
                (min.to_string(), max.to_string())
            }
            Self::Identityref => return Ok(None),
        };
        Ok(Some(bounds))
    }
}

fn parse_int<T: NativeInt>(s: &str, range: Option<&str>) -> Result<Integer<T>, ValueError> {
    let value = Integer::<T>::parse(s)?;
    match range {
        None => Ok(value),
        Some(range) => {
            let (min, max) = parse_range::<T>(range)?;
            value.restrict(min, max)
        }
    }
}

fn int_bounds<T: NativeInt>(range: Option<&str>) -> Result<(String, String), ValueError> {
    let (min, max) = match range {
        None => (T::MIN, T::MAX),
        Some(range) => parse_range::<T>(range)?,
    };
    Ok((min.to_string(), max.to_string()))
}

/// Parses `"<lo>..<hi>"`, where each side is a literal, `min` or `max`.
fn parse_range<T: NativeInt>(range: &str) -> Result<(T, T), ValueError> {
    let invalid = |reason: String| {
        tracing::debug!(type_name = T::YANG_NAME, range, %reason, "invalid range");
        ValueError::constraint(T::YANG_NAME, format!("range {range}"), reason)
    };
    let (lo, hi) = range
        .split_once("..")
        .ok_or_else(|| invalid("expected <lo>..<hi>".to_string()))?;
    let side = |s: &str| -> Result<T, ValueError> {
        match s.trim() {
            "min" => Ok(T::MIN),
            "max" => Ok(T::MAX),
            lit => lit
                .parse::<T>()
                .map_err(|e| invalid(format!("bound \"{lit}\": {e}"))),
        }
    };
    let (min, max) = (side(lo)?, side(hi)?);
    if min > max {
        return Err(invalid("lower bound exceeds upper bound".to_string()));
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn yaml_decimal64() {
        let leaf = LeafType::from_yaml("type: decimal64\nfraction-digits: 2\n").unwrap();
        assert_eq!(leaf, LeafType::Decimal64 { fraction_digits: 2 });
        let v = leaf.parse("92233720368547758.07").unwrap();
        assert_eq!(v.canonical_string(), "92233720368547758.07");
        assert_eq!(
            leaf.parse("92233720368547758.08").unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn yaml_integer_with_range() {
        let leaf = LeafType::from_yaml("type: uint16\nrange: \"1..4094\"\n").unwrap();
        assert_eq!(leaf.parse("4094").unwrap().to_string(), "4094");
        assert_eq!(leaf.parse("0").unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(
            leaf.bounds().unwrap(),
            Some(("1".to_string(), "4094".to_string()))
        );
    }

    #[test]
    fn range_keywords() {
        let leaf = LeafType::Int8 {
            range: Some("min..0".into()),
        };
        assert_eq!(
            leaf.bounds().unwrap(),
            Some(("-128".to_string(), "0".to_string()))
        );
        assert!(leaf.parse("-128").is_ok());
        assert!(leaf.parse("1").is_err());
    }

    #[test]
    fn malformed_range_is_constraint_violation() {
        for range in ["1-10", "10..1", "a..5", "1..300"] {
            let leaf = LeafType::UInt8 {
                range: Some(range.into()),
            };
            assert_eq!(
                leaf.parse("5").unwrap_err().kind(),
                ErrorKind::ConstraintViolation,
                "range {range:?}"
            );
        }
    }

    #[test]
    fn json_identityref() {
        let leaf = LeafType::from_json(r#"{"type":"identityref"}"#).unwrap();
        let v = leaf.parse("eth urn:example:module eth-mod").unwrap();
        assert!(matches!(v, YangValue::IdentityRef(_)));
        assert_eq!(leaf.bounds().unwrap(), None);
    }

    #[test]
    fn unknown_descriptor_rejected() {
        assert!(LeafType::from_yaml("type: string\n").is_err());
        assert!(LeafType::from_yaml("type: decimal64\n").is_err());
    }

    #[test]
    fn from_parts_validates_parameters() {
        assert_eq!(
            LeafType::from_parts("decimal64", None, Some(3)).unwrap(),
            LeafType::Decimal64 { fraction_digits: 3 }
        );
        assert!(LeafType::from_parts("decimal64", None, None).is_err());
        assert!(LeafType::from_parts("int32", None, Some(2)).is_err());
        assert!(LeafType::from_parts("identityref", Some("1..2".into()), None).is_err());
        assert!(LeafType::from_parts("boolean", None, None).is_err());
    }

    #[test]
    fn values_of_different_types_never_equal() {
        let a = LeafType::Int32 { range: None }.parse("7").unwrap();
        let b = LeafType::Int64 { range: None }.parse("7").unwrap();
        let c = LeafType::Int32 { range: None }.parse("7").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, c);

        let r = LeafType::Identityref.parse("a b c").unwrap();
        assert_ne!(a, r);
    }

    #[test]
    fn descriptor_serializes_back() {
        let leaf = LeafType::Decimal64 { fraction_digits: 4 };
        let json = serde_json::to_string(&leaf).unwrap();
        assert_eq!(json, r#"{"type":"decimal64","fraction-digits":4}"#);
        assert_eq!(LeafType::from_json(&json).unwrap(), leaf);
    }
}
