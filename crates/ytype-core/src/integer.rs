//! # Integer Types — YANG Built-in Integers
//!
//! `int8` through `uint64`, each an [`Integer<T>`] over its native Rust
//! integer. Bounds default to the native width and may be narrowed with
//! [`Integer::restrict`] to model a YANG `range` statement.
//!
//! The canonical string is Rust's decimal rendering: no leading zeros, no
//! `+`, a single `-` for negatives. Parsing accepts what `str::parse`
//! accepts for the native type, so `"+7"` and `"007"` both decode to `7`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bounded::{Bounded, Constraint};
use crate::error::ValueError;
use crate::number::Number;

/// A native integer type backing a YANG integer type.
pub trait NativeInt:
    Copy + Ord + Hash + fmt::Display + fmt::Debug + FromStr<Err = std::num::ParseIntError> + 'static
{
    /// YANG type name, e.g. `uint16`.
    const YANG_NAME: &'static str;
    /// Smallest native value.
    const MIN: Self;
    /// Largest native value.
    const MAX: Self;

    /// Narrows a numeric input to this type. `None` if the untruncated
    /// input lies outside the native range.
    fn narrow(n: &Number) -> Option<Self>;
}

macro_rules! native_int {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl NativeInt for $t {
                const YANG_NAME: &'static str = $name;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                fn narrow(n: &Number) -> Option<Self> {
                    let whole = n.truncate_within(i128::from(<$t>::MIN), i128::from(<$t>::MAX))?;
                    <$t>::try_from(whole).ok()
                }
            }
        )*
    };
}

native_int! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
}

/// Inclusive integer range; the full native width unless restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange<T: NativeInt> {
    min: T,
    max: T,
}

impl<T: NativeInt> IntRange<T> {
    /// The full native range of `T`.
    pub fn native() -> Self {
        Self {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// A restricted range. Validated when bounds are derived.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: NativeInt> Default for IntRange<T> {
    fn default() -> Self {
        Self::native()
    }
}

impl<T: NativeInt> Constraint for IntRange<T> {
    type Repr = T;
    const TYPE_NAME: &'static str = T::YANG_NAME;

    fn bounds(&self) -> Result<(T, T), ValueError> {
        if self.min > self.max {
            tracing::debug!(type_name = T::YANG_NAME, min = %self.min, max = %self.max, "empty range");
            return Err(ValueError::constraint(
                T::YANG_NAME,
                format!("range {}..{}", self.min, self.max),
                "lower bound exceeds upper bound",
            ));
        }
        Ok((self.min, self.max))
    }

    fn parse_literal(&self, s: &str) -> Result<T, ValueError> {
        s.parse::<T>()
            .map_err(|e| ValueError::bad_value(T::YANG_NAME, s, e))
    }
}

/// A YANG integer value of native type `T`.
#[derive(Debug, Clone)]
pub struct Integer<T: NativeInt>(Bounded<IntRange<T>>);

/// YANG `int8`.
pub type Int8 = Integer<i8>;
/// YANG `int16`.
pub type Int16 = Integer<i16>;
/// YANG `int32`.
pub type Int32 = Integer<i32>;
/// YANG `int64`.
pub type Int64 = Integer<i64>;
/// YANG `uint8`.
pub type UInt8 = Integer<u8>;
/// YANG `uint16`.
pub type UInt16 = Integer<u16>;
/// YANG `uint32`.
pub type UInt32 = Integer<u32>;
/// YANG `uint64`.
pub type UInt64 = Integer<u64>;

impl<T: NativeInt> Integer<T> {
    /// Wraps a native value. Always within the native range.
    pub fn new(value: T) -> Self {
        Self(Bounded::from_parts(value, T::MIN, T::MAX, IntRange::native()))
    }

    /// Parses a wire literal.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] if `s` is not a valid literal of `T`
    /// (including literals too large for `T`).
    pub fn parse(s: &str) -> Result<Self, ValueError> {
        Bounded::parse(s, IntRange::native()).map(Self)
    }

    /// Constructs from a numeric input of any kind, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`] if the input lies outside the native
    /// range of `T`, or is NaN or infinite.
    pub fn from_number(n: impl Into<Number>) -> Result<Self, ValueError> {
        let n = n.into();
        match T::narrow(&n) {
            Some(v) => Ok(Self::new(v)),
            None => {
                tracing::debug!(type_name = T::YANG_NAME, value = %n, "numeric input outside native range");
                Err(ValueError::out_of_range(T::YANG_NAME, n, T::MIN, T::MAX))
            }
        }
    }

    /// Narrows the bounds to `[min, max]`.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] if `min > max`,
    /// [`ValueError::OutOfRange`] if the current value falls outside.
    pub fn restrict(mut self, min: T, max: T) -> Result<Self, ValueError> {
        *self.0.constraint_mut() = IntRange::new(min, max);
        self.0.check()?;
        Ok(self)
    }

    /// The carried value.
    pub fn value(&self) -> T {
        self.0.value()
    }

    /// Inclusive lower bound in effect.
    pub fn min(&self) -> T {
        self.0.min()
    }

    /// Inclusive upper bound in effect.
    pub fn max(&self) -> T {
        self.0.max()
    }

    /// Replaces the value, checked against the bounds in effect.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`]; unchanged on failure.
    pub fn set_value(&mut self, value: T) -> Result<(), ValueError> {
        self.0.set_value(value)
    }

    /// Replaces the value from a wire literal.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] or [`ValueError::OutOfRange`]; unchanged on
    /// failure.
    pub fn set_value_str(&mut self, s: &str) -> Result<(), ValueError> {
        self.0.set_value_str(s)
    }

    /// Re-validates the value against the bounds in effect.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`].
    pub fn check(&mut self) -> Result<(), ValueError> {
        self.0.check()
    }

    /// The canonical wire form.
    pub fn canonical_string(&self) -> String {
        self.0.canonical_string()
    }
}

impl<T: NativeInt> FromStr for Integer<T> {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: NativeInt> From<T> for Integer<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: NativeInt> fmt::Display for Integer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: NativeInt> PartialEq for Integer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: NativeInt> Eq for Integer<T> {}

impl<T: NativeInt> Hash for Integer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// An integer value compares equal to its bare native value.
impl<T: NativeInt> PartialEq<T> for Integer<T> {
    fn eq(&self, other: &T) -> bool {
        self.value() == *other
    }
}

impl<T: NativeInt> Serialize for Integer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_string())
    }
}

impl<'de, T: NativeInt> Deserialize<'de> for Integer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_canonicalizes() {
        assert_eq!(Int32::parse("42").unwrap().canonical_string(), "42");
        assert_eq!(Int32::parse("-0042").unwrap().canonical_string(), "-42");
        assert_eq!(Int32::parse("+7").unwrap().canonical_string(), "7");
    }

    #[test]
    fn parse_rejects_malformed() {
        for s in ["", " 1", "1.0", "0x10", "abc", "2147483648"] {
            let err = Int32::parse(s).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::BadValue, "input {s:?}");
        }
        assert_eq!(UInt8::parse("-1").unwrap_err().kind(), ErrorKind::BadValue);
    }

    #[test]
    fn native_bounds() {
        let v = Int8::new(0);
        assert_eq!((v.min(), v.max()), (-128, 127));
        let v = UInt64::new(0);
        assert_eq!((v.min(), v.max()), (0, u64::MAX));
    }

    #[test]
    fn from_float_inside_range_narrows() {
        let v = Int32::from_number(123.9f64).unwrap();
        assert_eq!(v.value(), 123);
        let v = Int32::from_number(-2147483648.0f64).unwrap();
        assert_eq!(v.value(), i32::MIN);
    }

    #[test]
    fn from_float_outside_range_fails() {
        for f in [2147483648.0f64, -2147483649.0, 1e20, f64::NAN, f64::NEG_INFINITY] {
            let err = Int32::from_number(f).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange, "input {f}");
        }
    }

    #[test]
    fn from_wider_integer() {
        assert_eq!(Int16::from_number(300i64).unwrap().value(), 300);
        assert_eq!(Int8::from_number(300i64).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(UInt32::from_number(-1i32).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(UInt64::from_number(u64::MAX).unwrap().value(), u64::MAX);
    }

    #[test]
    fn restrict_narrows_bounds() {
        let v = Int32::new(5).restrict(1, 10).unwrap();
        assert_eq!((v.min(), v.max()), (1, 10));

        let err = Int32::new(50).restrict(1, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = Int32::new(5).restrict(10, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
    }

    #[test]
    fn setter_honours_restricted_bounds() {
        let mut v = UInt8::new(5).restrict(0, 100).unwrap();
        let err = v.set_value(101).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                type_name: "uint8",
                value: "101".into(),
                min: "0".into(),
                max: "100".into(),
            }
        );
        assert_eq!(v.value(), 5);
        v.set_value_str("100").unwrap();
        assert_eq!(v, 100u8);
        assert!(v.check().is_ok());
    }

    #[test]
    fn equality_is_by_value() {
        let restricted = Int64::new(9).restrict(0, 10).unwrap();
        assert_eq!(restricted, Int64::new(9));
        assert_ne!(Int64::new(9), Int64::new(10));
        assert_eq!(Int64::new(9), 9i64);
    }

    #[test]
    fn serde_uses_canonical_string() {
        let v = Int16::new(-12);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#""-12""#);
        let back: Int16 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
        assert!(serde_json::from_str::<Int8>(r#""128""#).is_err());
    }
}
