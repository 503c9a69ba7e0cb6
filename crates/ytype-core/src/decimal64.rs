//! # Decimal64 — Fixed-Point Decimal with Derived Bounds
//!
//! A YANG `decimal64` value is a 64-bit integer scaled by
//! `10^-fraction-digits`. Its bounds are therefore not fixed: they are
//! derived from the `fraction-digits` parameter, which must lie in
//! `[1, 18]`.
//!
//! ## Validation Pipeline
//!
//! Every construction, mutation and [`Decimal64::check`] call runs:
//!
//! 1. `fraction-digits ∈ [1, 18]`, else `ConstraintViolation`.
//! 2. `min = -2^63 / 10^fd`, `max = (2^63 - 1) / 10^fd`, recomputed.
//! 3. `min <= value <= max`, else `OutOfRange`.
//!
//! ## Literals
//!
//! A wire literal is `[+-]digits[.digits]`: no exponent, no digit
//! separators, no bare leading or trailing point. Anything else is
//! `BadValue`, checked before `fraction-digits`. A literal may carry at
//! most `fraction-digits` digits after the point, since the value space
//! is a 64-bit integer scaled by `10^-fd`; more is `BadValue` too. A
//! well-formed literal of any magnitude is classified against the bounds
//! on its digit string, so a 40-digit literal is `OutOfRange`, not an
//! arithmetic overflow.
//!
//! ## Exactness
//!
//! No binary floating point sits between the wire string and the stored
//! value, and the canonical string is plain notation that keeps the
//! literal's scale: `"1.50"` renders as `1.50`, never `1.5` or `1.5E0`.

use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::bounded::{Bounded, Constraint};
use crate::error::ValueError;
use crate::number::Number;

const TYPE_NAME: &str = "decimal64";

/// Smallest legal `fraction-digits`.
pub const MIN_FRACTION_DIGITS: u8 = 1;
/// Largest legal `fraction-digits`.
pub const MAX_FRACTION_DIGITS: u8 = 18;

/// The `fraction-digits` parameter of a decimal64 type.
///
/// Any `u8` can be held; validity is checked when bounds are derived so
/// that a bad parameter is reported as a constraint violation at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FractionDigits(u8);

impl FractionDigits {
    /// Wraps a raw fraction-digits count.
    pub fn new(digits: u8) -> Self {
        Self(digits)
    }

    /// The raw count.
    pub fn get(self) -> u8 {
        self.0
    }

    fn validate(self) -> Result<u32, ValueError> {
        if (MIN_FRACTION_DIGITS..=MAX_FRACTION_DIGITS).contains(&self.0) {
            return Ok(u32::from(self.0));
        }
        tracing::debug!(fraction_digits = self.0, "fraction-digits outside [1, 18]");
        Err(ValueError::constraint(
            TYPE_NAME,
            format!("fraction-digits {}", self.0),
            format!("must be in [{MIN_FRACTION_DIGITS}, {MAX_FRACTION_DIGITS}]"),
        ))
    }

    /// Admits an exact decimal whose scale fits this `fraction-digits`.
    fn admit(self, value: Decimal) -> Result<Decimal, ValueError> {
        let scale = self.validate()?;
        if value.scale() > scale {
            return Err(excess_fraction_digits(&value.to_string(), scale));
        }
        Ok(normalize_zero(value))
    }

    fn out_of_range(self, value: &str) -> ValueError {
        match self.bounds() {
            Ok((min, max)) => ValueError::out_of_range(TYPE_NAME, value, min, max),
            Err(e) => e,
        }
    }
}

impl Constraint for FractionDigits {
    type Repr = Decimal;
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn bounds(&self) -> Result<(Decimal, Decimal), ValueError> {
        let scale = self.validate()?;
        Ok((Decimal::new(i64::MIN, scale), Decimal::new(i64::MAX, scale)))
    }

    fn parse_literal(&self, s: &str) -> Result<Decimal, ValueError> {
        let literal = Literal::split(s)?;
        let scale = self.validate()?;
        literal.to_decimal(*self, scale)
    }
}

/// A syntactically valid decimal literal, split at the point.
struct Literal<'a> {
    input: &'a str,
    negative: bool,
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> Literal<'a> {
    fn split(input: &'a str) -> Result<Self, ValueError> {
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };
        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (body, None),
        };
        if !is_digits(whole) || fraction.is_some_and(|f| !is_digits(f)) {
            tracing::debug!(input, "malformed decimal64 literal");
            return Err(ValueError::bad_value(
                TYPE_NAME,
                input,
                "expected [+-]digits[.digits]",
            ));
        }
        Ok(Self {
            input,
            negative,
            whole,
            fraction: fraction.unwrap_or(""),
        })
    }

    /// Converts to an exact decimal at the literal's own scale, rejecting
    /// excess fraction digits and magnitudes beyond a 64-bit mantissa at
    /// `scale`.
    fn to_decimal(&self, fd: FractionDigits, scale: u32) -> Result<Decimal, ValueError> {
        let literal_scale = self.fraction.len();
        if literal_scale > scale as usize {
            return Err(excess_fraction_digits(self.input, scale));
        }
        let padding = scale as usize - literal_scale;
        let digits = format!("{}{}", self.whole, self.fraction);
        let significant = digits.trim_start_matches('0');
        // 10^19 already exceeds 2^63 at any scale.
        if !significant.is_empty() && significant.len() + padding > 19 {
            return Err(fd.out_of_range(self.input));
        }
        let magnitude: i128 = if significant.is_empty() {
            0
        } else {
            significant
                .parse()
                .map_err(|e| ValueError::bad_value(TYPE_NAME, self.input, e))?
        };
        let mantissa = if self.negative { -magnitude } else { magnitude };
        let scaled = mantissa * 10i128.pow(padding as u32);
        if i64::try_from(scaled).is_err() {
            return Err(fd.out_of_range(self.input));
        }
        let value = Decimal::try_from_i128_with_scale(mantissa, literal_scale as u32)
            .map_err(|_| fd.out_of_range(self.input))?;
        Ok(normalize_zero(value))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn excess_fraction_digits(input: &str, scale: u32) -> ValueError {
    tracing::debug!(input, fraction_digits = scale, "decimal64 literal too precise");
    ValueError::bad_value(
        TYPE_NAME,
        input,
        format!("more than {scale} digits after the decimal point"),
    )
}

fn normalize_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        // "-0.00" and "0.00" are the same value; keep a single rendering.
        value.set_sign_positive(true);
    }
    value
}

/// A YANG `decimal64` value.
#[derive(Debug, Clone)]
pub struct Decimal64(Bounded<FractionDigits>);

impl Decimal64 {
    /// Parses a plain decimal literal under the given `fraction-digits`.
    ///
    /// # Errors
    ///
    /// - [`ValueError::BadValue`] if `s` is not a decimal literal, or has
    ///   more than `fraction_digits` digits after the point.
    /// - [`ValueError::ConstraintViolation`] if `fraction_digits ∉ [1, 18]`.
    /// - [`ValueError::OutOfRange`] if the value is outside the derived bounds.
    pub fn parse(s: &str, fraction_digits: u8) -> Result<Self, ValueError> {
        Bounded::parse(s, FractionDigits::new(fraction_digits)).map(Self)
    }

    /// Constructs from an exact decimal.
    ///
    /// # Errors
    ///
    /// As [`Decimal64::parse`]; a scale above `fraction_digits` is
    /// [`ValueError::BadValue`].
    pub fn new(value: Decimal, fraction_digits: u8) -> Result<Self, ValueError> {
        let fd = FractionDigits::new(fraction_digits);
        Bounded::new(fd.admit(value)?, fd).map(Self)
    }

    /// Constructs from a numeric input of any kind.
    ///
    /// Floats are taken at their shortest round-trip decimal text and
    /// then treated as a literal, so `0.1f64` is exactly `0.1` and
    /// `1e-30f64` has too many fraction digits for any decimal64.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`] for NaN, infinities and values outside
    /// the derived bounds; [`ValueError::BadValue`] for more fraction
    /// digits than `fraction_digits`; [`ValueError::ConstraintViolation`]
    /// for a bad `fraction_digits`.
    pub fn from_number(n: impl Into<Number>, fraction_digits: u8) -> Result<Self, ValueError> {
        let fd = FractionDigits::new(fraction_digits);
        let value = match n.into() {
            Number::Int(i) => fd.parse_literal(&i.to_string())?,
            Number::Float(f) if f.is_finite() => fd.parse_literal(&f.to_string())?,
            n @ Number::Float(_) => return Err(fd.out_of_range(&n.to_string())),
            Number::Decimal(d) => fd.admit(d)?,
        };
        Bounded::new(value, fd).map(Self)
    }

    /// The inclusive bounds implied by `fraction_digits`.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] if `fraction_digits ∉ [1, 18]`.
    pub fn bounds_for(fraction_digits: u8) -> Result<(Decimal, Decimal), ValueError> {
        FractionDigits::new(fraction_digits).bounds()
    }

    /// The carried value.
    pub fn value(&self) -> Decimal {
        self.0.value()
    }

    /// The `fraction-digits` in effect.
    pub fn fraction_digits(&self) -> u8 {
        self.0.constraint().get()
    }

    /// Inclusive lower bound in effect.
    pub fn min(&self) -> Decimal {
        self.0.min()
    }

    /// Inclusive upper bound in effect.
    pub fn max(&self) -> Decimal {
        self.0.max()
    }

    /// Replaces the value and `fraction-digits` together. Bounds are
    /// recomputed from the new `fraction-digits` before the value is
    /// checked.
    ///
    /// # Errors
    ///
    /// As [`Decimal64::new`]; unchanged on failure.
    pub fn set_value(&mut self, value: Decimal, fraction_digits: u8) -> Result<(), ValueError> {
        *self = Self::new(value, fraction_digits)?;
        Ok(())
    }

    /// Replaces the value and `fraction-digits` from a wire literal.
    ///
    /// # Errors
    ///
    /// As [`Decimal64::parse`]; unchanged on failure.
    pub fn set_value_str(&mut self, s: &str, fraction_digits: u8) -> Result<(), ValueError> {
        *self = Self::parse(s, fraction_digits)?;
        Ok(())
    }

    /// Runs the full validation pipeline against the current state.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] or [`ValueError::OutOfRange`].
    pub fn check(&mut self) -> Result<(), ValueError> {
        self.0.check()
    }

    /// The canonical wire form: plain decimal notation, never an exponent.
    pub fn canonical_string(&self) -> String {
        self.0.canonical_string()
    }
}

impl fmt::Display for Decimal64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Equal iff the `fraction-digits` match and the values are numerically
/// equal (`1.5 == 1.50`).
impl PartialEq for Decimal64 {
    fn eq(&self, other: &Self) -> bool {
        self.fraction_digits() == other.fraction_digits() && self.0 == other.0
    }
}

impl Eq for Decimal64 {}

impl Hash for Decimal64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fraction_digits().hash(state);
        self.0.hash(state);
    }
}

/// A decimal64 compares equal to its bare exact decimal value.
impl PartialEq<Decimal> for Decimal64 {
    fn eq(&self, other: &Decimal) -> bool {
        self.value() == *other
    }
}

impl Serialize for Decimal64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_string())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range decimal64 literal survives parse -> canonical
        /// string -> parse with no loss, for every fraction-digits value.
        #[test]
        fn round_trip_exact(mantissa in any::<i64>(), fd in 1u8..=18) {
            let literal = Decimal::new(mantissa, u32::from(fd)).to_string();
            let first = Decimal64::parse(&literal, fd).unwrap();
            let text = first.canonical_string();
            let second = Decimal64::parse(&text, fd).unwrap();
            prop_assert_eq!(&text, &literal);
            prop_assert_eq!(first.value(), second.value());
            prop_assert_eq!(second.canonical_string(), literal);
        }

        /// One unit past the maximum is always rejected.
        #[test]
        fn one_past_max_rejected(fd in 1u8..=18) {
            let past = Decimal::from_i128_with_scale(i128::from(i64::MAX) + 1, u32::from(fd));
            let err = Decimal64::new(past, fd).unwrap_err();
            prop_assert_eq!(err.kind(), crate::ErrorKind::OutOfRange);
        }
    }
}
