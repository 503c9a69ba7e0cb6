//! # Numeric Input
//!
//! [`Number`] is the numeric input accepted by the `from_number`
//! constructors. It may be wider, narrower, integral or fractional
//! relative to the target type; narrowing is performed by the target,
//! never here.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A numeric value of any native kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any integer up to 128 bits.
    Int(i128),
    /// A binary floating-point value.
    Float(f64),
    /// An exact decimal value.
    Decimal(Decimal),
}

/// Sign of a fractional part dropped by truncation toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fraction {
    None,
    Positive,
    Negative,
}

impl Number {
    /// Returns the value truncated toward zero, provided the untruncated
    /// value lies within `[lo, hi]`.
    ///
    /// `2147483647.5` is outside `[i32::MIN, i32::MAX]` even though its
    /// truncation is not. NaN and infinities are never within range.
    pub(crate) fn truncate_within(&self, lo: i128, hi: i128) -> Option<i128> {
        let (whole, fraction) = self.split()?;
        if whole < lo || whole > hi {
            return None;
        }
        if (whole == hi && fraction == Fraction::Positive)
            || (whole == lo && fraction == Fraction::Negative)
        {
            return None;
        }
        Some(whole)
    }

    fn split(&self) -> Option<(i128, Fraction)> {
        match *self {
            Self::Int(i) => Some((i, Fraction::None)),
            Self::Float(f) => {
                if !f.is_finite() {
                    return None;
                }
                let whole = f.trunc();
                // Saturating cast: magnitudes beyond i128 land on its
                // extremes, which no native integer bound reaches.
                Some((whole as i128, fraction_sign(f - whole)))
            }
            Self::Decimal(d) => {
                let whole = d.trunc();
                Some((whole.to_i128()?, fraction_sign_decimal(d - whole)))
            }
        }
    }
}

fn fraction_sign(frac: f64) -> Fraction {
    if frac > 0.0 {
        Fraction::Positive
    } else if frac < 0.0 {
        Fraction::Negative
    } else {
        Fraction::None
    }
}

fn fraction_sign_decimal(frac: Decimal) -> Fraction {
    if frac.is_zero() {
        Fraction::None
    } else if frac.is_sign_negative() {
        Fraction::Negative
    } else {
        Fraction::Positive
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Self::Int(i128::from(v))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Decimal> for Number {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl FromStr for Number {
    type Err = rust_decimal::Error;

    /// Parses an integer or exact decimal literal. Never produces a float.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i128>() {
            Ok(i) => Ok(Self::Int(i)),
            Err(_) => Decimal::from_str_exact(s).map(Self::Decimal),
        }
    }
}
