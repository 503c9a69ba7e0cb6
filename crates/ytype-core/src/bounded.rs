//! # Bounded Scalar — Range-Checked Value Holder
//!
//! [`Bounded<C>`] holds a native value together with the inclusive bounds
//! derived from a [`Constraint`]. Every concrete scalar type in this crate
//! is a thin wrapper over it.
//!
//! ## Invariants
//!
//! - `min <= value <= max` holds for every `Bounded` a caller can observe.
//! - Bounds are re-derived from the constraint before every check, so a
//!   constraint whose bounds depend on a parameter (decimal64's
//!   fraction-digits) is validated and applied before the value is.
//! - Setters are transactional: on failure the previous state is kept.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValueError;

/// The bound-derivation policy of a concrete scalar type.
///
/// Implementors supply the native representation, the literal parser and
/// the function computing inclusive bounds. `bounds()` is where any
/// auxiliary schema parameter is validated.
pub trait Constraint: Clone + fmt::Debug {
    /// Native representation of the carried value.
    type Repr: Copy + PartialOrd + fmt::Display + fmt::Debug;

    /// YANG type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Derives the inclusive `(min, max)` bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ConstraintViolation`] if the constraint's own
    /// parameters are invalid.
    fn bounds(&self) -> Result<(Self::Repr, Self::Repr), ValueError>;

    /// Parses a wire literal into the native representation.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::BadValue`] if `s` is not a valid literal.
    fn parse_literal(&self, s: &str) -> Result<Self::Repr, ValueError>;

    /// Renders the canonical string of a native value.
    fn format(&self, value: &Self::Repr) -> String {
        value.to_string()
    }
}

/// A native value held within the inclusive bounds of constraint `C`.
#[derive(Debug, Clone)]
pub struct Bounded<C: Constraint> {
    value: C::Repr,
    min: C::Repr,
    max: C::Repr,
    constraint: C,
}

impl<C: Constraint> Bounded<C> {
    /// Constructs a bounded value, deriving bounds from `constraint`.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] if the constraint is invalid,
    /// [`ValueError::OutOfRange`] if `value` is outside the bounds.
    pub fn new(value: C::Repr, constraint: C) -> Result<Self, ValueError> {
        let (min, max) = constraint.bounds()?;
        let bounded = Self {
            value,
            min,
            max,
            constraint,
        };
        bounded.check_value()?;
        Ok(bounded)
    }

    /// Parses a wire literal and constructs a bounded value from it.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] for a malformed literal, otherwise as
    /// [`Bounded::new`].
    pub fn parse(s: &str, constraint: C) -> Result<Self, ValueError> {
        let value = constraint.parse_literal(s)?;
        Self::new(value, constraint)
    }

    /// Assembles a bounded value whose bounds and range membership the
    /// caller already guarantees.
    pub(crate) fn from_parts(value: C::Repr, min: C::Repr, max: C::Repr, constraint: C) -> Self {
        debug_assert!(min <= value && value <= max);
        Self {
            value,
            min,
            max,
            constraint,
        }
    }

    /// The carried value.
    pub fn value(&self) -> C::Repr {
        self.value
    }

    /// Inclusive lower bound currently in effect.
    pub fn min(&self) -> C::Repr {
        self.min
    }

    /// Inclusive upper bound currently in effect.
    pub fn max(&self) -> C::Repr {
        self.max
    }

    /// The constraint the bounds are derived from.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Replaces the value, re-validating against the current bounds.
    ///
    /// # Errors
    ///
    /// [`ValueError::OutOfRange`]; the value is unchanged on failure.
    pub fn set_value(&mut self, value: C::Repr) -> Result<(), ValueError> {
        self.set_value_with(value, self.constraint.clone())
    }

    /// Replaces the value from a wire literal.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] or [`ValueError::OutOfRange`]; the value is
    /// unchanged on failure.
    pub fn set_value_str(&mut self, s: &str) -> Result<(), ValueError> {
        let value = self.constraint.parse_literal(s)?;
        self.set_value(value)
    }

    /// Replaces both the value and the constraint. Bounds are recomputed
    /// from the new constraint before the value is checked against them.
    ///
    /// # Errors
    ///
    /// As [`Bounded::new`]; `self` is unchanged on failure.
    pub fn set_value_with(&mut self, value: C::Repr, constraint: C) -> Result<(), ValueError> {
        *self = Self::new(value, constraint)?;
        Ok(())
    }

    /// Establishes new inclusive bounds without validating the value.
    ///
    /// Callers must follow with [`Bounded::check`] and discard `self` if it
    /// fails; this is only reachable from transactional wrappers.
    pub(crate) fn set_min_max(&mut self, min: C::Repr, max: C::Repr) {
        self.min = min;
        self.max = max;
    }

    pub(crate) fn constraint_mut(&mut self) -> &mut C {
        &mut self.constraint
    }

    /// Re-derives the bounds from the constraint, then re-validates the
    /// value against them.
    ///
    /// # Errors
    ///
    /// [`ValueError::ConstraintViolation`] or [`ValueError::OutOfRange`].
    pub fn check(&mut self) -> Result<(), ValueError> {
        let (min, max) = self.constraint.bounds()?;
        self.set_min_max(min, max);
        self.check_value()
    }

    /// Whether `value` lies within the current bounds.
    pub fn contains(&self, value: &C::Repr) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// The canonical wire form of the value.
    pub fn canonical_string(&self) -> String {
        self.constraint.format(&self.value)
    }

    fn check_value(&self) -> Result<(), ValueError> {
        if self.contains(&self.value) {
            return Ok(());
        }
        tracing::debug!(
            type_name = C::TYPE_NAME,
            value = %self.value,
            min = %self.min,
            max = %self.max,
            "value outside bounds"
        );
        Err(ValueError::out_of_range(
            C::TYPE_NAME,
            self.constraint.format(&self.value),
            self.constraint.format(&self.min),
            self.constraint.format(&self.max),
        ))
    }
}

impl<C: Constraint> fmt::Display for Bounded<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

/// Two bounded values are equal iff their values are equal; the bounds
/// in effect do not participate.
impl<C: Constraint> PartialEq for Bounded<C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<C: Constraint> Eq for Bounded<C> where C::Repr: Eq {}

impl<C: Constraint> Hash for Bounded<C>
where
    C::Repr: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
