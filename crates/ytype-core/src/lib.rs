#![deny(missing_docs)]

//! # ytype-core — Schema-Constrained Scalar Values
//!
//! Value types for data modelled by YANG and carried as text by a
//! management protocol. Every type moves between a canonical wire string
//! and a validated in-memory form, and never holds an invalid value.
//!
//! ## Key Design Principles
//!
//! 1. **One bounds discipline.** Every numeric type is a [`Bounded`] over a
//!    [`Constraint`] that derives its inclusive bounds. Bounds are derived
//!    before every check, so decimal64's `fraction-digits` is validated and
//!    applied before its value is.
//!
//! 2. **Constraints arrive out-of-band.** Bit widths are type parameters,
//!    `fraction-digits` and `range` are plain arguments or a [`LeafType`]
//!    descriptor. Nothing is inferred from the wire string.
//!
//! 3. **Exact decimals.** `decimal64` parses with exact decimal arithmetic
//!    and renders plain notation. No `f64` between the wire and the value.
//!
//! 4. **Explicit equality.** Which types compare with which is spelled out
//!    as `PartialEq` impls: an [`IdentityRef`] compares with its
//!    [`IdentityStatement`] and with a [`Statement`] tree, nothing else.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Every constructor and setter returns `Result<_, ValueError>`; a failed
//!   setter leaves its target unchanged.
//! - Values are plain owned data: `Send + Sync`, no interior mutability.

pub mod bounded;
pub mod decimal64;
pub mod error;
pub mod identityref;
pub mod integer;
pub mod leaf;
pub mod number;
pub mod statement;

// Re-export primary types for ergonomic imports.
pub use bounded::{Bounded, Constraint};
pub use decimal64::{Decimal64, FractionDigits, MAX_FRACTION_DIGITS, MIN_FRACTION_DIGITS};
pub use error::{ErrorKind, ValueError, YtypeError};
pub use identityref::IdentityRef;
pub use integer::{
    Int16, Int32, Int64, Int8, IntRange, Integer, NativeInt, UInt16, UInt32, UInt64, UInt8,
};
pub use leaf::{LeafType, YangValue};
pub use number::Number;
pub use rust_decimal::Decimal;
pub use statement::{IdentityStatement, ModuleName, ModuleStatement, Statement};
