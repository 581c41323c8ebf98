//! Core engine for overflow-safe, exactly-scaled typed quantities.
//!
//! `mensura-core` pairs a numeric value with a unit of measure and keeps
//! three promises the ambient numeric tower cannot:
//!
//! - The representation the caller chose is preserved: an `i16`-backed
//!   quantity stays 16-bit-backed until an operation explicitly promotes it
//!   ([`NumericValue`] lists the representations and their promotion
//!   ranks).
//! - Overflow is detected, never wrapped: bounded arithmetic either resolves
//!   to a unit scale where the result fits or fails with a typed
//!   [`ArithmeticError`].
//! - Conversion math is exact where mathematics allows: ratio units
//!   rescale through exact decimals, interval units such as degree Celsius
//!   apply their affine transform, and terminating conversions round-trip
//!   bit-for-bit.
//!
//! Most users should depend on `mensura` (the facade crate) unless they
//! need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (resistance vs time vs
//!   temperature) with runtime units inside each dimension, so one
//!   collection can mix milli-ohms with yotta-ohms.
//! - Deterministic scale resolution for mixed-unit sums, driven by
//!   overflow avoidance ([`Quantity::add`]).
//! - Affine-correct reductions over mixed-unit sequences ([`sum`],
//!   [`sum_into`]).
//!
//! # What this crate does not try to solve
//!
//! - Symbolic unit algebra: products and quotients keep the left operand's
//!   unit tag; tracking `Ω²` is a unit-algebra layer's job.
//! - Parsing or localized formatting of unit symbols.
//! - Rational scale factors that do not terminate in base 10 (so no
//!   Fahrenheit in the built-in catalog).
//!
//! # Quick start
//!
//! Same-unit arithmetic preserves the representation and detects overflow:
//!
//! ```rust
//! use mensura_core::{ArithmeticError, Quantity};
//! use mensura_core::units::resistance::OHM;
//!
//! let a = Quantity::new(3i16, OHM);
//! let b = Quantity::new(2i16, OHM);
//! assert_eq!(a.add(b)?, Quantity::new(5i16, OHM));
//! assert_eq!(
//!     Quantity::new(i16::MAX, OHM).add(b),
//!     Err(ArithmeticError::Overflow)
//! );
//! # Ok::<(), mensura_core::ArithmeticError>(())
//! ```
//!
//! Mixed-unit sums resolve to the scale where the result fits:
//!
//! ```rust
//! use mensura_core::Quantity;
//! use mensura_core::units::resistance::{MILLIOHM, OHM, YOTTAOHM};
//!
//! let milli = Quantity::new(1i16, MILLIOHM);
//! let whole = Quantity::new(1i16, OHM);
//! assert_eq!(whole.add(milli)?, Quantity::new(1001i16, MILLIOHM));
//!
//! // A yotta-ohm reading absorbs ohm-sized additions unchanged.
//! let huge = Quantity::new(1i16, YOTTAOHM);
//! assert_eq!(huge.add(whole)?, huge);
//! # Ok::<(), mensura_core::ArithmeticError>(())
//! ```
//!
//! Reductions convert into the target unit *before* accumulating, which is
//! what makes interval units sum correctly:
//!
//! ```rust
//! use mensura_core::{sum_into, Quantity};
//! use mensura_core::units::temperature::{CELSIUS, KELVIN};
//! use rust_decimal_macros::dec;
//!
//! let readings = vec![
//!     Quantity::new(1i32, CELSIUS),
//!     Quantity::new(1i32, KELVIN),
//! ];
//! let total = sum_into(readings, CELSIUS).expect("non-empty")?;
//! assert_eq!(total.value().to_decimal()?, dec!(-271.15));
//! # Ok::<(), mensura_core::ArithmeticError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`NumericValue`] and
//!   `Serialize` for [`Quantity`] (value plus unit symbol). Quantities are
//!   not deserialized — reconstruct them through [`Quantity::new`] against
//!   a known unit.
//!
//! # Panics and errors
//!
//! Fallible operations return [`ArithmeticError`]; none of them panic,
//! retry, or silently clamp. Float-backed arithmetic follows IEEE-754 (NaN
//! and infinities propagate) and only fails where a float has no exact
//! decimal meaning.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod convert;
mod dimension;
mod error;
mod numeric;
mod quantity;
mod reduce;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use convert::{Converter, ConverterKind};
pub use dimension::Dimension;
pub use error::ArithmeticError;
pub use numeric::NumericValue;
pub use quantity::Quantity;
pub use reduce::{max_into, min_into, sum, sum_into};
pub use unit::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit catalogs (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::length;
pub use units::prefix;
pub use units::resistance;
pub use units::temperature;
pub use units::time;
