//! Typed quantities with overflow-safe, exactly-scaled unit arithmetic.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the
//! full API from `mensura-core` plus the predefined unit catalogs
//! (resistance, temperature, time, length).
//!
//! The core idea: a value is always a `Quantity<D>`, where `D` is a
//! dimension tag checked at compile time and the unit is a runtime value
//! inside that dimension. Arithmetic preserves the numeric representation
//! the caller chose, detects overflow instead of wrapping, and applies
//! exact ratio or affine conversion math when operands disagree on units.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add ohms to
//!   seconds; it does not compile).
//! - Makes unit conversion explicit, exact, and checked
//!   ([`Quantity::to`]).
//! - Resolves mixed-scale sums deterministically, preferring the smaller
//!   unit and falling back to the larger one on overflow
//!   ([`Quantity::add`]).
//! - Reduces mixed-unit sequences — interval units included — into a
//!   caller-chosen unit ([`sum`], [`sum_into`], [`min_into`],
//!   [`max_into`]).
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{Quantity, resistance::{MILLIOHM, OHM}};
//!
//! let a = Quantity::new(1i16, MILLIOHM);
//! let b = Quantity::new(1i16, OHM);
//! assert_eq!(a.add(b)?, Quantity::new(1001i16, MILLIOHM));
//! # Ok::<(), mensura::ArithmeticError>(())
//! ```
//!
//! Interval units convert before they accumulate:
//!
//! ```rust
//! use mensura::{sum_into, Quantity};
//! use mensura::temperature::{CELSIUS, KELVIN};
//! use rust_decimal_macros::dec;
//!
//! let readings = vec![
//!     Quantity::new(1i32, CELSIUS),
//!     Quantity::new(1i32, KELVIN),
//! ];
//! let total = sum_into(readings, KELVIN).expect("non-empty")?;
//! assert_eq!(total.to(CELSIUS)?.value().to_decimal()?, dec!(2));
//! # Ok::<(), mensura::ArithmeticError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::Quantity;
//! use mensura::resistance::OHM;
//! use mensura::time::SECOND;
//!
//! let r = Quantity::new(1i16, OHM);
//! let t = Quantity::new(1i16, SECOND);
//! let _ = r.add(t); // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the
//! crate root for convenience):
//!
//! - `mensura::resistance` (ohm and its prefixed multiples)
//! - `mensura::temperature` (kelvin, degree Celsius)
//! - `mensura::time` (millisecond through week)
//! - `mensura::length` (millimetre through kilometre)
//! - `mensura::prefix` (exact SI prefix factors for defining your own
//!   units)
//!
//! # Feature flags
//!
//! - `serde`: enables serialization support in `mensura-core`.
//!
//! # Panics and errors
//!
//! Fallible operations return [`ArithmeticError`] and never panic, retry,
//! or clamp. Float-backed arithmetic follows IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between
//! minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

pub use mensura_core::units::length;
pub use mensura_core::units::prefix;
pub use mensura_core::units::resistance;
pub use mensura_core::units::temperature;
pub use mensura_core::units::time;
