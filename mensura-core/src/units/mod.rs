//! Predefined unit catalogs grouped by dimension.
//!
//! Each module defines a dimension tag, its canonical unit, and a set of
//! derived units as plain constants. Constants are ordinary [`Unit`]
//! values; downstream crates define their own dimensions and units the
//! same way, with no registration step.
//!
//! ## Modules
//!
//! - [`prefix`]: exact SI prefix factors (yocto..yotta).
//! - [`resistance`]: electric resistance units (ohm is canonical).
//! - [`temperature`]: temperature units (kelvin is canonical, Celsius is
//!   affine).
//! - [`time`]: time units (SI second is canonical).
//! - [`length`]: length units (SI metre is canonical).
//!
//! [`Unit`]: crate::Unit

pub mod length;
pub mod prefix;
pub mod resistance;
pub mod temperature;
pub mod time;
