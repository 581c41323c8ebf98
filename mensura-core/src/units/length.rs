//! Length units.
//!
//! The canonical unit for this dimension is the SI metre.

use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::prefix;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Millimetre (10⁻³ m).
pub const MILLIMETRE: Unit<Length> = Unit::scaled("mm", prefix::MILLI);

/// Centimetre (10⁻² m).
pub const CENTIMETRE: Unit<Length> = Unit::scaled("cm", prefix::CENTI);

/// Metre (SI base unit).
pub const METRE: Unit<Length> = Unit::base("m");

/// Kilometre (10³ m).
pub const KILOMETRE: Unit<Length> = Unit::scaled("km", prefix::KILO);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn kilometres_to_metres() {
        let km = Quantity::new(2i16, KILOMETRE);
        assert_eq!(km.to(METRE).unwrap(), Quantity::new(2000i16, METRE));
    }

    #[test]
    fn metre_quantities_constructed_apart_are_equal() {
        let a = Quantity::new(1i16, METRE);
        let b = Quantity::new(1i16, METRE);
        assert_eq!(a, b);
    }
}
