//! Temperature units.
//!
//! The canonical unit for this dimension is the kelvin. Degree Celsius is
//! an *affine* unit: same scale, shifted origin (`0 °C = 273.15 K`).
//! Converting between the two therefore adds or removes the offset, and
//! summing absolute temperatures is only meaningful after anchoring every
//! reading to a common zero — see [`sum`](crate::sum).
//!
//! Fahrenheit is deliberately absent: its scale (5/9) is not a terminating
//! decimal, so it cannot join the exact-conversion contract the rest of
//! the catalog upholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::dimension::Dimension;
use crate::unit::Unit;

/// Dimension tag for thermodynamic temperature.
pub enum Temperature {}
impl Dimension for Temperature {}

/// Kelvin (SI base unit).
pub const KELVIN: Unit<Temperature> = Unit::base("K");

/// Degree Celsius (`K − 273.15`).
pub const CELSIUS: Unit<Temperature> = Unit::affine("°C", Decimal::ONE, dec!(273.15));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericValue;
    use crate::quantity::Quantity;

    #[test]
    fn celsius_is_affine() {
        assert!(KELVIN.is_ratio());
        assert!(!CELSIUS.is_ratio());
        assert_eq!(CELSIUS.scale(), KELVIN.scale());
    }

    #[test]
    fn water_freezes_at_273_15_kelvin() {
        let freezing = Quantity::new(0i32, CELSIUS);
        let kelvin = freezing.to(KELVIN).unwrap();
        assert_eq!(kelvin.value(), NumericValue::Dec(dec!(273.15)));
    }

    #[test]
    fn absolute_zero_roundtrip() {
        let zero = Quantity::new(0.0, KELVIN);
        let celsius = zero.to(CELSIUS).unwrap();
        assert_eq!(celsius.value().to_f64(), -273.15);
        assert_eq!(celsius.to(KELVIN).unwrap().value().to_f64(), 0.0);
    }
}
