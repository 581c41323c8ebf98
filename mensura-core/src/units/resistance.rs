//! Electric resistance units.
//!
//! The canonical unit for this dimension is the ohm (`OHM.scale() == 1`);
//! all other ratios are expressed in ohms.

use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::prefix;

/// Dimension tag for electric resistance.
pub enum ElectricResistance {}
impl Dimension for ElectricResistance {}

/// Ohm (SI derived unit).
pub const OHM: Unit<ElectricResistance> = Unit::base("Ω");

/// Microohm (10⁻⁶ Ω).
pub const MICROOHM: Unit<ElectricResistance> = Unit::scaled("µΩ", prefix::MICRO);

/// Milliohm (10⁻³ Ω).
pub const MILLIOHM: Unit<ElectricResistance> = Unit::scaled("mΩ", prefix::MILLI);

/// Kiloohm (10³ Ω).
pub const KILOOHM: Unit<ElectricResistance> = Unit::scaled("kΩ", prefix::KILO);

/// Megaohm (10⁶ Ω).
pub const MEGAOHM: Unit<ElectricResistance> = Unit::scaled("MΩ", prefix::MEGA);

/// Yottaohm (10²⁴ Ω), large enough to overflow every bounded integer
/// representation when converted down to ohms.
pub const YOTTAOHM: Unit<ElectricResistance> = Unit::scaled("YΩ", prefix::YOTTA);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn ohm_is_canonical() {
        assert_eq!(OHM.scale(), dec!(1));
        assert!(OHM.is_ratio());
    }

    #[test]
    fn prefix_scales() {
        assert_eq!(MILLIOHM.scale(), dec!(0.001));
        assert_eq!(KILOOHM.scale(), dec!(1000));
        assert_eq!(
            YOTTAOHM.scale() / KILOOHM.scale(),
            dec!(1_000_000_000_000_000_000_000)
        );
    }
}
