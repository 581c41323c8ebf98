//! Time units.
//!
//! The canonical unit for this dimension is the SI second. Civil units use
//! the conventional mapping `1 d = 86 400 s` (mean solar day; leap seconds
//! ignored).

use rust_decimal_macros::dec;

use crate::dimension::Dimension;
use crate::unit::Unit;
use crate::units::prefix;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Millisecond (10⁻³ s).
pub const MILLISECOND: Unit<Time> = Unit::scaled("ms", prefix::MILLI);

/// Second (SI base unit).
pub const SECOND: Unit<Time> = Unit::base("s");

/// Minute (60 s).
pub const MINUTE: Unit<Time> = Unit::scaled("min", dec!(60));

/// Hour (3 600 s).
pub const HOUR: Unit<Time> = Unit::scaled("h", dec!(3_600));

/// Mean solar day (86 400 s).
pub const DAY: Unit<Time> = Unit::scaled("d", dec!(86_400));

/// Week (604 800 s).
pub const WEEK: Unit<Time> = Unit::scaled("wk", dec!(604_800));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn one_day_is_24_hours() {
        let day = Quantity::new(1i16, DAY);
        assert_eq!(day.to(HOUR).unwrap(), Quantity::new(24i16, HOUR));
    }

    #[test]
    fn one_week_is_seven_days() {
        let week = Quantity::new(1i16, WEEK);
        assert_eq!(week.to(DAY).unwrap(), Quantity::new(7i16, DAY));
    }

    #[test]
    fn milliseconds_to_seconds() {
        let ms = Quantity::new(1500i32, MILLISECOND);
        assert_abs_diff_eq!(ms.double_value(SECOND), 1.5, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_day_second(d in -1e6f64..1e6) {
            let original = Quantity::new(d, DAY);
            let back = original.to(SECOND).unwrap().to(DAY).unwrap();
            prop_assert!((back.value().to_f64() - d).abs() < 1e-9);
        }

        #[test]
        fn prop_day_second_ratio(d in 1e-6f64..1e6) {
            let day = Quantity::new(d, DAY);
            let sec = day.to(SECOND).unwrap();
            prop_assert!((sec.value().to_f64() / d - 86_400.0).abs() < 1e-6);
        }
    }
}
