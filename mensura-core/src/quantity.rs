//! Quantity type and its arithmetic operators.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use log::trace;

use crate::convert::Converter;
use crate::dimension::Dimension;
use crate::error::ArithmeticError;
use crate::numeric::NumericValue;
use crate::unit::Unit;

/// An immutable value paired with its unit of measure.
///
/// `Quantity<D>` is generic over a dimension tag `D`, so only quantities of
/// the same dimension can meet in an operation; the unit itself is a
/// runtime value, which is what lets one collection mix milli-ohms with
/// yotta-ohms. Every operator returns a new quantity — nothing is mutated —
/// and every fallible operator returns a typed error instead of wrapping,
/// clamping, or widening behind the caller's back.
///
/// The backing representation is preserved from construction: a quantity
/// built from an `i16` stays 16-bit-backed, with 16-bit overflow detection,
/// until an operation explicitly promotes it (see [`NumericValue`]).
///
/// # Examples
///
/// ```rust
/// use mensura_core::Quantity;
/// use mensura_core::units::resistance::{MILLIOHM, OHM};
///
/// let a = Quantity::new(1i16, MILLIOHM);
/// let b = Quantity::new(1i16, OHM);
/// let sum = a.add(b)?;
/// assert_eq!(sum, Quantity::new(1001i16, MILLIOHM));
/// # Ok::<(), mensura_core::ArithmeticError>(())
/// ```
pub struct Quantity<D: Dimension> {
    value: NumericValue,
    unit: Unit<D>,
}

impl<D: Dimension> Quantity<D> {
    /// Creates a quantity from a raw value and unit. The value's
    /// representation is preserved exactly: `i16` in, 16-bit-backed out.
    pub fn new(value: impl Into<NumericValue>, unit: Unit<D>) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    /// The zero quantity of `unit`, in the narrowest representation.
    pub fn zero(unit: Unit<D>) -> Self {
        Self::new(0i16, unit)
    }

    /// The unit quantity of `unit`, in the narrowest representation.
    pub fn one(unit: Unit<D>) -> Self {
        Self::new(1i16, unit)
    }

    /// The raw numeric value, in whatever unit this quantity carries.
    pub const fn value(&self) -> NumericValue {
        self.value
    }

    /// The unit the value is expressed in.
    pub const fn unit(&self) -> Unit<D> {
        self.unit
    }

    /// Adds two quantities of the same dimension.
    ///
    /// With a shared unit the sum is computed in the promoted
    /// representation and an out-of-range result is a hard
    /// [`ArithmeticError::Overflow`].
    ///
    /// With different units the result is reported in the smaller-scaled
    /// unit when the sum fits there, otherwise in the larger-scaled unit:
    /// the larger-scaled operand is first converted down (so
    /// `1 mΩ + 1 Ω == 1001 mΩ`), and only if that value or the sum escapes
    /// the bounded representation is the smaller-scaled operand converted
    /// up instead — where truncation may make it vanish entirely, which is
    /// why a yotta-ohm quantity absorbs ohm-sized additions unchanged.
    pub fn add(self, other: Self) -> Result<Self, ArithmeticError> {
        if self.unit == other.unit {
            let value = self.value.checked_add(other.value)?;
            return Ok(Self {
                value,
                unit: self.unit,
            });
        }
        let preferred = if other.unit.scale() < self.unit.scale() {
            other.unit
        } else {
            self.unit
        };
        let fallback = if preferred == self.unit {
            other.unit
        } else {
            self.unit
        };
        match self.add_in(other, preferred) {
            Ok(sum) => Ok(sum),
            Err(_) => {
                trace!(
                    "sum does not fit in {}; retrying in {}",
                    preferred,
                    fallback
                );
                self.add_in(other, fallback)
            }
        }
    }

    // Aligns both operands into `unit` (truncating, width-checked) and adds
    // there.
    fn add_in(self, other: Self, unit: Unit<D>) -> Result<Self, ArithmeticError> {
        let a = Self::aligned_value(self, unit)?;
        let b = Self::aligned_value(other, unit)?;
        Ok(Self {
            value: a.checked_add(b)?,
            unit,
        })
    }

    fn aligned_value(q: Self, unit: Unit<D>) -> Result<NumericValue, ArithmeticError> {
        if q.unit == unit {
            Ok(q.value)
        } else {
            Converter::between(q.unit, unit).apply_trunc(q.value)
        }
    }

    /// Subtracts `other`, with the same scale resolution and overflow
    /// policy as [`add`](Self::add).
    pub fn subtract(self, other: Self) -> Result<Self, ArithmeticError> {
        self.add(other.negate()?)
    }

    /// The additive inverse, in the same unit and representation.
    pub fn negate(self) -> Result<Self, ArithmeticError> {
        Ok(Self {
            value: self.value.checked_neg()?,
            unit: self.unit,
        })
    }

    /// Multiplies the raw values in the promoted representation, escalating
    /// integer products to wider representations so they stay exact.
    ///
    /// The result carries the left operand's unit tag; tracking the product
    /// dimension (ohm squared and the like) is unit-algebra territory and
    /// out of scope here.
    pub fn multiply(self, other: Self) -> Result<Self, ArithmeticError> {
        Ok(Self {
            value: self.value.checked_mul(other.value)?,
            unit: self.unit,
        })
    }

    /// Divides the raw values in the promoted representation: truncating
    /// for integers (`3 Ω / 2 Ω == 1`), real-valued once a float or decimal
    /// is involved.
    ///
    /// As with [`multiply`](Self::multiply), the quotient keeps the left
    /// operand's unit tag.
    pub fn divide(self, other: Self) -> Result<Self, ArithmeticError> {
        Ok(Self {
            value: self.value.checked_div(other.value)?,
            unit: self.unit,
        })
    }

    /// Converts to an equivalent quantity in `target`, preserving the value.
    ///
    /// Integer-backed quantities keep their representation when the
    /// converted value is integral and in range; otherwise the result is
    /// promoted to exact decimal, never truncated. Terminating conversions
    /// round-trip exactly.
    pub fn to(self, target: Unit<D>) -> Result<Self, ArithmeticError> {
        if self.unit == target {
            return Ok(self);
        }
        let value = Converter::between(self.unit, target).apply(self.value)?;
        Ok(Self {
            value,
            unit: target,
        })
    }

    /// Converts to `unit` and narrows to `i64`, truncating toward zero.
    /// Matches the two-step `to(unit)`-then-narrow path.
    pub fn long_value(&self, unit: Unit<D>) -> Result<i64, ArithmeticError> {
        Converter::between(self.unit, unit)
            .apply(self.value)?
            .to_i64_trunc()
    }

    /// Converts to `unit` in the `f64` lane. Total: out-of-range values
    /// follow IEEE-754 into infinities.
    pub fn double_value(&self, unit: Unit<D>) -> f64 {
        Converter::between(self.unit, unit).apply_f64(self.value.to_f64())
    }
}

// Manual trait impls: the derives would put bounds on the phantom tag `D`.

impl<D: Dimension> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

/// Structural equality: the units must be value-equal and the numeric
/// values equal under cross-representation comparison. There is no implicit
/// unit conversion — `1 Ω` and `1000 mΩ` are not equal until one side is
/// explicitly converted.
impl<D: Dimension> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl<D: Dimension> Eq for Quantity<D> {}

impl<D: Dimension> Hash for Quantity<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit.hash(state);
        self.value.hash(state);
    }
}

/// Ordering is defined only between quantities of the same unit; differing
/// units compare as `None`, mirroring the equality contract.
impl<D: Dimension> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit != other.unit {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension> fmt::Debug for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &self.unit)
            .finish()
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> serde::Serialize for Quantity<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", self.unit.symbol())?;
        state.end()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::units::resistance::OHM;
    use rust_decimal_macros::dec;

    #[test]
    fn quantity_serializes_value_and_symbol() {
        let q = Quantity::new(3i16, OHM);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":{"I16":3},"unit":"Ω"}"#);
    }

    #[test]
    fn unit_serializes_its_transform() {
        let json = serde_json::to_string(&OHM).unwrap();
        assert!(json.contains(r#""symbol":"Ω""#));
        assert!(json.contains(r#""scale""#));
    }

    #[test]
    fn numeric_value_roundtrips() {
        let v = NumericValue::Dec(dec!(1.5));
        let json = serde_json::to_string(&v).unwrap();
        let back: NumericValue = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::resistance::{ElectricResistance, KILOOHM, MILLIOHM, OHM, YOTTAOHM};
    use crate::units::time::{DAY, HOUR};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn ohm(v: i16) -> Quantity<ElectricResistance> {
        Quantity::new(v, OHM)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Addition and scale resolution
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn addition_with_same_unit_keeps_unit() {
        let sum = ohm(1).add(ohm(2)).unwrap();
        assert_eq!(sum, ohm(3));
    }

    #[test]
    fn addition_with_same_unit_overflow_is_an_error() {
        assert_eq!(ohm(1).add(ohm(i16::MAX)), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn addition_with_larger_scale_keeps_smaller_scale() {
        let sum = Quantity::new(1i16, MILLIOHM).add(ohm(1)).unwrap();
        assert_eq!(sum, Quantity::new(1001i16, MILLIOHM));
    }

    #[test]
    fn addition_with_smaller_scale_casts_to_smaller_scale() {
        let sum = ohm(1).add(Quantity::new(1i16, MILLIOHM)).unwrap();
        assert_eq!(sum, Quantity::new(1001i16, MILLIOHM));
    }

    #[test]
    fn addition_with_overflowing_larger_scale_casts_to_larger_scale() {
        let one_yotta = Quantity::new(1i16, YOTTAOHM);
        assert_eq!(ohm(1).add(one_yotta).unwrap(), one_yotta);
    }

    #[test]
    fn addition_with_underflowing_smaller_scale_keeps_larger_scale() {
        let one_yotta = Quantity::new(1i16, YOTTAOHM);
        assert_eq!(one_yotta.add(ohm(1)).unwrap(), one_yotta);
    }

    #[test]
    fn addition_promotes_scale_when_the_sum_no_longer_fits() {
        let almost_max = ohm(i16::MAX - 999);
        let sum = almost_max.add(Quantity::new(1i16, KILOOHM)).unwrap();
        assert_eq!(sum, Quantity::new(i16::MAX / 1000, KILOOHM));
    }

    #[test]
    fn addition_keeps_scale_while_the_sum_still_fits() {
        let almost_max = ohm(i16::MAX - 1000);
        let sum = almost_max.add(Quantity::new(1i16, KILOOHM)).unwrap();
        assert_eq!(sum, ohm(i16::MAX));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subtraction, multiplication, division
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn subtraction_subtracts() {
        assert_eq!(ohm(2).subtract(ohm(1)).unwrap(), ohm(1));
    }

    #[test]
    fn subtraction_across_scales_lands_in_the_smaller_unit() {
        let diff = ohm(1).subtract(Quantity::new(1i16, MILLIOHM)).unwrap();
        assert_eq!(diff, Quantity::new(999i16, MILLIOHM));
    }

    #[test]
    fn multiplication_is_exact() {
        let product = ohm(3).multiply(ohm(2)).unwrap();
        assert_eq!(product.value(), NumericValue::I16(6));
        assert_eq!(product.unit(), OHM);
    }

    #[test]
    fn division_truncates_for_integers() {
        let quotient = ohm(3).divide(ohm(2)).unwrap();
        assert_eq!(quotient.value(), NumericValue::I16(1));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(ohm(3).divide(ohm(0)), Err(ArithmeticError::DivisionByZero));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion and narrowing
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn conversion_roundtrip_preserves_integers() {
        let day = Quantity::new(1i16, DAY);
        let hours = day.to(HOUR).unwrap();
        assert_eq!(hours, Quantity::new(24i16, HOUR));
        assert_eq!(hours.to(DAY).unwrap(), day);
    }

    #[test]
    fn conversion_roundtrip_preserves_floats() {
        let day = Quantity::new(1.0, DAY);
        let hours = day.to(HOUR).unwrap();
        assert_abs_diff_eq!(hours.value().to_f64(), 24.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hours.to(DAY).unwrap().value().to_f64(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn long_value_converts_then_truncates() {
        let days = Quantity::new(3i16, DAY);
        assert_eq!(days.long_value(HOUR), Ok(72));
    }

    #[test]
    fn double_value_converts_in_the_float_lane() {
        let days = Quantity::new(3i16, DAY);
        assert_abs_diff_eq!(days.double_value(HOUR), 72.0, epsilon = 1e-12);
    }

    #[test]
    fn narrowing_agrees_with_the_two_step_path() {
        let q = Quantity::new(30_000i16, OHM);
        let two_step = q.to(MILLIOHM).unwrap().value().to_i64_trunc().unwrap();
        assert_eq!(q.long_value(MILLIOHM), Ok(two_step));
        assert_eq!(two_step, 30_000_000);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Equality, ordering, hashing
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_requires_the_same_unit() {
        assert_eq!(ohm(1), ohm(1));
        assert_ne!(ohm(1), Quantity::new(1000i16, MILLIOHM));
        assert_eq!(
            Quantity::new(1000i16, MILLIOHM),
            ohm(1).to(MILLIOHM).unwrap()
        );
    }

    #[test]
    fn equality_crosses_representations() {
        assert_eq!(ohm(1), Quantity::new(1i32, OHM));
        assert_eq!(Quantity::new(1.0, OHM), Quantity::new(1i64, OHM));
    }

    #[test]
    fn quantities_work_as_map_keys() {
        let mut prices: HashMap<Quantity<ElectricResistance>, &str> = HashMap::new();
        prices.insert(ohm(1), "one ohm");
        prices.insert(Quantity::new(1i16, KILOOHM), "one kiloohm");
        assert_eq!(prices.get(&Quantity::new(1i32, OHM)), Some(&"one ohm"));
        assert_eq!(prices.len(), 2);
    }

    #[test]
    fn ordering_is_defined_within_a_unit_only() {
        assert!(ohm(1) < ohm(2));
        assert_eq!(ohm(1).partial_cmp(&Quantity::new(1i16, KILOOHM)), None);
    }

    #[test]
    fn display_shows_value_and_symbol() {
        assert_eq!(format!("{}", ohm(3)), "3 Ω");
        assert_eq!(format!("{}", Quantity::new(1i16, KILOOHM)), "1 kΩ");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_same_unit_add_matches_plain_sum(a in -16_000i16..16_000, b in -16_000i16..16_000) {
            let sum = ohm(a).add(ohm(b)).unwrap();
            prop_assert_eq!(sum, ohm(a + b));
        }

        #[test]
        fn prop_cross_scale_add_is_order_independent(
            a in -1_000_000i32..1_000_000,
            b in -1_000_000i32..1_000_000,
        ) {
            let milli = Quantity::new(a, MILLIOHM);
            let whole = Quantity::new(b, OHM);
            prop_assert_eq!(milli.add(whole).unwrap(), whole.add(milli).unwrap());
        }

        #[test]
        fn prop_subtract_inverts_add(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let x = Quantity::new(a, OHM);
            let y = Quantity::new(b, OHM);
            let roundtrip = x.add(y).unwrap().subtract(y).unwrap();
            prop_assert!((roundtrip.value().to_f64() - a).abs() < 1e-6);
        }
    }
}
