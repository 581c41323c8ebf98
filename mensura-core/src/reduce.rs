//! Reduction combinators over quantity sequences.
//!
//! The reducers here fold a sequence of same-dimension quantities — mixed
//! units included — into a single quantity expressed in a caller-chosen
//! target unit. Every element is converted into the target unit *before*
//! accumulation. For ratio units the distinction is cosmetic; for interval
//! units it is the whole point: adding raw Celsius readings is not
//! physically meaningful, so `[1 °C, 1 K]` summed into Celsius is
//! `1 + (1 − 273.15) = −271.15 °C`, not `2`. Convert-then-accumulate is not
//! equivalent to accumulate-then-convert for affine units, and the former
//! is what these combinators implement.

use log::trace;

use crate::dimension::Dimension;
use crate::error::ArithmeticError;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// A binary reducer that sums quantities in `target`'s basis.
///
/// Both arguments are converted into `target` first and the converted raw
/// values are added linearly, so the running total is always expressed in
/// `target`. The reducer is associative under that contract and fits
/// anywhere a fallible fold does.
///
/// ```rust
/// use mensura_core::{sum, Quantity};
/// use mensura_core::units::temperature::{CELSIUS, KELVIN};
/// use rust_decimal_macros::dec;
///
/// let op = sum(CELSIUS);
/// let total = op(Quantity::new(1i32, CELSIUS), Quantity::new(1i32, KELVIN))?;
/// assert_eq!(total.unit(), CELSIUS);
/// assert_eq!(total.value().to_decimal()?, dec!(-271.15));
/// # Ok::<(), mensura_core::ArithmeticError>(())
/// ```
pub fn sum<D: Dimension>(
    target: Unit<D>,
) -> impl Fn(Quantity<D>, Quantity<D>) -> Result<Quantity<D>, ArithmeticError> {
    move |acc, next| acc.to(target)?.add(next.to(target)?)
}

/// Folds `quantities` with [`sum`], reporting the total in `target`.
///
/// Returns `None` for an empty sequence. A single-element sequence is
/// converted into `target` like any other.
pub fn sum_into<D, I>(
    quantities: I,
    target: Unit<D>,
) -> Option<Result<Quantity<D>, ArithmeticError>>
where
    D: Dimension,
    I: IntoIterator<Item = Quantity<D>>,
{
    trace!("summing into {}", target);
    let op = sum(target);
    let mut iter = quantities.into_iter();
    let mut acc = match iter.next()?.to(target) {
        Ok(q) => q,
        Err(e) => return Some(Err(e)),
    };
    for q in iter {
        acc = match op(acc, q) {
            Ok(q) => q,
            Err(e) => return Some(Err(e)),
        };
    }
    Some(Ok(acc))
}

/// Folds `quantities` to the smallest element, compared and reported in
/// `target`'s basis.
///
/// Conversion before comparison is what makes the comparison physically
/// meaningful across mixed and affine units. Returns `None` for an empty
/// sequence; elements whose converted values are unordered (NaN) never win.
pub fn min_into<D, I>(
    quantities: I,
    target: Unit<D>,
) -> Option<Result<Quantity<D>, ArithmeticError>>
where
    D: Dimension,
    I: IntoIterator<Item = Quantity<D>>,
{
    extreme_into(quantities, target, core::cmp::Ordering::Less)
}

/// Folds `quantities` to the largest element, compared and reported in
/// `target`'s basis. Same contract as [`min_into`].
pub fn max_into<D, I>(
    quantities: I,
    target: Unit<D>,
) -> Option<Result<Quantity<D>, ArithmeticError>>
where
    D: Dimension,
    I: IntoIterator<Item = Quantity<D>>,
{
    extreme_into(quantities, target, core::cmp::Ordering::Greater)
}

fn extreme_into<D, I>(
    quantities: I,
    target: Unit<D>,
    keep: core::cmp::Ordering,
) -> Option<Result<Quantity<D>, ArithmeticError>>
where
    D: Dimension,
    I: IntoIterator<Item = Quantity<D>>,
{
    let mut iter = quantities.into_iter();
    let mut best = match iter.next()?.to(target) {
        Ok(q) => q,
        Err(e) => return Some(Err(e)),
    };
    for q in iter {
        let q = match q.to(target) {
            Ok(q) => q,
            Err(e) => return Some(Err(e)),
        };
        if q.partial_cmp(&best) == Some(keep) {
            best = q;
        }
    }
    Some(Ok(best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericValue;
    use crate::units::resistance::{MILLIOHM, OHM};
    use crate::units::temperature::{Temperature, CELSIUS, KELVIN};
    use approx::assert_abs_diff_eq;
    use rust_decimal_macros::dec;

    fn temps() -> Vec<Quantity<Temperature>> {
        vec![Quantity::new(1i32, CELSIUS), Quantity::new(1i32, KELVIN)]
    }

    #[test]
    fn sum_of_temperatures_into_celsius() {
        let total = sum_into(temps(), CELSIUS).unwrap().unwrap();
        assert_eq!(total.unit(), CELSIUS);
        assert_eq!(total.value(), NumericValue::Dec(dec!(-271.15)));
    }

    #[test]
    fn sum_of_temperatures_into_kelvin() {
        let total = sum_into(temps(), KELVIN).unwrap().unwrap();
        assert_eq!(total.unit(), KELVIN);
        assert_eq!(total.value(), NumericValue::Dec(dec!(275.15)));
    }

    #[test]
    fn kelvin_total_converts_back_to_celsius() {
        let total = sum_into(temps(), KELVIN).unwrap().unwrap();
        let celsius = total.to(CELSIUS).unwrap();
        assert_eq!(celsius.value(), NumericValue::Dec(dec!(2)));
        assert_abs_diff_eq!(total.double_value(CELSIUS), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn sum_is_not_accumulate_then_convert_for_affine_units() {
        // Adding the raw values (1 + 1 = 2) and converting once would give
        // 2 °C; converting first gives the physically meaningful total.
        let total = sum_into(temps(), CELSIUS).unwrap().unwrap();
        assert_ne!(total.value(), NumericValue::I32(2));
    }

    #[test]
    fn sum_of_mixed_ratio_units() {
        let parts = vec![Quantity::new(1i32, MILLIOHM), Quantity::new(1i32, OHM)];
        let total = sum_into(parts, OHM).unwrap().unwrap();
        assert_eq!(total.unit(), OHM);
        assert_eq!(total.value(), NumericValue::Dec(dec!(1.001)));
    }

    #[test]
    fn reducer_composes_with_a_plain_fold() {
        let op = sum(OHM);
        let parts = [Quantity::new(250i32, MILLIOHM); 4];
        let total = parts
            .into_iter()
            .try_fold(Quantity::zero(OHM), |acc, q| op(acc, q))
            .unwrap();
        assert_eq!(total.value(), NumericValue::Dec(dec!(1.000)));
    }

    #[test]
    fn single_element_is_converted_into_the_target() {
        let only = vec![Quantity::new(2i32, OHM)];
        let total = sum_into(only, MILLIOHM).unwrap().unwrap();
        assert_eq!(total, Quantity::new(2000i32, MILLIOHM));
    }

    #[test]
    fn empty_sequence_reduces_to_none() {
        let none: Vec<Quantity<Temperature>> = Vec::new();
        assert!(sum_into(none, KELVIN).is_none());
    }

    #[test]
    fn min_and_max_compare_in_the_target_basis() {
        // 1 °C is 274.15 K, so 1 K is the colder reading even though the
        // raw values are equal.
        let min = min_into(temps(), KELVIN).unwrap().unwrap();
        assert_eq!(min.value(), NumericValue::I32(1));
        let max = max_into(temps(), KELVIN).unwrap().unwrap();
        assert_eq!(max.value(), NumericValue::Dec(dec!(274.15)));
    }
}
