//! Unit conversion transforms.
//!
//! A [`Converter`] carries the transform taking raw values from one unit's
//! basis to another's. It is built from the two unit values alone — there
//! is no registry — and applies in three lanes:
//!
//! - exact decimal for integer- and decimal-backed values, as
//!   multiply-then-divide so terminating conversions stay exact,
//! - IEEE-754 for float-backed values,
//! - a truncating variant used by scale resolution, which forces the result
//!   back into the source's bounded width or reports failure.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::dimension::Dimension;
use crate::error::ArithmeticError;
use crate::numeric::{IntWidth, NumericValue};
use crate::unit::Unit;

/// The shape of a converter's transform over a raw value, as reported by
/// [`Converter::kind`]: `raw' = raw * factor + offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConverterKind {
    /// Pure rescaling between ratio units.
    Linear {
        /// Ratio of the source scale to the target scale.
        factor: Decimal,
    },
    /// Rescaling plus shift, for interval units such as degree Celsius.
    Affine {
        /// Ratio of the source scale to the target scale.
        factor: Decimal,
        /// Shift expressed in the target unit.
        offset: Decimal,
    },
}

/// Numeric transform from one unit's basis to another's within a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Converter {
    from_scale: Decimal,
    from_offset: Decimal,
    to_scale: Decimal,
    to_offset: Decimal,
}

impl Converter {
    /// The transform taking raw values in `from` to raw values in `to`.
    pub fn between<D: Dimension>(from: Unit<D>, to: Unit<D>) -> Self {
        Self {
            from_scale: from.scale(),
            from_offset: from.offset(),
            to_scale: to.scale(),
            to_offset: to.offset(),
        }
    }

    /// Describes the transform as a single factor (and offset, when the
    /// endpoints differ in origin).
    ///
    /// The collapsed factor is descriptive: application always goes through
    /// the exact multiply-then-divide pipeline. Collapsing fails when the
    /// factor itself leaves the decimal range, e.g. across more than 28
    /// decades of prefix.
    pub fn kind(&self) -> Result<ConverterKind, ArithmeticError> {
        let factor = self
            .from_scale
            .checked_div(self.to_scale)
            .ok_or(ArithmeticError::Unrepresentable)?;
        if factor.is_zero() {
            // Underflow: unit scales are never zero.
            return Err(ArithmeticError::Unrepresentable);
        }
        let offset = self
            .from_offset
            .checked_sub(self.to_offset)
            .and_then(|shift| shift.checked_div(self.to_scale))
            .ok_or(ArithmeticError::Unrepresentable)?;
        Ok(if offset.is_zero() {
            ConverterKind::Linear { factor }
        } else {
            ConverterKind::Affine { factor, offset }
        })
    }

    /// True when applying the converter returns its input unchanged.
    pub fn is_identity(&self) -> bool {
        self.from_scale == self.to_scale && self.from_offset == self.to_offset
    }

    /// Value-preserving application.
    ///
    /// Integer-backed values convert through exact decimal arithmetic; the
    /// original width is kept when the result is integral and in range,
    /// otherwise the result is promoted to decimal rather than truncated.
    pub fn apply(&self, value: NumericValue) -> Result<NumericValue, ArithmeticError> {
        if self.is_identity() {
            return Ok(value);
        }
        let width = match value {
            NumericValue::F64(v) => return Ok(NumericValue::F64(self.apply_f64(v))),
            NumericValue::Dec(v) => return self.apply_exact(v).map(NumericValue::Dec),
            NumericValue::I16(_) => IntWidth::W16,
            NumericValue::I32(_) => IntWidth::W32,
            NumericValue::I64(_) => IntWidth::W64,
        };
        let exact = self.apply_exact(value.to_decimal()?)?;
        Ok(refit_integer(exact, width))
    }

    /// Application that keeps integer-backed values in their bounded width,
    /// truncating toward zero and failing with `Unrepresentable` when the
    /// converted value does not fit.
    pub fn apply_trunc(&self, value: NumericValue) -> Result<NumericValue, ArithmeticError> {
        if self.is_identity() {
            return Ok(value);
        }
        let width = match value {
            NumericValue::F64(v) => return Ok(NumericValue::F64(self.apply_f64(v))),
            NumericValue::Dec(v) => return self.apply_exact(v).map(NumericValue::Dec),
            NumericValue::I16(_) => IntWidth::W16,
            NumericValue::I32(_) => IntWidth::W32,
            NumericValue::I64(_) => IntWidth::W64,
        };
        let exact = self.apply_exact(value.to_decimal()?)?;
        trunc_integer(exact, width)
    }

    /// Application in the `f64` lane. Total: out-of-range intermediates
    /// follow IEEE-754 into infinities instead of failing.
    pub fn apply_f64(&self, value: f64) -> f64 {
        let base = value * self.from_scale.to_f64().unwrap_or(f64::NAN)
            + self.from_offset.to_f64().unwrap_or(f64::NAN);
        (base - self.to_offset.to_f64().unwrap_or(f64::NAN))
            / self.to_scale.to_f64().unwrap_or(f64::NAN)
    }

    // base = raw * from_scale + from_offset; raw' = (base - to_offset) / to_scale.
    // Dividing last keeps every terminating conversion exact.
    fn apply_exact(&self, value: Decimal) -> Result<Decimal, ArithmeticError> {
        let base = value
            .checked_mul(self.from_scale)
            .and_then(|b| b.checked_add(self.from_offset))
            .ok_or(ArithmeticError::Unrepresentable)?;
        base.checked_sub(self.to_offset)
            .and_then(|b| b.checked_div(self.to_scale))
            .ok_or(ArithmeticError::Unrepresentable)
    }
}

fn refit_integer(exact: Decimal, width: IntWidth) -> NumericValue {
    if exact.is_integer() {
        if let Some(i) = exact.to_i64() {
            if let Ok(v) = NumericValue::narrow(i, width) {
                return v;
            }
        }
    }
    NumericValue::Dec(exact)
}

fn trunc_integer(exact: Decimal, width: IntWidth) -> Result<NumericValue, ArithmeticError> {
    let t = exact
        .trunc()
        .to_i64()
        .ok_or(ArithmeticError::Unrepresentable)?;
    NumericValue::narrow(t, width).map_err(|_| ArithmeticError::Unrepresentable)
}
