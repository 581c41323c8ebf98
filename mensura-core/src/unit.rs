//! Runtime unit values.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::dimension::Dimension;

/// A measurement unit within dimension `D`.
///
/// A unit maps its raw values onto the canonical unit of the dimension via
/// `base_value = raw * scale + offset`. Ratio units (metre, kilo-ohm) have a
/// zero offset; interval units such as degree Celsius carry one. `scale`
/// and `offset` are exact decimals so prefix conversions of integer-backed
/// quantities never pick up binary rounding error.
///
/// Units are plain immutable values: value-equal units are interchangeable
/// and there is no registry to consult. The dimension tag `D` lives only in
/// the type, so mixing units of different dimensions does not compile.
///
/// ```rust
/// use mensura_core::{Dimension, Unit};
/// use rust_decimal_macros::dec;
///
/// pub enum Pressure {}
/// impl Dimension for Pressure {}
///
/// pub const PASCAL: Unit<Pressure> = Unit::base("Pa");
/// pub const HECTOPASCAL: Unit<Pressure> = Unit::scaled("hPa", dec!(100));
/// assert_eq!(HECTOPASCAL.scale(), dec!(100));
/// ```
pub struct Unit<D: Dimension> {
    symbol: &'static str,
    scale: Decimal,
    offset: Decimal,
    _dim: PhantomData<D>,
}

impl<D: Dimension> Unit<D> {
    /// The canonical unit of its dimension (`scale == 1`, no offset).
    pub const fn base(symbol: &'static str) -> Self {
        Self::with_transform(symbol, Decimal::ONE, Decimal::ZERO)
    }

    /// A ratio unit: a pure multiple of the canonical unit.
    pub const fn scaled(symbol: &'static str, scale: Decimal) -> Self {
        Self::with_transform(symbol, scale, Decimal::ZERO)
    }

    /// An affine unit: scale plus offset from the canonical unit.
    pub const fn affine(symbol: &'static str, scale: Decimal, offset: Decimal) -> Self {
        Self::with_transform(symbol, scale, offset)
    }

    const fn with_transform(symbol: &'static str, scale: Decimal, offset: Decimal) -> Self {
        Self {
            symbol,
            scale,
            offset,
            _dim: PhantomData,
        }
    }

    /// Printable symbol, shown by [`core::fmt::Display`].
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Multiplier onto the canonical unit of the dimension.
    pub const fn scale(&self) -> Decimal {
        self.scale
    }

    /// Additive shift onto the canonical unit, zero for ratio units.
    pub const fn offset(&self) -> Decimal {
        self.offset
    }

    /// True when the unit is a pure multiple of the canonical unit.
    pub fn is_ratio(&self) -> bool {
        self.offset.is_zero()
    }

    pub(crate) fn scale_f64(&self) -> f64 {
        self.scale.to_f64().unwrap_or(f64::NAN)
    }

    pub(crate) fn offset_f64(&self) -> f64 {
        self.offset.to_f64().unwrap_or(f64::NAN)
    }
}

// Manual trait impls: the derives would put bounds on `D`, which is only a
// phantom tag.

impl<D: Dimension> Clone for Unit<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Unit<D> {}

impl<D: Dimension> PartialEq for Unit<D> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.scale == other.scale && self.offset == other.offset
    }
}

impl<D: Dimension> Eq for Unit<D> {}

impl<D: Dimension> Hash for Unit<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.scale.hash(state);
        self.offset.hash(state);
    }
}

impl<D: Dimension> fmt::Debug for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("symbol", &self.symbol)
            .field("scale", &self.scale)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<D: Dimension> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> serde::Serialize for Unit<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Unit", 3)?;
        state.serialize_field("symbol", self.symbol)?;
        state.serialize_field("scale", &self.scale)?;
        state.serialize_field("offset", &self.offset)?;
        state.end()
    }
}
