//! Numeric representations backing a quantity.
//!
//! Every quantity stores its raw number as a [`NumericValue`], a closed
//! union over the supported representations. The representation is part of
//! the value's identity: a caller that hands in an `i16` gets 16-bit-backed
//! arithmetic, including 16-bit overflow detection, until an operation
//! explicitly promotes the value.
//!
//! Binary operations promote both operands to the higher-ranked
//! representation of the pair (`I16 < I32 < I64 < F64 < Dec`) and compute
//! there. Bounded integer results are range-checked against the promoted
//! width rather than wrapped; float arithmetic follows IEEE-754; decimal
//! arithmetic is exact and checked.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::error::ArithmeticError;

/// Width of a bounded integer representation, ordered narrowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntWidth {
    /// 16 bits.
    W16,
    /// 32 bits.
    W32,
    /// 64 bits.
    W64,
}

/// An operand pair widened to a common representation.
///
/// Integer pairs are carried in `i64` together with the promoted width, so
/// the arithmetic itself cannot wrap and the result is range-checked
/// against the width afterwards.
enum Aligned {
    Int(i64, i64, IntWidth),
    Float(f64, f64),
    Dec(Decimal, Decimal),
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
const I64_MIN_F: f64 = i64::MIN as f64;
const I64_MAX_F: f64 = i64::MAX as f64;

/// A raw numeric value in one of the supported representations.
///
/// Equality and ordering compare *numbers*, not variants: `I16(1)` equals
/// `I64(1)` and `Dec(2.5)` equals `F64(2.5)`. Integer/float comparisons are
/// exact (no round-trip through `f64`), and hashing is consistent with
/// equality, so values work as map keys. For the `Eq` contract the float
/// variant treats NaN as equal to itself.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericValue {
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// IEEE-754 double-precision float.
    F64(f64),
    /// Exact base-10 decimal with a 96-bit mantissa.
    Dec(Decimal),
}

impl From<i16> for NumericValue {
    fn from(value: i16) -> Self {
        Self::I16(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<Decimal> for NumericValue {
    fn from(value: Decimal) -> Self {
        Self::Dec(value)
    }
}

impl NumericValue {
    /// This value in the `f64` lane. Wide integers and decimals round
    /// following IEEE-754.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::I16(v) => f64::from(v),
            Self::I32(v) => f64::from(v),
            Self::I64(v) => v as f64,
            Self::F64(v) => v,
            Self::Dec(v) => v.to_f64().unwrap_or(f64::NAN),
        }
    }

    /// This value as an exact decimal.
    ///
    /// Fails for floats with no decimal form: NaN, infinities, and
    /// magnitudes beyond the 96-bit mantissa.
    pub fn to_decimal(self) -> Result<Decimal, ArithmeticError> {
        match self {
            Self::I16(v) => Ok(Decimal::from(v)),
            Self::I32(v) => Ok(Decimal::from(v)),
            Self::I64(v) => Ok(Decimal::from(v)),
            Self::F64(v) => Decimal::from_f64(v).ok_or(ArithmeticError::Unrepresentable),
            Self::Dec(v) => Ok(v),
        }
    }

    /// Truncates toward zero into an `i64`, failing when the value lies
    /// outside the `i64` range or is NaN.
    pub fn to_i64_trunc(self) -> Result<i64, ArithmeticError> {
        match self {
            Self::I16(v) => Ok(i64::from(v)),
            Self::I32(v) => Ok(i64::from(v)),
            Self::I64(v) => Ok(v),
            Self::F64(v) => {
                if v.is_nan() {
                    return Err(ArithmeticError::Unrepresentable);
                }
                let t = v.trunc();
                if (I64_MIN_F..I64_MAX_F).contains(&t) {
                    Ok(t as i64)
                } else {
                    Err(ArithmeticError::Unrepresentable)
                }
            }
            Self::Dec(v) => v.trunc().to_i64().ok_or(ArithmeticError::Unrepresentable),
        }
    }

    fn as_int(self) -> Option<i64> {
        match self {
            Self::I16(v) => Some(i64::from(v)),
            Self::I32(v) => Some(i64::from(v)),
            Self::I64(v) => Some(v),
            Self::F64(_) | Self::Dec(_) => None,
        }
    }

    /// Narrows `v` into `width`, or fails with `Overflow`.
    pub(crate) fn narrow(v: i64, width: IntWidth) -> Result<Self, ArithmeticError> {
        match width {
            IntWidth::W16 => i16::try_from(v)
                .map(Self::I16)
                .map_err(|_| ArithmeticError::Overflow),
            IntWidth::W32 => i32::try_from(v)
                .map(Self::I32)
                .map_err(|_| ArithmeticError::Overflow),
            IntWidth::W64 => Ok(Self::I64(v)),
        }
    }

    /// Fits `v` into the narrowest width not below `preferred` that holds it.
    fn narrow_or_widen(v: i64, preferred: IntWidth) -> Self {
        match preferred {
            IntWidth::W16 if i16::try_from(v).is_ok() => Self::I16(v as i16),
            IntWidth::W16 | IntWidth::W32 if i32::try_from(v).is_ok() => Self::I32(v as i32),
            _ => Self::I64(v),
        }
    }

    /// The promotion table: widens both operands to the higher-ranked
    /// representation of the pair. Decimal outranks float outranks the
    /// integers, wider integers outrank narrower ones.
    fn align(self, rhs: Self) -> Result<Aligned, ArithmeticError> {
        use NumericValue::*;
        Ok(match (self, rhs) {
            (Dec(a), b) => Aligned::Dec(a, b.to_decimal()?),
            (a, Dec(b)) => Aligned::Dec(a.to_decimal()?, b),
            (F64(a), b) => Aligned::Float(a, b.to_f64()),
            (a, F64(b)) => Aligned::Float(a.to_f64(), b),
            (I16(a), I16(b)) => Aligned::Int(a.into(), b.into(), IntWidth::W16),
            (I16(a), I32(b)) => Aligned::Int(a.into(), b.into(), IntWidth::W32),
            (I32(a), I16(b)) => Aligned::Int(a.into(), b.into(), IntWidth::W32),
            (I32(a), I32(b)) => Aligned::Int(a.into(), b.into(), IntWidth::W32),
            (I16(a), I64(b)) => Aligned::Int(a.into(), b, IntWidth::W64),
            (I64(a), I16(b)) => Aligned::Int(a, b.into(), IntWidth::W64),
            (I32(a), I64(b)) => Aligned::Int(a.into(), b, IntWidth::W64),
            (I64(a), I32(b)) => Aligned::Int(a, b.into(), IntWidth::W64),
            (I64(a), I64(b)) => Aligned::Int(a, b, IntWidth::W64),
        })
    }

    /// Sum in the promoted representation; bounded representations overflow
    /// with a hard error instead of widening.
    pub fn checked_add(self, rhs: Self) -> Result<Self, ArithmeticError> {
        match self.align(rhs)? {
            Aligned::Int(a, b, w) => {
                let sum = a.checked_add(b).ok_or(ArithmeticError::Overflow)?;
                Self::narrow(sum, w)
            }
            Aligned::Float(a, b) => Ok(Self::F64(a + b)),
            Aligned::Dec(a, b) => a
                .checked_add(b)
                .map(Self::Dec)
                .ok_or(ArithmeticError::Overflow),
        }
    }

    /// Difference in the promoted representation, with the same overflow
    /// policy as [`checked_add`](Self::checked_add).
    pub fn checked_sub(self, rhs: Self) -> Result<Self, ArithmeticError> {
        match self.align(rhs)? {
            Aligned::Int(a, b, w) => {
                let diff = a.checked_sub(b).ok_or(ArithmeticError::Overflow)?;
                Self::narrow(diff, w)
            }
            Aligned::Float(a, b) => Ok(Self::F64(a - b)),
            Aligned::Dec(a, b) => a
                .checked_sub(b)
                .map(Self::Dec)
                .ok_or(ArithmeticError::Overflow),
        }
    }

    /// Additive inverse; fails for the asymmetric edge of two's complement
    /// (`i16::MIN` and friends).
    pub fn checked_neg(self) -> Result<Self, ArithmeticError> {
        match self {
            Self::I16(v) => v.checked_neg().map(Self::I16).ok_or(ArithmeticError::Overflow),
            Self::I32(v) => v.checked_neg().map(Self::I32).ok_or(ArithmeticError::Overflow),
            Self::I64(v) => v.checked_neg().map(Self::I64).ok_or(ArithmeticError::Overflow),
            Self::F64(v) => Ok(Self::F64(-v)),
            Self::Dec(v) => Ok(Self::Dec(-v)),
        }
    }

    /// Product in the promoted representation. Bounded integer products
    /// escalate to a wider integer, then to decimal, so multiplication
    /// stays exact as far as any representation allows.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, ArithmeticError> {
        match self.align(rhs)? {
            Aligned::Int(a, b, w) => match a.checked_mul(b) {
                Some(p) => Ok(Self::narrow_or_widen(p, w)),
                None => Decimal::from(a)
                    .checked_mul(Decimal::from(b))
                    .map(Self::Dec)
                    .ok_or(ArithmeticError::Overflow),
            },
            Aligned::Float(a, b) => Ok(Self::F64(a * b)),
            Aligned::Dec(a, b) => a
                .checked_mul(b)
                .map(Self::Dec)
                .ok_or(ArithmeticError::Overflow),
        }
    }

    /// Quotient in the promoted representation: truncating division for
    /// integers (`3 / 2 == 1`), real-valued division once a float or
    /// decimal is involved.
    pub fn checked_div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        match self.align(rhs)? {
            Aligned::Int(a, b, w) => {
                if b == 0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                let q = a.checked_div(b).ok_or(ArithmeticError::Overflow)?;
                Self::narrow(q, w)
            }
            Aligned::Float(a, b) => Ok(Self::F64(a / b)),
            Aligned::Dec(a, b) => {
                if b.is_zero() {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a.checked_div(b)
                    .map(Self::Dec)
                    .ok_or(ArithmeticError::Overflow)
            }
        }
    }

    /// Canonical identity of the number, independent of representation.
    /// Hashing goes through this key so it agrees with `PartialEq`.
    fn canonical_key(self) -> CanonicalKey {
        match self {
            Self::I16(v) => CanonicalKey::Int(v.into()),
            Self::I32(v) => CanonicalKey::Int(v.into()),
            Self::I64(v) => CanonicalKey::Int(v),
            Self::F64(v) => {
                if v.is_nan() {
                    return CanonicalKey::Bits(f64::NAN.to_bits());
                }
                if v.fract() == 0.0 && (I64_MIN_F..I64_MAX_F).contains(&v) {
                    return CanonicalKey::Int(v as i64);
                }
                match Decimal::from_f64(v) {
                    Some(d) => CanonicalKey::Dec(d.normalize()),
                    None => CanonicalKey::Bits(v.to_bits()),
                }
            }
            Self::Dec(d) => {
                if d.is_integer() {
                    if let Some(i) = d.to_i64() {
                        return CanonicalKey::Int(i);
                    }
                }
                CanonicalKey::Dec(d.normalize())
            }
        }
    }
}

enum CanonicalKey {
    Int(i64),
    Dec(Decimal),
    Bits(u64),
}

/// Exact ordering of an `i64` relative to an `f64`, without rounding the
/// integer through the float lane.
fn cmp_int_f64(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_MAX_F {
        return Some(Ordering::Less);
    }
    if f < I64_MIN_F {
        return Some(Ordering::Greater);
    }
    // In range, so the truncation is exact.
    let t = f.trunc() as i64;
    match i.cmp(&t) {
        Ordering::Equal if f.fract() > 0.0 => Some(Ordering::Less),
        Ordering::Equal if f.fract() < 0.0 => Some(Ordering::Greater),
        ord => Some(ord),
    }
}

impl PartialEq for NumericValue {
    fn eq(&self, other: &Self) -> bool {
        use NumericValue::*;
        match (*self, *other) {
            (F64(a), F64(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Dec(a), Dec(b)) => a == b,
            (Dec(d), F64(f)) | (F64(f), Dec(d)) => {
                Decimal::from_f64(f).is_some_and(|x| x == d)
            }
            (Dec(d), b) | (b, Dec(d)) => b.as_int().is_some_and(|i| Decimal::from(i) == d),
            (F64(f), b) | (b, F64(f)) => b
                .as_int()
                .is_some_and(|i| cmp_int_f64(i, f) == Some(Ordering::Equal)),
            (a, b) => a.as_int() == b.as_int(),
        }
    }
}

impl Eq for NumericValue {}

impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use NumericValue::*;
        match (*self, *other) {
            (F64(a), F64(b)) => {
                if a.is_nan() && b.is_nan() {
                    Some(Ordering::Equal)
                } else {
                    a.partial_cmp(&b)
                }
            }
            (Dec(a), Dec(b)) => Some(a.cmp(&b)),
            (Dec(d), F64(f)) => Decimal::from_f64(f).map(|x| d.cmp(&x)),
            (F64(f), Dec(d)) => Decimal::from_f64(f).map(|x| x.cmp(&d)),
            (F64(f), b) => b
                .as_int()
                .and_then(|i| cmp_int_f64(i, f))
                .map(Ordering::reverse),
            (b, F64(f)) => b.as_int().and_then(|i| cmp_int_f64(i, f)),
            (Dec(d), b) => b.as_int().map(|i| d.cmp(&Decimal::from(i))),
            (b, Dec(d)) => b.as_int().map(|i| Decimal::from(i).cmp(&d)),
            (a, b) => Some(a.as_int().cmp(&b.as_int())),
        }
    }
}

impl Hash for NumericValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.canonical_key() {
            CanonicalKey::Int(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            CanonicalKey::Dec(d) => {
                1u8.hash(state);
                d.hash(state);
            }
            CanonicalKey::Bits(b) => {
                2u8.hash(state);
                b.hash(state);
            }
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::Dec(v) => write!(f, "{}", v),
        }
    }
}
