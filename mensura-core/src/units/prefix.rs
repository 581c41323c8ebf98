//! SI prefix factors.
//!
//! Exact decimal multipliers for the twenty metric prefixes from yocto
//! (10⁻²⁴) to yotta (10²⁴), the full span a 96-bit decimal mantissa can
//! carry. Combine them with [`Unit::scaled`](crate::Unit::scaled) to derive
//! prefixed units from a dimension's canonical unit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// `Y` (10²⁴).
pub const YOTTA: Decimal = dec!(1_000_000_000_000_000_000_000_000);

/// `Z` (10²¹).
pub const ZETTA: Decimal = dec!(1_000_000_000_000_000_000_000);

/// `E` (10¹⁸).
pub const EXA: Decimal = dec!(1_000_000_000_000_000_000);

/// `P` (10¹⁵).
pub const PETA: Decimal = dec!(1_000_000_000_000_000);

/// `T` (10¹²).
pub const TERA: Decimal = dec!(1_000_000_000_000);

/// `G` (10⁹).
pub const GIGA: Decimal = dec!(1_000_000_000);

/// `M` (10⁶).
pub const MEGA: Decimal = dec!(1_000_000);

/// `k` (10³).
pub const KILO: Decimal = dec!(1_000);

/// `h` (10²).
pub const HECTO: Decimal = dec!(100);

/// `da` (10¹).
pub const DECA: Decimal = dec!(10);

/// `d` (10⁻¹).
pub const DECI: Decimal = dec!(0.1);

/// `c` (10⁻²).
pub const CENTI: Decimal = dec!(0.01);

/// `m` (10⁻³).
pub const MILLI: Decimal = dec!(0.001);

/// `µ` (10⁻⁶).
pub const MICRO: Decimal = dec!(0.000001);

/// `n` (10⁻⁹).
pub const NANO: Decimal = dec!(0.000000001);

/// `p` (10⁻¹²).
pub const PICO: Decimal = dec!(0.000000000001);

/// `f` (10⁻¹⁵).
pub const FEMTO: Decimal = dec!(0.000000000000001);

/// `a` (10⁻¹⁸).
pub const ATTO: Decimal = dec!(0.000000000000000001);

/// `z` (10⁻²¹).
pub const ZEPTO: Decimal = dec!(0.000000000000000000001);

/// `y` (10⁻²⁴).
pub const YOCTO: Decimal = dec!(0.000000000000000000000001);
