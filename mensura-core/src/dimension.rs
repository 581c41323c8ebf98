//! Dimension types and traits.

/// Marker trait for **dimensions** (Time, Temperature, ElectricResistance …).
///
/// A *dimension* is the category that distinguishes an ohm from a second.
/// Two quantities are compatible if and only if they share a dimension, and
/// that check happens entirely at the type level: arithmetic across
/// dimensions does not compile. You usually model each dimension as an
/// empty enum:
///
/// ```rust
/// use mensura_core::Dimension;
/// pub enum Charge {}
/// impl Dimension for Charge {}
/// ```
pub trait Dimension {}
