//! Error types for quantity arithmetic.

use thiserror::Error;

/// Failure modes of quantity arithmetic and conversion.
///
/// Operations never retry, clamp, or wrap: every failure is surfaced here
/// synchronously and the caller decides how to recover. Cross-dimension
/// arithmetic has no variant because it is rejected at compile time by the
/// dimension type parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An operation exceeded the bounded range of its representation after
    /// every scale-resolution attempt was exhausted.
    #[error("arithmetic overflow in bounded representation")]
    Overflow,

    /// A conversion produced a value the target representation cannot hold,
    /// such as a yotta-scaled magnitude narrowed into 16 bits or a
    /// non-finite float carried into exact decimal.
    #[error("value not representable in the target representation")]
    Unrepresentable,

    /// Integer or decimal division by zero. Float division follows IEEE-754
    /// and produces infinities instead.
    #[error("division by zero")]
    DivisionByZero,
}
