// ============================================================================
// Arithmetic Operations
// IEEE-754 double-precision arithmetic with explicit domain errors
// ============================================================================

use super::errors::{CalcError, CalcResult};

/// Add two numbers.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// A NaN divisor is not zero and propagates as `Ok(NaN)`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is `+0.0` or `-0.0`.
///
/// # Example
/// ```rust
/// use calculator::numeric::{divide, CalcError};
///
/// assert_eq!(divide(4.0, 2.0), Ok(2.0));
/// assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
/// ```
#[inline]
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        tracing::debug!(dividend = a, "rejected division by zero");
        return Err(CalcError::DivisionByZero);
    }

    Ok(a / b)
}

/// Non-negative square root of `n`.
///
/// `-0.0` is not negative and yields `Ok(-0.0)`; NaN yields `Ok(NaN)`.
///
/// # Errors
/// Returns `InvalidDomain` if `n` is strictly negative (including `-inf`).
#[inline]
pub fn square_root(n: f64) -> CalcResult<f64> {
    if n < 0.0 {
        tracing::debug!(operand = n, "rejected square root of negative operand");
        return Err(CalcError::InvalidDomain);
    }

    Ok(n.sqrt())
}
