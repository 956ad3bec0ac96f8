// ============================================================================
// Calculation Errors
// Domain errors signalled by the fallible arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during an arithmetic operation.
///
/// Only inputs outside an operation's mathematical domain are errors.
/// Overflow to infinity and NaN propagation follow IEEE-754 and are returned
/// as ordinary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Divisor was exactly zero (`+0.0` or `-0.0`)
    DivisionByZero,
    /// Square root of a strictly negative operand
    InvalidDomain,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::InvalidDomain => {
                write!(f, "invalid domain: square root of a negative number")
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;
