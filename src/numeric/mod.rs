// ============================================================================
// Numeric Module
// Double-precision arithmetic with explicit domain errors
// ============================================================================
//
// This module provides:
// - add / subtract / multiply: infallible IEEE-754 operations
// - divide / square_root: operations that reject out-of-domain operands
// - CalcError: Error type for the fallible operations
// - approx_eq: Tolerance-based comparison of computed results
//
// Design principles:
// - Pure free functions, no state
// - Fallible operations return Result (no sentinel values, no panics)
// - Overflow and NaN follow IEEE-754 defaults

mod arithmetic;
mod errors;
mod tolerance;

pub use arithmetic::{add, divide, multiply, square_root, subtract};
pub use errors::{CalcError, CalcResult};
pub use tolerance::{approx_eq, DEFAULT_TOLERANCE};
