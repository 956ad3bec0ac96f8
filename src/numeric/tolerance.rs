// ============================================================================
// Tolerance
// Approximate comparison of floating-point results
// ============================================================================

/// Default tolerance for comparing computed results (six decimal places).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Compare two floating-point values within `tolerance`.
///
/// The tolerance is absolute for magnitudes up to 1 and relative above that,
/// so both `approx_eq(1e-9, 0.0, 1e-6)` and `approx_eq(1e12, 1e12 + 1.0, 1e-6)`
/// hold. Equal infinities compare equal; any NaN compares unequal.
///
/// # Example
/// ```rust
/// use calculator::numeric::{approx_eq, divide, DEFAULT_TOLERANCE};
///
/// let q = divide(-505.5, -10.5).unwrap();
/// assert!(approx_eq(q, 48.142857, DEFAULT_TOLERANCE));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= tolerance * scale
}
