// ============================================================================
// Calculator Library
// Double-precision arithmetic with explicit domain errors
// ============================================================================

//! # Calculator
//!
//! A small, stateless arithmetic library for embedding in larger programs.
//!
//! ## Features
//!
//! - **Four binary operations** (`add`, `subtract`, `multiply`, `divide`)
//! - **Square root** with domain checking
//! - **Tagged results**: fallible operations return [`CalcResult`](numeric::CalcResult),
//!   never a sentinel value
//! - **Reified calls** via [`Operation`](domain::Operation), serializable with
//!   the `serde` feature
//!
//! ## Example
//!
//! ```rust
//! use calculator::prelude::*;
//!
//! assert_eq!(add(2.0, 2.0), 4.0);
//! assert_eq!(divide(4.0, 2.0), Ok(2.0));
//! assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
//!
//! let op = Operation::SquareRoot { n: -9.0 };
//! match op.evaluate() {
//!     Ok(value) => println!("{} = {}", op, value),
//!     Err(e) => println!("{} failed: {}", op, e),
//! }
//! ```

pub mod domain;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::Operation;
    pub use crate::numeric::{
        add, approx_eq, divide, multiply, square_root, subtract, CalcError, CalcResult,
        DEFAULT_TOLERANCE,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::thread;

    #[test]
    fn test_documented_scenarios() {
        assert_eq!(add(2.0, 2.0), 4.0);
        assert_eq!(subtract(-5.5, -10.9), 5.4);
        assert_eq!(multiply(-5.5, -10.9), 59.95);
        assert_eq!(divide(4.0, 2.0), Ok(2.0));
        assert_eq!(divide(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(square_root(4.0), Ok(2.0));
        assert_eq!(square_root(-9.0), Err(CalcError::InvalidDomain));
        assert_eq!(square_root(0.0), Ok(0.0));
    }

    #[test]
    fn test_errors_propagate_with_question_mark() {
        fn hypotenuse_over(a: f64, b: f64, d: f64) -> CalcResult<f64> {
            let h = square_root(add(multiply(a, a), multiply(b, b)))?;
            divide(h, d)
        }

        assert_eq!(hypotenuse_over(3.0, 4.0, 5.0), Ok(1.0));
        assert_eq!(
            hypotenuse_over(3.0, 4.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_concurrent_callers() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let x = i as f64;
                    let ops = [
                        Operation::Multiply { a: x, b: x },
                        Operation::SquareRoot { n: x * x },
                        Operation::Divide { a: x, b: 0.0 },
                    ];
                    ops.map(Operation::evaluate)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let x = i as f64;
            let [squared, root, quotient] = handle.join().unwrap();
            assert_eq!(squared, Ok(x * x));
            assert_eq!(root, Ok(x));
            assert_eq!(quotient, Err(CalcError::DivisionByZero));
        }
    }
}
