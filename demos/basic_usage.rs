// ============================================================================
// Basic Usage Example
// ============================================================================

use calculator::prelude::*;
use calculator::utils::init_logging;

fn main() {
    if !init_logging() {
        println!("(reusing the already installed tracing subscriber)");
    }

    println!("=== Calculator Example ===\n");

    println!("add(2, 2)              = {}", add(2.0, 2.0));
    println!("subtract(-5.5, -10.9)  = {}", subtract(-5.5, -10.9));
    println!("multiply(-5.5, -10.9)  = {}", multiply(-5.5, -10.9));

    // Fallible operations return a Result; the error is the only signal
    println!("\n=== Fallible Operations ===");
    for (a, b) in [(4.0, 2.0), (5.0, 0.0)] {
        match divide(a, b) {
            Ok(q) => println!("divide({}, {})  = {}", a, b, q),
            Err(e) => println!("divide({}, {})  failed: {}", a, b, e),
        }
    }
    for n in [4.0, 0.0, -9.0] {
        match square_root(n) {
            Ok(r) => println!("square_root({})  = {}", n, r),
            Err(e) => println!("square_root({})  failed: {}", n, e),
        }
    }

    // Queue requests as values and evaluate them later
    println!("\n=== Queued Operations ===");
    let queue = [
        Operation::Add { a: -5.5, b: -10.9 },
        Operation::Divide { a: -505.5, b: -10.5 },
        Operation::SquareRoot { n: 5.0 },
        Operation::Divide { a: -5.0, b: 0.0 },
    ];

    for op in queue {
        match op.evaluate() {
            Ok(value) => println!("  {:<16} = {}", op.to_string(), value),
            Err(e) => println!("  {:<16} -> {} ({})", op.to_string(), e, op.name()),
        }
    }
}
