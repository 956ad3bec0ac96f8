// ============================================================================
// Operation
// A single arithmetic call captured as a value
// ============================================================================

use crate::numeric::{self, CalcResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One call to one of the arithmetic operations, with its operands.
///
/// Lets an embedding program queue, log or serialize a request and evaluate
/// it later. Evaluation performs exactly one arithmetic call.
///
/// With the `serde` feature, finite operands serialize as JSON numbers and
/// non-finite ones as the strings `"inf"`, `"-inf"` and `"NaN"`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Operation {
    /// `a + b`
    Add {
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        a: f64,
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        b: f64,
    },

    /// `a - b`
    Subtract {
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        a: f64,
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        b: f64,
    },

    /// `a * b`
    Multiply {
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        a: f64,
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        b: f64,
    },

    /// `a / b`, rejects a zero divisor
    Divide {
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        a: f64,
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        b: f64,
    },

    /// `sqrt(n)`, rejects a negative operand
    SquareRoot {
        #[cfg_attr(feature = "serde", serde(with = "operand"))]
        n: f64,
    },
}

// ============================================================================
// Operand Serialization
// ============================================================================

/// JSON has no representation for infinities or NaN, so those operands
/// travel as strings.
#[cfg(feature = "serde")]
mod operand {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    const INFINITY: &str = "inf";
    const NEG_INFINITY: &str = "-inf";
    const NAN: &str = "NaN";

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(de::Error::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"NaN\"",
                )),
            },
        }
    }
}

impl Operation {
    /// Evaluate the operation.
    ///
    /// # Errors
    /// Propagates `DivisionByZero` from `Divide` and `InvalidDomain` from
    /// `SquareRoot`. The other variants always succeed.
    pub fn evaluate(self) -> CalcResult<f64> {
        match self {
            Operation::Add { a, b } => Ok(numeric::add(a, b)),
            Operation::Subtract { a, b } => Ok(numeric::subtract(a, b)),
            Operation::Multiply { a, b } => Ok(numeric::multiply(a, b)),
            Operation::Divide { a, b } => numeric::divide(a, b),
            Operation::SquareRoot { n } => numeric::square_root(n),
        }
    }

    /// Stable lowercase name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add { .. } => "add",
            Operation::Subtract { .. } => "subtract",
            Operation::Multiply { .. } => "multiply",
            Operation::Divide { .. } => "divide",
            Operation::SquareRoot { .. } => "square_root",
        }
    }

    /// Whether `evaluate` can return an error for some operands
    pub fn is_fallible(&self) -> bool {
        matches!(self, Operation::Divide { .. } | Operation::SquareRoot { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add { a, b } => write!(f, "{} + {}", a, b),
            Operation::Subtract { a, b } => write!(f, "{} - {}", a, b),
            Operation::Multiply { a, b } => write!(f, "{} * {}", a, b),
            Operation::Divide { a, b } => write!(f, "{} / {}", a, b),
            Operation::SquareRoot { n } => write!(f, "sqrt({})", n),
        }
    }
}
