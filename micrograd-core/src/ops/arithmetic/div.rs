use crate::ops::{mul_op, pow_op};
use crate::value::Value;

/// Division, built as `a * b^-1`.
///
/// Dividing by a zero-valued node gives `inf`/`NaN` through `pow`, never an error.
pub fn div_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    mul_op(a, pow_op(b, -1.0))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
