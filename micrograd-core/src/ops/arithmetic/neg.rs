use crate::ops::mul_op;
use crate::value::Value;

/// Negation, built as `a * -1`.
pub fn neg_op(a: impl Into<Value>) -> Value {
    mul_op(a, -1.0)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
