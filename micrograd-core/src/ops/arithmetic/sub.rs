use crate::ops::{add_op, neg_op};
use crate::value::Value;

/// Subtraction, built as `a + (-b)`.
pub fn sub_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
